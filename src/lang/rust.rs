use std::sync::LazyLock;

use regex::Regex;

use crate::extract::{mask_comments, Symbol, SymbolKind};
use crate::models::{ProblemRecord, WorkspacePaths};

use super::RegistryLine;

const SOLUTION_STRUCT: &str = "pub struct Solution;";
const LIST_NODE_USE: &str = "use crate::libs::list_node::ListNode;";
const TREE_NODE_USE: &str = "use crate::libs::tree_node::TreeNode;";

static PRIVATE_STRUCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\s*)struct\s").unwrap());
static PRIVATE_FN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\s*)fn\s").unwrap());

/// Make a design problem's type and methods public so the test crate can use
/// them. `Solution` templates already are.
pub(super) fn widen_visibility(code: &str, symbol: Option<&Symbol>) -> String {
    let owner = match symbol {
        Some(sym) => sym.owner.as_deref().unwrap_or(&sym.name),
        None => return code.to_string(),
    };
    if owner == "Solution" {
        return code.to_string();
    }

    let code = PRIVATE_STRUCT.replace_all(code, "${1}pub struct ");
    PRIVATE_FN.replace_all(&code, "${1}pub fn ").into_owned()
}

/// Placeholder type plus imports for the shared node types the code uses.
pub(super) fn preamble(code: &str) -> Vec<String> {
    let live_code = mask_comments(code);
    let mut lines = Vec::new();

    if !code.contains(SOLUTION_STRUCT) {
        lines.push(SOLUTION_STRUCT.to_string());
    }
    if live_code.contains("ListNode") && !code.contains(LIST_NODE_USE) {
        lines.push(LIST_NODE_USE.to_string());
    }
    if live_code.contains("TreeNode") && !code.contains(TREE_NODE_USE) {
        lines.push(TREE_NODE_USE.to_string());
    }
    lines
}

pub(super) fn strip_scaffolding(text: &str) -> String {
    let text = super::remove_line(text, SOLUTION_STRUCT);
    let text = super::remove_line(&text, LIST_NODE_USE);
    super::remove_line(&text, TREE_NODE_USE)
}

pub(super) fn render_test(
    record: &ProblemRecord,
    paths: &WorkspacePaths,
    symbol: Option<&Symbol>,
    crate_name: &str,
) -> String {
    let module = format!("{}::{}::{}", crate_name, paths.category, paths.slug);

    let Some(sym) = symbol else {
        return format!("use {}::Solution;\n", module);
    };

    let (owner, call) = match (&sym.kind, &sym.owner) {
        (SymbolKind::Function, Some(owner)) => (owner.as_str(), format!("{}::{}()", owner, sym.name)),
        (SymbolKind::Function, None) => ("Solution", format!("Solution::{}()", sym.name)),
        (SymbolKind::Type, _) => (sym.name.as_str(), format!("{}::new()", sym.name)),
    };

    format!(
        r#"use {module}::{owner};

#[test]
fn {name}() {{
{examples}
    assert_eq!({call}, 1);
}}
"#,
        module = module,
        owner = owner,
        name = sym.name,
        examples = super::render_examples(&record.example_blocks, "    "),
        call = call,
    )
}

/// Module declarations that make the new source and test files part of the
/// build: category `mod.rs` files, the crate root and the aggregate test root.
pub(super) fn registry_lines(paths: &WorkspacePaths) -> Vec<RegistryLine> {
    let root = &paths.root;
    let category = paths.category.as_str();

    vec![
        RegistryLine {
            path: root.join("src").join(category).join("mod.rs"),
            line: format!("pub mod {};", paths.slug),
        },
        RegistryLine {
            path: root.join("tests").join(category).join("mod.rs"),
            line: format!("pub mod {}_test;", paths.slug),
        },
        RegistryLine {
            path: root.join("src").join("lib.rs"),
            line: format!("pub mod {};", category),
        },
        RegistryLine {
            path: root.join("tests").join("tests.rs"),
            line: format!("mod {};", category),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::extract::extract_symbol;
    use crate::lang::fixtures;
    use crate::models::Language;

    const URL: &str = "https://leetcode.cn/problems/two-sum/?envType=study";

    #[test]
    fn test_solution_stub() {
        let code = "impl Solution {\n    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {\n\n    }\n}";
        let record = fixtures::record(URL, "1. 两数之和", code);
        let paths = fixtures::paths(Path::new("/w"), &record, Language::Rust);
        let symbol = extract_symbol(code, Language::Rust);

        let text = render_test(&record, &paths, symbol.as_ref(), "rust_practice");
        assert!(text.starts_with("use rust_practice::array::two_sum::Solution;\n\n#[test]\nfn two_sum() {\n    // 示例 1：\n"));
        assert!(text.ends_with("    assert_eq!(Solution::two_sum(), 1);\n}\n"));
    }

    #[test]
    fn test_design_problem_stub() {
        let code = "struct MinStack {}\n\nimpl MinStack {\n    fn new() -> Self {\n    }\n}";
        let record = fixtures::record("https://leetcode.cn/problems/min-stack/", "155. 最小栈", code);
        let paths = fixtures::paths(Path::new("/w"), &record, Language::Rust);
        let symbol = extract_symbol(code, Language::Rust);

        let text = render_test(&record, &paths, symbol.as_ref(), "practice");
        assert!(text.starts_with("use practice::array::min_stack::MinStack;\n"));
        assert!(text.contains("assert_eq!(MinStack::new(), 1);"));
    }

    #[test]
    fn test_design_problem_is_made_public() {
        let code = "struct MinStack {\n    data: Vec<i32>,\n}\n\nimpl MinStack {\n    fn new() -> Self {\n    }\n\n    pub fn push(&mut self, val: i32) {\n    }\n}";
        let symbol = extract_symbol(code, Language::Rust);

        let widened = widen_visibility(code, symbol.as_ref());
        assert_eq!(
            widened,
            "pub struct MinStack {\n    data: Vec<i32>,\n}\n\nimpl MinStack {\n    pub fn new() -> Self {\n    }\n\n    pub fn push(&mut self, val: i32) {\n    }\n}"
        );
        assert_eq!(widen_visibility(&widened, symbol.as_ref()), widened);
    }

    #[test]
    fn test_solution_visibility_is_untouched() {
        let code = "impl Solution {\n    pub fn two_sum() {}\n    fn helper() {}\n}";
        let symbol = extract_symbol(code, Language::Rust);
        assert_eq!(widen_visibility(code, symbol.as_ref()), code);
        assert_eq!(widen_visibility("struct A;", None), "struct A;");
    }

    #[test]
    fn test_degraded_stub() {
        let record = fixtures::record(URL, "1. 两数之和", "");
        let paths = fixtures::paths(Path::new("/w"), &record, Language::Rust);
        assert_eq!(
            render_test(&record, &paths, None, "rust_practice"),
            "use rust_practice::array::two_sum::Solution;\n"
        );
    }

    #[test]
    fn test_preamble_node_imports() {
        let code = "// Definition for a binary tree node.\n// pub struct TreeNode {}\nimpl Solution {\n    pub fn reverse_list(head: Option<Box<ListNode>>) {}\n}";
        assert_eq!(preamble(code), vec![SOLUTION_STRUCT.to_string(), LIST_NODE_USE.to_string()]);
    }

    #[test]
    fn test_strip_scaffolding() {
        let text = "// t\npub struct Solution;\nuse crate::libs::list_node::ListNode;\nimpl Solution {}";
        assert_eq!(strip_scaffolding(text), "// t\nimpl Solution {}");
    }

    #[test]
    fn test_registry_lines() {
        let record = fixtures::record(URL, "1. 两数之和", "");
        let paths = fixtures::paths(Path::new("/w"), &record, Language::Rust);
        let lines = registry_lines(&paths);

        assert_eq!(lines[0].path, Path::new("/w/src/array/mod.rs"));
        assert_eq!(lines[0].line, "pub mod two_sum;");
        assert_eq!(lines[1].path, Path::new("/w/tests/array/mod.rs"));
        assert_eq!(lines[1].line, "pub mod two_sum_test;");
        assert_eq!(lines[2].line, "pub mod array;");
        assert_eq!(lines[3].path, Path::new("/w/tests/tests.rs"));
        assert_eq!(lines[3].line, "mod array;");
    }
}
