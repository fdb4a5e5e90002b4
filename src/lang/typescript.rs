use std::sync::LazyLock;

use regex::Regex;

use crate::extract::{Symbol, SymbolKind};
use crate::models::{ProblemRecord, WorkspacePaths};

static EXPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)export[ \t]+").unwrap());

/// Export the entry point so the test file can import it.
pub(super) fn widen_visibility(code: &str, symbol: Option<&Symbol>) -> String {
    match symbol {
        Some(sym) if !EXPORT.is_match(code) && code.is_char_boundary(sym.decl_offset) => {
            format!("{}export {}", &code[..sym.decl_offset], &code[sym.decl_offset..])
        }
        _ => code.to_string(),
    }
}

pub(super) fn strip_scaffolding(text: &str) -> String {
    EXPORT.replace_all(text, "${1}").into_owned()
}

fn import_path(paths: &WorkspacePaths) -> String {
    format!("../../src/{}/{}", paths.category, paths.slug)
}

pub(super) fn render_test(
    record: &ProblemRecord,
    paths: &WorkspacePaths,
    symbol: Option<&Symbol>,
) -> String {
    let Some(sym) = symbol else {
        return format!("import '{}'\n", import_path(paths));
    };

    let assertion = match sym.kind {
        SymbolKind::Function => format!("expect({}()).toBeFalsy()", sym.name),
        SymbolKind::Type => format!("expect(new {}()).toBeTruthy()", sym.name),
    };

    format!(
        r#"import {{ {name} }} from '{path}'

test('{title}', () => {{
{examples}
  {assertion}
}})
"#,
        name = sym.name,
        path = import_path(paths),
        title = record.name().replace('\'', "\\'"),
        examples = super::render_examples(&record.example_blocks, "  "),
        assertion = assertion,
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::extract::extract_symbol;
    use crate::lang::fixtures;
    use crate::models::Language;

    const URL: &str = "https://leetcode.cn/problems/two-sum/";

    #[test]
    fn test_widen_skips_exported_code() {
        let code = "export function a() {}";
        let symbol = extract_symbol(code, Language::TypeScript);
        assert_eq!(widen_visibility(code, symbol.as_ref()), code);
        assert_eq!(widen_visibility("let x = 1", None), "let x = 1");
    }

    #[test]
    fn test_strip_removes_exports() {
        let text = "// t\nexport function a() {}\nexport class B {}";
        assert_eq!(strip_scaffolding(text), "// t\nfunction a() {}\nclass B {}");
    }

    #[test]
    fn test_strip_keeps_export_in_comments_and_strings() {
        let text = "// export the answer\nexport function a() {\n  return 'export me'\n}\n  export const b = 1";
        assert_eq!(
            strip_scaffolding(text),
            "// export the answer\nfunction a() {\n  return 'export me'\n}\n  const b = 1"
        );
    }

    #[test]
    fn test_function_test_stub() {
        let code = "function twoSum(nums: number[], target: number): number[] {\n\n};";
        let record = fixtures::record(URL, "1. 两数之和", code);
        let paths = fixtures::paths(Path::new("/w"), &record, Language::TypeScript);
        let symbol = extract_symbol(code, Language::TypeScript);

        let text = render_test(&record, &paths, symbol.as_ref());
        assert!(text.starts_with("import { twoSum } from '../../src/array/two-sum'\n\ntest('两数之和', () => {\n  // 示例 1：\n"));
        assert!(text.ends_with("  // 输出：[1,2]\n  expect(twoSum()).toBeFalsy()\n})\n"));
    }

    #[test]
    fn test_class_test_stub() {
        let code = "class MinStack {\n    constructor() {}\n}";
        let record = fixtures::record("https://leetcode.cn/problems/min-stack/", "155. 最小栈", code);
        let paths = fixtures::paths(Path::new("/w"), &record, Language::TypeScript);
        let symbol = extract_symbol(code, Language::TypeScript);

        let text = render_test(&record, &paths, symbol.as_ref());
        assert!(text.contains("expect(new MinStack()).toBeTruthy()"));
    }

    #[test]
    fn test_degraded_stub() {
        let record = fixtures::record(URL, "1. 两数之和", "");
        let paths = fixtures::paths(Path::new("/w"), &record, Language::TypeScript);
        let text = render_test(&record, &paths, None);
        assert_eq!(text, "import '../../src/array/two-sum'\n");
        assert!(!text.contains("expect"));
    }
}
