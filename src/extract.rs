//! Comment stripping and entry-point extraction for editor code.
//!
//! Everything here is a pure text function. Declarations are found by a small
//! ordered list of structural matchers per language; the leftmost match in the
//! text wins and ties go to the matcher listed first.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Type,
}

/// The callable or type a generated test should exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Enclosing class or impl type of a member function.
    pub owner: Option<String>,
    pub params: Vec<String>,
    /// Byte offset where the first matched declaration starts.
    pub decl_offset: usize,
}

struct Matcher {
    kind: SymbolKind,
    pattern: &'static LazyLock<Regex>,
}

struct Found {
    kind: SymbolKind,
    start: usize,
    name: String,
    args: String,
}

static TS_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)\s*(?:<[^>]*>)?\s*\(([^)]*)\)").unwrap()
});
static TS_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_$][\w$]*)[^{]*\{").unwrap());
static CPP_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_]\w*)[^;{]*\{").unwrap());
static CPP_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[\w:<>,*&]+[ \t*&]+)+([A-Za-z_]\w*)[ \t]*\(([^)]*)\)[^;{\n]*\{")
        .unwrap()
});
static RUST_IMPL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimpl\b(?:\s*<[^>]*>)?\s+([A-Za-z_]\w*)").unwrap());
static RUST_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfn\s+([A-Za-z_]\w*)\s*(?:<[^>]*>)?\s*\(([^)]*)\)").unwrap()
});

const CPP_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "return", "catch", "else", "do", "sizeof", "new", "delete",
];

fn matchers(language: Language) -> &'static [Matcher] {
    static TS: [Matcher; 2] = [
        Matcher { kind: SymbolKind::Function, pattern: &TS_FUNCTION },
        Matcher { kind: SymbolKind::Type, pattern: &TS_CLASS },
    ];
    static CPP: [Matcher; 2] = [
        Matcher { kind: SymbolKind::Type, pattern: &CPP_CLASS },
        Matcher { kind: SymbolKind::Function, pattern: &CPP_FUNCTION },
    ];
    static RUST: [Matcher; 2] = [
        Matcher { kind: SymbolKind::Type, pattern: &RUST_IMPL },
        Matcher { kind: SymbolKind::Function, pattern: &RUST_FUNCTION },
    ];

    match language {
        Language::TypeScript => &TS,
        Language::Cpp => &CPP,
        Language::Rust => &RUST,
    }
}

/// Whether a matched type declaration hands off to the first function
/// declared after it. TypeScript methods carry no keyword, so it never does.
fn promotes_members(language: Language) -> bool {
    match language {
        Language::TypeScript => false,
        Language::Cpp | Language::Rust => true,
    }
}

/// Drop the last non-empty line when it is nothing but a comment opener.
///
/// Returns a prefix of `text`, so byte offsets into the result are valid in
/// the original.
pub fn strip_trailing_comment(text: &str) -> &str {
    let trimmed_len = text.trim_end().len();
    let body = &text[..trimmed_len];
    let line_start = body.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let last_line = body[line_start..].trim_start();

    if last_line.starts_with("//") || last_line.starts_with("/*") {
        &text[..line_start]
    } else {
        text
    }
}

/// Blank out `//` and `/* */` comment bodies, keeping newlines and byte
/// offsets intact.
pub fn mask_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = bytes.to_vec();
    let mut i = 0;

    while i < bytes.len() {
        let next = bytes.get(i + 1).copied();
        if bytes[i] == b'/' && next == Some(b'/') {
            while i < bytes.len() && bytes[i] != b'\n' {
                out[i] = b' ';
                i += 1;
            }
        } else if bytes[i] == b'/' && next == Some(b'*') {
            out[i] = b' ';
            out[i + 1] = b' ';
            i += 2;
            while i < bytes.len() {
                if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 2;
                    break;
                }
                if bytes[i] != b'\n' {
                    out[i] = b' ';
                }
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    // Whole characters are replaced, so the bytes stay valid UTF-8.
    String::from_utf8(out).unwrap_or_else(|_| text.to_string())
}

fn find_first(matcher: &Matcher, text: &str, from: usize, language: Language) -> Option<Found> {
    matcher
        .pattern
        .captures_iter(&text[from..])
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            if language == Language::Cpp && CPP_KEYWORDS.contains(&name) {
                return None;
            }
            Some(Found {
                kind: matcher.kind,
                start: from + whole.start(),
                name: name.to_string(),
                args: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
            })
        })
        .next()
}

/// Find the entry point of a problem's editor code.
pub fn extract_symbol(text: &str, language: Language) -> Option<Symbol> {
    let stripped = strip_trailing_comment(text);
    let masked = mask_comments(stripped);
    let matchers = matchers(language);

    let mut first: Option<Found> = None;
    for matcher in matchers {
        if let Some(found) = find_first(matcher, &masked, 0, language) {
            if first.as_ref().map_or(true, |f| found.start < f.start) {
                first = Some(found);
            }
        }
    }
    let first = first?;
    let decl_offset = first.start;

    if first.kind == SymbolKind::Type && promotes_members(language) {
        let member = matchers
            .iter()
            .filter(|m| m.kind == SymbolKind::Function)
            .filter_map(|m| find_first(m, &masked, first.start + 1, language))
            .min_by_key(|f| f.start);
        if let Some(member) = member {
            return Some(Symbol {
                params: param_names(&member.args, language),
                name: member.name,
                kind: SymbolKind::Function,
                owner: Some(first.name),
                decl_offset,
            });
        }
    }

    Some(Symbol {
        params: param_names(&first.args, language),
        name: first.name,
        kind: first.kind,
        owner: None,
        decl_offset,
    })
}

/// Split a parameter list on top-level commas.
pub fn split_params(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in params.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&params[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&params[start..]);
    parts.into_iter().map(str::trim).filter(|p| !p.is_empty()).collect()
}

fn param_names(args: &str, language: Language) -> Vec<String> {
    split_params(args)
        .into_iter()
        .filter_map(|param| {
            let name = match language {
                Language::Cpp => {
                    let decl = param.split('=').next().unwrap_or(param).trim();
                    decl.rsplit(|c: char| c.is_whitespace() || c == '&' || c == '*')
                        .find(|s| !s.is_empty())
                        .unwrap_or(decl)
                }
                Language::Rust => param
                    .split(':')
                    .next()
                    .unwrap_or(param)
                    .trim()
                    .trim_start_matches("mut ")
                    .trim(),
                Language::TypeScript => param
                    .split(|c| c == ':' || c == '=' || c == '?')
                    .next()
                    .unwrap_or(param)
                    .trim(),
            };
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS_TWO_SUM: &str = "function twoSum(nums: number[], target: number): number[] {\n\n};";

    const TS_LIST: &str = "/**\n * Definition for singly-linked list.\n * class ListNode {\n *     val: number\n * }\n */\n\nfunction reverseList(head: ListNode | null): ListNode | null {\n\n};";

    const CPP_TWO_SUM: &str = "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {\n        \n    }\n};";

    const CPP_MIN_STACK: &str = "class MinStack {\npublic:\n    MinStack() {\n\n    }\n    \n    void push(int val) {\n\n    }\n};";

    const RUST_TWO_SUM: &str = "impl Solution {\n    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {\n\n    }\n}";

    #[test]
    fn test_strip_trailing_line_comment() {
        let text = "function f() {}\n// stray\n";
        assert_eq!(strip_trailing_comment(text), "function f() {}\n");
    }

    #[test]
    fn test_strip_trailing_block_opener() {
        let text = "class A {}\n\n   /* leftover";
        assert_eq!(strip_trailing_comment(text), "class A {}\n\n");
    }

    #[test]
    fn test_strip_keeps_code_lines() {
        let text = "fn a() {} // trailing note";
        assert_eq!(strip_trailing_comment(text), text);
        assert_eq!(strip_trailing_comment(""), "");
    }

    #[test]
    fn test_mask_preserves_offsets() {
        let text = "// 注释\nfn a() {}\n/* x\n y */ fn b() {}";
        let masked = mask_comments(text);
        assert_eq!(masked.len(), text.len());
        assert_eq!(masked.find("fn a"), text.find("fn a"));
        assert_eq!(masked.find("fn b"), text.find("fn b"));
        assert!(!masked.contains("注释"));
    }

    #[test]
    fn test_typescript_function() {
        let symbol = extract_symbol(TS_TWO_SUM, Language::TypeScript).unwrap();
        assert_eq!(symbol.name, "twoSum");
        assert_eq!(symbol.kind, SymbolKind::Function);
        assert_eq!(symbol.params, vec!["nums", "target"]);
        assert_eq!(symbol.decl_offset, 0);
    }

    #[test]
    fn test_typescript_skips_commented_class() {
        let symbol = extract_symbol(TS_LIST, Language::TypeScript).unwrap();
        assert_eq!(symbol.name, "reverseList");
        assert_eq!(&TS_LIST[symbol.decl_offset..symbol.decl_offset + 8], "function");
    }

    #[test]
    fn test_typescript_class() {
        let code = "class MinStack {\n    constructor() {\n\n    }\n}";
        let symbol = extract_symbol(code, Language::TypeScript).unwrap();
        assert_eq!(symbol.name, "MinStack");
        assert_eq!(symbol.kind, SymbolKind::Type);
        assert_eq!(symbol.owner, None);
    }

    #[test]
    fn test_cpp_member_function() {
        let symbol = extract_symbol(CPP_TWO_SUM, Language::Cpp).unwrap();
        assert_eq!(symbol.name, "twoSum");
        assert_eq!(symbol.owner.as_deref(), Some("Solution"));
        assert_eq!(symbol.params, vec!["nums", "target"]);
    }

    #[test]
    fn test_cpp_skips_constructor() {
        let symbol = extract_symbol(CPP_MIN_STACK, Language::Cpp).unwrap();
        assert_eq!(symbol.name, "push");
        assert_eq!(symbol.owner.as_deref(), Some("MinStack"));
        assert_eq!(symbol.params, vec!["val"]);
    }

    #[test]
    fn test_cpp_param_names() {
        let code = "class Solution {\npublic:\n    int f(const string& s, map<int, int>* m, int k = 3) {\n    }\n};";
        let symbol = extract_symbol(code, Language::Cpp).unwrap();
        assert_eq!(symbol.params, vec!["s", "m", "k"]);
    }

    #[test]
    fn test_rust_impl_method() {
        let symbol = extract_symbol(RUST_TWO_SUM, Language::Rust).unwrap();
        assert_eq!(symbol.name, "two_sum");
        assert_eq!(symbol.owner.as_deref(), Some("Solution"));
        assert_eq!(symbol.params, vec!["nums", "target"]);
    }

    #[test]
    fn test_rust_design_problem() {
        let code = "struct MinStack {\n\n}\n\nimpl MinStack {\n\n    fn new() -> Self {\n\n    }\n}";
        let symbol = extract_symbol(code, Language::Rust).unwrap();
        assert_eq!(symbol.name, "new");
        assert_eq!(symbol.owner.as_deref(), Some("MinStack"));
        assert!(symbol.params.is_empty());
    }

    #[test]
    fn test_no_declaration() {
        assert_eq!(extract_symbol("SELECT * FROM Person;", Language::TypeScript), None);
        assert_eq!(extract_symbol("# Write your MySQL query statement below", Language::Cpp), None);
        assert_eq!(extract_symbol("", Language::Rust), None);
    }

    #[test]
    fn test_split_params_respects_nesting() {
        assert_eq!(
            split_params("map<int, int> m, vector<pair<int, int>> v"),
            vec!["map<int, int> m", "vector<pair<int, int>> v"]
        );
        assert!(split_params("  ").is_empty());
    }
}
