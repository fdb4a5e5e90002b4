use clap::ValueEnum;

/// Target language of the generated workspace entry.
///
/// Each variant carries its own file layout and boilerplate rules; every
/// per-language decision in the crate is an exhaustive match on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    #[value(name = "c++", alias = "cpp")]
    Cpp,
    #[value(name = "rust", alias = "rs")]
    Rust,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::Cpp => "C++",
            Language::Rust => "Rust",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::Cpp => "cpp",
            Language::Rust => "rs",
        }
    }

    /// Appended to the slug to name the test file.
    pub fn test_suffix(&self) -> &'static str {
        match self {
            Language::TypeScript => ".test.ts",
            Language::Cpp => "_test.cpp",
            Language::Rust => "_test.rs",
        }
    }

    pub fn test_root(&self) -> &'static str {
        match self {
            Language::TypeScript | Language::Cpp => "test",
            Language::Rust => "tests",
        }
    }

    /// Whether module identifiers derived from the slug may contain hyphens.
    pub fn keeps_hyphens(&self) -> bool {
        match self {
            Language::TypeScript => true,
            Language::Cpp | Language::Rust => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_cli_tokens() {
        assert_eq!(Language::from_str("typescript", true).unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("TS", true).unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("c++", true).unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("cpp", true).unwrap(), Language::Cpp);
        assert_eq!(Language::from_str("Rust", true).unwrap(), Language::Rust);
        assert!(Language::from_str("kotlin", true).is_err());
    }

    #[test]
    fn test_file_naming() {
        assert_eq!(Language::TypeScript.test_suffix(), ".test.ts");
        assert_eq!(Language::Cpp.test_suffix(), "_test.cpp");
        assert_eq!(Language::Rust.test_root(), "tests");
        assert!(!Language::Rust.keeps_hyphens());
    }
}
