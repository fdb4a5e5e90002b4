mod cpp;
mod rust;
mod typescript;

use std::path::PathBuf;

use crate::extract::{extract_symbol, Symbol};
use crate::models::config::UserConfig;
use crate::models::{ExampleBlock, Language, ProblemRecord, WorkspacePaths};

pub use cpp::configure_cmake;

/// Generated text for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArtifact {
    pub source_text: String,
    pub test_text: String,
    pub symbol: Option<Symbol>,
    /// The editor text already carried this problem's url marker.
    pub already_synced: bool,
}

/// A line that must appear once in a module registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLine {
    pub path: PathBuf,
    pub line: String,
}

// --- Shared helpers ---

fn url_marker(record: &ProblemRecord) -> String {
    format!("// {}", record.url)
}

fn header(record: &ProblemRecord, paths: &WorkspacePaths) -> String {
    format!(
        "// {}\n{}\n// INLINE  {}\n",
        record.name(),
        url_marker(record),
        paths.image_link()
    )
}

/// Example blocks as comment lines, one blank line between examples.
pub fn render_examples(blocks: &[ExampleBlock], indent: &str) -> String {
    let raw = blocks
        .iter()
        .map(|b| format!("{}\n{}", b.heading.trim(), b.body.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n");

    raw.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}// {}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Dispatch functions ---

/// Extract the entry point once and render both the source and test text.
pub fn transform(
    lang: Language,
    code: &str,
    record: &ProblemRecord,
    paths: &WorkspacePaths,
    config: &UserConfig,
) -> TemplateArtifact {
    let symbol = extract_symbol(code, lang);
    let (source_text, already_synced) = render_source(lang, code, record, paths, symbol.as_ref());
    let test_text = render_test(lang, record, paths, symbol.as_ref(), config);

    TemplateArtifact {
        source_text,
        test_text,
        symbol,
        already_synced,
    }
}

/// Final source text: header, language preamble and the editor code.
///
/// Text that already carries the url marker gets no header and no preamble;
/// only the visibility widening still applies to it.
pub fn render_source(
    lang: Language,
    code: &str,
    record: &ProblemRecord,
    paths: &WorkspacePaths,
    symbol: Option<&Symbol>,
) -> (String, bool) {
    let marker = url_marker(record);
    let already_synced = code.contains(&marker);

    let code = match lang {
        Language::TypeScript => typescript::widen_visibility(code, symbol),
        Language::Rust => rust::widen_visibility(code, symbol),
        Language::Cpp => code.to_string(),
    };
    if already_synced {
        return (code, true);
    }

    let preamble = match lang {
        Language::TypeScript => Vec::new(),
        Language::Cpp => cpp::preamble(&code),
        Language::Rust => rust::preamble(&code),
    }
    .join("\n");

    let text = if preamble.is_empty() {
        format!("{}\n{}", header(record, paths), code)
    } else {
        format!("{}\n{}\n{}", header(record, paths), preamble, code)
    };

    (text, already_synced)
}

/// Test stub for a problem. Without a symbol this is only the import line.
pub fn render_test(
    lang: Language,
    record: &ProblemRecord,
    paths: &WorkspacePaths,
    symbol: Option<&Symbol>,
    config: &UserConfig,
) -> String {
    match lang {
        Language::TypeScript => typescript::render_test(record, paths, symbol),
        Language::Cpp => cpp::render_test(record, paths, symbol),
        Language::Rust => rust::render_test(record, paths, symbol, &config.rust_crate_name),
    }
}

/// Remove the scaffolding `render_source` added so the text fits the remote
/// editor again.
pub fn strip_scaffolding(lang: Language, text: &str) -> String {
    match lang {
        Language::TypeScript => typescript::strip_scaffolding(text),
        Language::Cpp => cpp::strip_scaffolding(text),
        Language::Rust => rust::strip_scaffolding(text),
    }
}

pub fn registry_lines(lang: Language, paths: &WorkspacePaths) -> Vec<RegistryLine> {
    match lang {
        Language::TypeScript | Language::Cpp => Vec::new(),
        Language::Rust => rust::registry_lines(paths),
    }
}

/// Remove the first occurrence of `line`, together with its newline.
fn remove_line(text: &str, line: &str) -> String {
    let with_newline = format!("{}\n", line);
    if text.contains(&with_newline) {
        text.replacen(&with_newline, "", 1)
    } else {
        text.replacen(line, "", 1)
    }
}
