use std::process::Command;

use crate::extract::{Symbol, SymbolKind};
use crate::models::config::UserConfig;
use crate::models::{ProblemRecord, WorkspacePaths};

const HEADERS_INCLUDE: &str = "#include <headers.hpp>";

pub(super) fn preamble(code: &str) -> Vec<String> {
    if code.contains(HEADERS_INCLUDE) {
        Vec::new()
    } else {
        vec![HEADERS_INCLUDE.to_string()]
    }
}

pub(super) fn strip_scaffolding(text: &str) -> String {
    super::remove_line(text, HEADERS_INCLUDE)
}

pub(super) fn render_test(
    record: &ProblemRecord,
    paths: &WorkspacePaths,
    symbol: Option<&Symbol>,
) -> String {
    let Some(sym) = symbol else {
        return "#include <gtest/gtest.h>\n".to_string();
    };

    let call = format!("{}({})", sym.name, sym.params.join(", "));
    let body = match (&sym.kind, &sym.owner) {
        (SymbolKind::Function, Some(class)) => {
            let instance = class.to_lowercase();
            format!(
                "  {class} {instance};\n  EXPECT_EQ({instance}.{call}, 1);",
                class = class,
                instance = instance,
                call = call
            )
        }
        (SymbolKind::Function, None) => format!("  EXPECT_EQ({}, 1);", call),
        (SymbolKind::Type, _) => format!("  {} {};\n  SUCCEED();", sym.name, sym.name.to_lowercase()),
    };

    format!(
        r#"#include <{category}/{slug}.cpp>

TEST({slug}, {name})
{{
{examples}
{body}
}}
"#,
        category = paths.category,
        slug = paths.slug,
        name = sym.name,
        examples = super::render_examples(&record.example_blocks, "  "),
        body = body,
    )
}

/// Refresh the CMake build tree so the new test target is picked up.
pub fn configure_cmake(paths: &WorkspacePaths, config: &UserConfig) -> Result<String, String> {
    let cmake = config.cmake_path.as_deref().unwrap_or("cmake");
    let root = &paths.root;

    let output = Command::new(cmake)
        .arg("--no-warn-unused-cli")
        .arg("-DCMAKE_EXPORT_COMPILE_COMMANDS:BOOL=TRUE")
        .arg("-DCMAKE_BUILD_TYPE:STRING=Debug")
        .arg(format!("-S{}", root.display()))
        .arg(format!("-B{}", root.join("build").display()))
        .output()
        .map_err(|e| format!("Failed to run {}: {}", cmake, e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if output.status.success() {
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!("{} exited with {}: {}", cmake, output.status, stderr.trim()))
    }
}
