//! README ledger: one Markdown entry per problem, grouped under `###`
//! sections named after the category.

use std::path::Path;

use crate::error::Result;
use crate::models::{ProblemRecord, WorkspacePaths};
use crate::store::{self, Outcome};

pub fn render_entry(record: &ProblemRecord, paths: &WorkspacePaths) -> String {
    format!(
        "\n- [{name}]({link})  [{tags}]\n\n  - LeetCode {title} <{url}>",
        name = record.name(),
        link = paths.source_link(),
        tags = record.tags.join(", "),
        title = record.title.trim(),
        url = record.url,
    )
}

/// Put `entry` on the lines right after `anchor`. A missing anchor becomes a
/// new section at the end of the document.
pub fn insert_under_anchor(document: &str, anchor: &str, entry: &str) -> String {
    let anchor_at = document
        .match_indices(anchor)
        .map(|(i, _)| i)
        .find(|&i| i == 0 || document[..i].ends_with('\n'));

    match anchor_at {
        Some(start) => match document[start..].find('\n') {
            Some(offset) => {
                let split = start + offset + 1;
                format!("{}{}\n{}", &document[..split], entry, &document[split..])
            }
            None => format!("{}\n{}\n", document, entry),
        },
        None => {
            let mut out = document.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(anchor);
            out.push('\n');
            out.push_str(entry);
            out.push('\n');
            out
        }
    }
}

/// Record the problem in the README unless its url is already listed.
pub fn insert(readme: &Path, record: &ProblemRecord, paths: &WorkspacePaths) -> Result<Outcome> {
    let entry = render_entry(record, paths);
    store::ensure_present(
        readme,
        |content| content.contains(&record.url),
        |content| insert_under_anchor(&content, &paths.readme_anchor, &entry),
    )
}
