//! Turn one scraped problem into workspace files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::classify::classify;
use crate::editor::EditorSurface;
use crate::error::{Error, Result};
use crate::extract::Symbol;
use crate::lang::{self, RegistryLine};
use crate::ledger;
use crate::models::config::UserConfig;
use crate::models::{Category, Language, ProblemRecord, Slug, WorkspacePaths};
use crate::store::{self, Outcome};

/// What one materialization run did.
#[derive(Debug, Clone)]
pub struct Report {
    pub category: Category,
    pub paths: WorkspacePaths,
    pub symbol: Option<Symbol>,
    pub already_synced: bool,
    pub ledger: Outcome,
    pub test: Outcome,
    pub registries: Vec<(RegistryLine, Outcome)>,
}

impl Report {
    pub fn needs_manual_test(&self) -> bool {
        self.symbol.is_none() && self.test == Outcome::Written
    }
}

/// Url recorded in the header of an existing source file, if any.
fn recorded_url(source: &str) -> Option<&str> {
    source
        .lines()
        .take(5)
        .filter_map(|line| line.trim().strip_prefix("// "))
        .map(str::trim)
        .find(|rest| rest.starts_with("http://") || rest.starts_with("https://"))
}

/// Refuse to overwrite a source file that belongs to a different problem.
fn check_collision(paths: &WorkspacePaths, record: &ProblemRecord) -> Result<()> {
    if !paths.source.exists() {
        return Ok(());
    }
    let existing = fs::read_to_string(&paths.source).map_err(|e| Error::io(&paths.source, e))?;

    match recorded_url(&existing) {
        Some(url) if url != record.url => Err(Error::SlugCollision {
            path: paths.source.clone(),
            existing_url: url.to_string(),
        }),
        _ => Ok(()),
    }
}

fn editor_code(record: &ProblemRecord, editor: &mut dyn EditorSurface) -> String {
    if !record.raw_editor_text.trim().is_empty() {
        return record.raw_editor_text.clone();
    }
    match editor.get_value() {
        Ok(code) => code,
        Err(e) => {
            warn!("No editor code in the scraped record and the editor is unreadable: {}", e);
            String::new()
        }
    }
}

pub fn materialize(
    record: &ProblemRecord,
    language: Language,
    root: &Path,
    editor: &mut dyn EditorSurface,
    config: &UserConfig,
) -> Result<Report> {
    let category = classify(&record.tags);
    info!("Tags: {:?}", record.tags);
    info!("Category: {}", category);

    let slug = Slug::from_url(&record.url, language)?;
    let paths = WorkspacePaths::new(root, category, slug, language);
    check_collision(&paths, record)?;
    paths.ensure_dirs()?;

    let ledger = ledger::insert(&paths.readme, record, &paths)?;
    if ledger == Outcome::AlreadyPresent {
        info!("README.md already lists this problem");
    }

    let code = editor_code(record, editor);
    let artifact = lang::transform(language, &code, record, &paths, config);
    if artifact.already_synced {
        info!("This problem was synced before, reopening it");
    }
    store::overwrite(&paths.source, &artifact.source_text)?;

    let test = store::write_once(&paths.test, &artifact.test_text)?;
    match (test, &artifact.symbol) {
        (Outcome::Written, None) => {
            warn!("No entry point found, manual test authoring required for {}", paths.test.display())
        }
        (Outcome::AlreadyExists, _) => info!("Test file already exists, not regenerating it"),
        _ => {}
    }

    let mut registries = Vec::new();
    for entry in lang::registry_lines(language, &paths) {
        let outcome = store::append_line(&entry.path, &entry.line)?;
        registries.push((entry, outcome));
    }

    if record.signed_in == Some(false) {
        info!("Signing in to the site in the browser unlocks premium problems");
    }

    Ok(Report {
        category,
        paths,
        symbol: artifact.symbol,
        already_synced: artifact.already_synced,
        ledger,
        test,
        registries,
    })
}
