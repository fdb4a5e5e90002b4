use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::open::open_files;
use super::Cli;
use crate::display::display_report;
use crate::editor::{DetachedEditor, EditorSurface, FileEditor};
use crate::error::Error;
use crate::lang::configure_cmake;
use crate::materialize::{materialize, Report};
use crate::models::config::{self, UserConfig};
use crate::models::{Language, ProblemCatalog, Selector};
use crate::store::Outcome;
use crate::sync::SyncLoop;

/// Scraper dump location when `--problems` is not given.
const DEFAULT_PROBLEMS: &str = ".leetsync/problems.json";

fn workspace_root(cli: &Cli, config: &UserConfig) -> PathBuf {
    cli.root
        .clone()
        .or_else(|| config.workspace_root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn problems_path(cli: &Cli, root: &Path) -> PathBuf {
    cli.problems.clone().unwrap_or_else(|| root.join(DEFAULT_PROBLEMS))
}

fn refresh_cmake(report: &Report, config: &UserConfig) {
    if report.test != Outcome::Written || report.symbol.is_none() {
        return;
    }

    println!("Configuring CMake...");
    match configure_cmake(&report.paths, config) {
        Ok(stdout) => info!("{}", stdout.trim()),
        Err(e) => warn!("CMake configure failed: {}", e),
    }
}

pub fn sync_problem(language: Language, cli: &Cli) {
    let config = config::load_config();
    let root = workspace_root(cli, &config);

    let selector = Selector::parse(cli.target.as_deref());
    match &selector {
        Selector::Daily => info!("Fetching the daily problem"),
        Selector::Random => info!("Picking a random problem"),
        Selector::Url(url) => info!("Looking up {}", url),
    }

    let path = problems_path(cli, &root);
    let catalog = match ProblemCatalog::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load problems: {}", e);
            std::process::exit(1);
        }
    };

    let record = match catalog.select(&selector) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Name: {}", record.name());

    let mut editor: Box<dyn EditorSurface> = match &cli.editor_buffer {
        Some(buffer) => {
            let editor = FileEditor::new(buffer);
            info!("Editor buffer: {}", editor.path().display());
            Box::new(editor)
        }
        None => Box::new(DetachedEditor),
    };

    let report = match materialize(record, language, &root, editor.as_mut(), &config) {
        Ok(r) => r,
        Err(e @ Error::MissingFileName { .. }) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to set up {}: {}", record.name(), e);
            std::process::exit(1);
        }
    };

    display_report(record, &report);

    if language == Language::Cpp && config.configure_cpp {
        refresh_cmake(&report, &config);
    }

    if !cli.no_open {
        open_files(&[report.paths.test.as_path(), report.paths.source.as_path()], &config);
    }

    println!("Ready to code {} in {}.", record.name(), language.display_name());

    if cli.no_watch {
        return;
    }

    let mut sync = SyncLoop::new(&report.paths.source, language, record.name(), editor);
    if let Err(e) = sync.watch() {
        eprintln!("Failed to watch {}: {}", report.paths.source.display(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_root_prefers_flag_over_config() {
        let config = UserConfig {
            workspace_root: Some(PathBuf::from("/from/config")),
            ..UserConfig::default()
        };

        let cli = Cli::parse_from(["leetsync", "rust", "--root", "/from/flag"]);
        assert_eq!(workspace_root(&cli, &config), PathBuf::from("/from/flag"));

        let cli = Cli::parse_from(["leetsync", "rust"]);
        assert_eq!(workspace_root(&cli, &config), PathBuf::from("/from/config"));
        assert_eq!(workspace_root(&cli, &UserConfig::default()), PathBuf::from("."));
    }

    #[test]
    fn test_default_problems_path() {
        let cli = Cli::parse_from(["leetsync", "ts", "2"]);
        assert_eq!(
            problems_path(&cli, Path::new("/w")),
            PathBuf::from("/w/.leetsync/problems.json")
        );
        assert_eq!(cli.language, Some(Language::TypeScript));
        assert_eq!(cli.target.as_deref(), Some("2"));
    }

    #[test]
    fn test_extra_arguments_are_collected() {
        let cli = Cli::parse_from(["leetsync", "C++", "1", "extra"]);
        assert_eq!(cli.language, Some(Language::Cpp));
        assert_eq!(cli.extra, vec!["extra".to_string()]);
    }
}
