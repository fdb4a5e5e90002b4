use std::path::Path;
use std::process::{Command, Stdio};

use crate::models::config::UserConfig;

const EDITOR_CANDIDATES: &[&str] = &["code-insiders", "code"];

fn command_exists(cmd: &str) -> bool {
    let probe = if cfg!(windows) {
        Command::new("where").arg(cmd).stdout(Stdio::null()).stderr(Stdio::null()).status()
    } else {
        Command::new("sh")
            .arg("-c")
            .arg(format!("command -v {}", cmd))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
    };
    probe.map(|s| s.success()).unwrap_or(false)
}

fn editor_command(config: &UserConfig) -> Option<String> {
    if let Some(cmd) = &config.open_with {
        return Some(cmd.clone());
    }
    EDITOR_CANDIDATES
        .iter()
        .find(|cmd| command_exists(cmd))
        .map(|cmd| cmd.to_string())
}

/// Open the generated files in the desktop editor. Best-effort.
pub fn open_files(files: &[&Path], config: &UserConfig) {
    let Some(cmd) = editor_command(config) else {
        tracing::debug!("No desktop editor found, not opening generated files");
        return;
    };

    for file in files {
        if let Err(e) = Command::new(&cmd).arg(file).status() {
            tracing::warn!("Failed to open {} with {}: {}", file.display(), cmd, e);
        }
    }
}
