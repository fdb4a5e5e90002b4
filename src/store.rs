//! Guarded file writes shared by the ledger, registries and test stubs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// What a guarded write ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// The content was already present; nothing was written.
    AlreadyPresent,
    /// The file existed before; it was left untouched.
    AlreadyExists,
}

fn read_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(Error::io(path, e)),
    }
}

fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Read `path` (a missing file reads as empty), and only when `present`
/// rejects the content, write back `edit(content)`.
pub fn ensure_present<P, E>(path: &Path, present: P, edit: E) -> Result<Outcome>
where
    P: Fn(&str) -> bool,
    E: FnOnce(String) -> String,
{
    let content = read_or_empty(path)?;
    if present(&content) {
        return Ok(Outcome::AlreadyPresent);
    }

    write(path, &edit(content))?;
    Ok(Outcome::Written)
}

/// Append `line` unless a line with exactly that text already exists.
pub fn append_line(path: &Path, line: &str) -> Result<Outcome> {
    ensure_present(
        path,
        |content| content.lines().any(|l| l.trim() == line),
        |mut content| {
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(line);
            content.push('\n');
            content
        },
    )
}

/// Write `content` only if nothing exists at `path` yet.
pub fn write_once(path: &Path, content: &str) -> Result<Outcome> {
    if path.exists() {
        return Ok(Outcome::AlreadyExists);
    }
    write(path, content)?;
    Ok(Outcome::Written)
}

/// Unconditional write, creating parent directories.
pub fn overwrite(path: &Path, content: &str) -> Result<()> {
    write(path, content)
}
