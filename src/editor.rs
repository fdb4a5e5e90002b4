use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The remote code editor buffer a problem is solved in.
///
/// The browser side owns the real buffer; this crate only reads from and
/// writes to it.
pub trait EditorSurface {
    fn get_value(&mut self) -> Result<String>;
    fn set_value(&mut self, text: &str) -> Result<()>;
}

impl<T: EditorSurface + ?Sized> EditorSurface for Box<T> {
    fn get_value(&mut self) -> Result<String> {
        (**self).get_value()
    }

    fn set_value(&mut self, text: &str) -> Result<()> {
        (**self).set_value(text)
    }
}

/// Editor buffer mirrored through a plain file by the browser glue.
#[derive(Debug, Clone)]
pub struct FileEditor {
    path: PathBuf,
}

impl FileEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EditorSurface for FileEditor {
    fn get_value(&mut self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    fn set_value(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| Error::io(&self.path, e))
    }
}

/// Editor surface for runs without a browser; pushes only go to the log.
#[derive(Debug, Default)]
pub struct DetachedEditor;

impl EditorSurface for DetachedEditor {
    fn get_value(&mut self) -> Result<String> {
        Err(Error::Editor("no editor buffer attached".to_string()))
    }

    fn set_value(&mut self, text: &str) -> Result<()> {
        tracing::debug!("No editor attached, dropping {} bytes", text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_editor_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = FileEditor::new(dir.path().join("buffer.txt"));

        assert!(matches!(editor.get_value(), Err(Error::Io { .. })));
        editor.set_value("fn main() {}").unwrap();
        assert_eq!(editor.get_value().unwrap(), "fn main() {}");
    }

    #[test]
    fn test_detached_editor() {
        let mut editor = DetachedEditor;
        assert!(editor.get_value().is_err());
        assert!(editor.set_value("x").is_ok());
    }
}
