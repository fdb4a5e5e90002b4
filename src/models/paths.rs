use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

use super::category::Category;
use super::language::Language;

/// Strip the query string and fragment from a problem url.
pub fn canonical_url(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => raw
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

fn last_path_segment(raw: &str) -> Option<String> {
    match Url::parse(raw.trim()) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        Err(_) => canonical_url(raw)
            .split(|c| c == '/' || c == '\\')
            .filter(|s| !s.is_empty())
            .last()
            .map(str::to_string),
    }
}

/// Filesystem-safe identifier for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn from_url(url: &str, language: Language) -> Result<Slug> {
        let segment = last_path_segment(url);

        let cleaned: String = segment
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            .collect();

        let cleaned = if language.keeps_hyphens() {
            cleaned
        } else {
            cleaned.replace('-', "_")
        };

        if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
            return Err(Error::MissingFileName {
                url: url.to_string(),
            });
        }

        Ok(Slug(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every location one problem touches in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub category: Category,
    pub slug: Slug,
    pub language: Language,
    pub source: PathBuf,
    pub test: PathBuf,
    pub image: PathBuf,
    pub readme: PathBuf,
    pub readme_anchor: String,
}

impl WorkspacePaths {
    pub fn new(root: &Path, category: Category, slug: Slug, language: Language) -> Self {
        let cat = category.as_str();
        let source = root
            .join("src")
            .join(cat)
            .join(format!("{}.{}", slug, language.extension()));
        let test = root
            .join(language.test_root())
            .join(cat)
            .join(format!("{}{}", slug, language.test_suffix()));
        let image = root.join("images").join(cat).join(format!("{}.jpeg", slug));

        Self {
            root: root.to_path_buf(),
            category,
            source,
            test,
            image,
            readme: root.join("README.md"),
            readme_anchor: format!("### {}", category.readme_title()),
            slug,
            language,
        }
    }

    /// Source path relative to the workspace root, always `/`-separated.
    pub fn source_link(&self) -> String {
        format!(
            "src/{}/{}.{}",
            self.category,
            self.slug,
            self.language.extension()
        )
    }

    /// Image path as seen from the source file.
    pub fn image_link(&self) -> String {
        format!("../../images/{}/{}.jpeg", self.category, self.slug)
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for file in [&self.source, &self.test, &self.image] {
            if let Some(dir) = file.parent() {
                if !dir.exists() {
                    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
                }
            }
        }
        Ok(())
    }
}
