use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::{Error, Result};

use super::paths::canonical_url;

/// One example section scraped from the problem statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExampleBlock {
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// Everything the scraper collected for one problem page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    #[serde(deserialize_with = "deserialize_canonical_url")]
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub raw_editor_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub example_blocks: Vec<ExampleBlock>,
    /// Login probe result; `None` when the probe could not run.
    #[serde(default)]
    pub signed_in: Option<bool>,
}

fn deserialize_canonical_url<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(canonical_url(&raw))
}

impl ProblemRecord {
    /// Title without the leading problem number, `"1. 两数之和"` -> `"两数之和"`.
    pub fn name(&self) -> &str {
        let title = self.title.trim();
        match title.rsplit_once('.') {
            Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
            _ => title,
        }
    }
}

/// Which problem the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Daily,
    Random,
    Url(String),
}

impl Selector {
    pub fn parse(token: Option<&str>) -> Selector {
        match token.map(str::trim) {
            None | Some("") | Some("1") => Selector::Daily,
            Some("2") => Selector::Random,
            Some(url) => Selector::Url(url.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<ProblemRecord>),
    One(ProblemRecord),
}

/// Scraper dump: one record or an ordered list of them.
#[derive(Debug, Clone, Default)]
pub struct ProblemCatalog {
    pub problems: Vec<ProblemRecord>,
}

impl ProblemCatalog {
    pub fn load(path: &Path) -> Result<ProblemCatalog> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<ProblemCatalog> {
        let problems = match serde_json::from_str(content)? {
            CatalogFile::Many(problems) => problems,
            CatalogFile::One(problem) => vec![problem],
        };
        Ok(ProblemCatalog { problems })
    }

    pub fn select(&self, selector: &Selector) -> Result<&ProblemRecord> {
        if self.problems.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        match selector {
            Selector::Daily => Ok(&self.problems[0]),
            Selector::Random => self
                .problems
                .choose(&mut rand::thread_rng())
                .ok_or(Error::EmptyCatalog),
            Selector::Url(url) => {
                let wanted = canonical_url(url);
                self.problems
                    .iter()
                    .find(|p| p.url == wanted)
                    .ok_or_else(|| Error::ProblemNotFound { url: url.clone() })
            }
        }
    }
}
