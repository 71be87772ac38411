//! Persisted top-10 high-score table
//!
//! Stored as a JSON array of name/score records. Loading never fails the
//! caller: a missing or corrupt file seeds the default table, and a failed
//! write is reported and ignored; the in-memory table stays authoritative
//! for the session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Maximum number of retained records
pub const MAX_ENTRIES: usize = 10;

/// One name/score record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
}

/// Seed table used when no valid score file exists
pub fn default_entries() -> Vec<HighscoreEntry> {
    [
        ("VOS", 1000),
        ("KIM", 900),
        ("RDR", 800),
        ("LUX", 700),
        ("MAX", 600),
        ("IVY", 500),
        ("ACE", 400),
        ("NOA", 300),
        ("ZIP", 200),
        ("GUS", 100),
    ]
    .into_iter()
    .map(|(name, score)| HighscoreEntry {
        name: name.to_string(),
        score,
    })
    .collect()
}

/// Top-10 table, kept sorted descending by score
#[derive(Debug)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
    path: PathBuf,
}

impl HighscoreTable {
    /// Load from disk; any failure falls back to the default table
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("high-score file unavailable, seeding defaults: {err:#}");
                default_entries()
            }
        };
        let mut table = Self { entries, path };
        table.normalize();
        table
    }

    /// The records, highest score first
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    /// Whether a score would enter the table
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_ENTRIES
            || self
                .entries
                .last()
                .map_or(true, |lowest| score > lowest.score)
    }

    /// Insert a record, keep the top 10, and persist
    pub fn insert(&mut self, name: impl Into<String>, score: u32) {
        self.entries.push(HighscoreEntry {
            name: name.into(),
            score,
        });
        self.normalize();
        if let Err(err) = self.persist() {
            tracing::warn!("failed to persist high scores: {err:#}");
        }
    }

    /// Stable sort keeps earlier records ahead of equal-scored newcomers
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    fn persist(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> anyhow::Result<Vec<HighscoreEntry>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let entries =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(entries)
}
