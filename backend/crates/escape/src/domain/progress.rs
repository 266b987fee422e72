//! Per-Puzzle Progress
//!
//! The persisted view of how far a participant got in each puzzle. Stored as
//! one JSON object per identity:
//!
//! ```json
//! {"broken-calc": {"title": "Broken Calculator", "progress": 100, "score": 100}}
//! ```

use crate::domain::catalog::{Catalog, PuzzleId};
use crate::error::EscapeResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Percentage clamped to `0..=100`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Clamp and round; NaN reads as zero
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0).round() as u8)
    }

    /// In-puzzle hints never claim completion
    pub fn hint(value: f64) -> Self {
        Self::new(value.min(99.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

/// Puzzle score: all or nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const FULL: Score = Score(100);

    pub fn points(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Score::ZERO),
            100 => Ok(Score::FULL),
            other => Err(format!("score must be 0 or 100, got {other}")),
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// One puzzle's stored progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub title: String,
    pub progress: Percent,
    pub score: Score,
}

impl ProgressRecord {
    /// State written when a puzzle view is entered
    pub fn fresh(id: PuzzleId) -> Self {
        Self {
            title: id.title().to_string(),
            progress: Percent::ZERO,
            score: Score::ZERO,
        }
    }

    pub fn completed(id: PuzzleId, score: Score) -> Self {
        Self {
            title: id.title().to_string(),
            progress: Percent::FULL,
            score,
        }
    }
}

/// Progress for every catalog puzzle of one identity
///
/// Stored entries the board cannot use (other puzzles, unreadable records)
/// are carried along untouched and written back by [`ProgressBoard::to_json`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBoard {
    catalog: Catalog,
    records: BTreeMap<PuzzleId, ProgressRecord>,
    passthrough: BTreeMap<String, Value>,
}

impl ProgressBoard {
    pub fn empty(catalog: &Catalog) -> Self {
        Self {
            catalog: catalog.clone(),
            records: BTreeMap::new(),
            passthrough: BTreeMap::new(),
        }
    }

    /// Parse stored JSON
    ///
    /// Unknown slugs and unreadable entries are ignored but kept; an
    /// unreadable document yields an empty board. Neither is an error for
    /// the caller.
    pub fn from_json(raw: &str, catalog: &Catalog) -> Self {
        let mut board = Self::empty(catalog);

        let entries: BTreeMap<String, Value> = match serde_json::from_str(raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Stored progress is unreadable, starting empty");
                return board;
            }
        };

        for (slug, value) in entries {
            let Some(id) = PuzzleId::from_slug(&slug).filter(|id| catalog.contains(*id)) else {
                tracing::debug!(slug = %slug, "Ignoring stored progress for unknown puzzle");
                board.passthrough.insert(slug, value);
                continue;
            };
            match serde_json::from_value::<ProgressRecord>(value.clone()) {
                Ok(record) => {
                    board.records.insert(id, record);
                }
                Err(e) => {
                    tracing::warn!(puzzle = %id, error = %e, "Skipping unreadable progress record");
                    board.passthrough.insert(slug, value);
                }
            }
        }

        board
    }

    pub fn to_json(&self) -> EscapeResult<String> {
        let mut by_slug = self.passthrough.clone();
        for (id, record) in &self.records {
            by_slug.insert(id.slug().to_string(), serde_json::to_value(record)?);
        }
        Ok(serde_json::to_string(&by_slug)?)
    }

    /// Stored record, or the fresh default for a puzzle never visited
    pub fn get(&self, id: PuzzleId) -> ProgressRecord {
        self.records
            .get(&id)
            .cloned()
            .unwrap_or_else(|| ProgressRecord::fresh(id))
    }

    pub fn set(&mut self, id: PuzzleId, record: ProgressRecord) {
        self.passthrough.remove(id.slug());
        self.records.insert(id, record);
    }

    /// Records in catalog order, defaults filled in
    pub fn records(&self) -> impl Iterator<Item = (PuzzleId, ProgressRecord)> + '_ {
        self.catalog.iter().map(|id| (id, self.get(id)))
    }

    /// Sum of scores; each puzzle counts once
    pub fn total_score(&self) -> u32 {
        self.records().map(|(_, record)| record.score.points()).sum()
    }

    pub fn max_score(&self) -> u32 {
        Score::FULL.points() * self.catalog.len() as u32
    }

    /// Share of the maximum score earned so far
    pub fn overall_percent(&self) -> Percent {
        Percent::new(f64::from(self.total_score()) / f64::from(self.max_score().max(1)) * 100.0)
    }
}
