//! Puzzle Catalog

use crate::error::{EscapeError, EscapeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown after the last puzzle; it unlocks nothing
pub const FINAL_CODE: &str = "RIDDLE-MASTER-5";

/// One puzzle in the escape room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleId {
    BrokenCalc,
    PaintedCube,
    InvisibleMaze,
    MirrorTyping,
    SeatingArrangement,
}

impl PuzzleId {
    /// Every puzzle, in play order
    pub const ALL: [PuzzleId; 5] = [
        PuzzleId::BrokenCalc,
        PuzzleId::PaintedCube,
        PuzzleId::InvisibleMaze,
        PuzzleId::MirrorTyping,
        PuzzleId::SeatingArrangement,
    ];

    /// Storage key and URL segment
    pub fn slug(self) -> &'static str {
        match self {
            PuzzleId::BrokenCalc => "broken-calc",
            PuzzleId::PaintedCube => "painted-cube",
            PuzzleId::InvisibleMaze => "invisible-maze",
            PuzzleId::MirrorTyping => "mirror-typing",
            PuzzleId::SeatingArrangement => "seating-arrangement",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PuzzleId::BrokenCalc => "Broken Calculator",
            PuzzleId::PaintedCube => "Painted Cube Challenge",
            PuzzleId::InvisibleMaze => "Invisible Maze",
            PuzzleId::MirrorTyping => "Mirror Typing",
            PuzzleId::SeatingArrangement => "Seating Arrangement",
        }
    }

    pub fn route(self) -> String {
        format!("/{}", self.slug())
    }

    /// Code revealed on this puzzle's success screen; it opens the next one
    pub fn unlock_code(self) -> Option<&'static str> {
        match self {
            PuzzleId::BrokenCalc => Some("BETA"),
            PuzzleId::PaintedCube => Some("JET2MAZE"),
            PuzzleId::InvisibleMaze => Some("R3V3RB"),
            PuzzleId::MirrorTyping => Some("SEATS4U"),
            PuzzleId::SeatingArrangement => None,
        }
    }

    /// Code shown once this puzzle is solved; the last puzzle shows the
    /// final code, which opens nothing
    pub fn completion_code(self) -> &'static str {
        self.unlock_code().unwrap_or(FINAL_CODE)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    /// Map a server route (`/painted-cube`) back onto a puzzle
    pub fn from_route(route: &str) -> Option<Self> {
        let slug = route.trim().trim_start_matches('/').trim_end_matches('/');
        Self::from_slug(slug)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PuzzleId {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| EscapeError::UnknownPuzzle(s.to_string()))
    }
}

/// Ordered, duplicate-free set of puzzles a room is built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    ids: Vec<PuzzleId>,
}

impl Catalog {
    /// Keeps first occurrences; an empty catalog is rejected
    pub fn new<I>(ids: I) -> EscapeResult<Self>
    where
        I: IntoIterator<Item = PuzzleId>,
    {
        let mut unique = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        if unique.is_empty() {
            return Err(EscapeError::EmptyCatalog);
        }
        Ok(Self { ids: unique })
    }

    /// All five puzzles
    pub fn full() -> Self {
        Self {
            ids: PuzzleId::ALL.to_vec(),
        }
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[PuzzleId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::full()
    }
}
