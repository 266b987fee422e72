//! Domain Value Objects
//!
//! Immutable value types for the gate domain.

use serde_json::Number;
use std::fmt;

/// Access code in canonical form (trimmed, upper-case)
///
/// Participants copy codes by hand from a success screen, so `" beta "`
/// and `"BETA"` must be the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessCode(String);

impl AccessCode {
    /// Normalize raw input; `None` when nothing is left after trimming
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client-side route a code unlocks, e.g. `/painted-cube`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    /// Routes are absolute paths; a missing leading slash is added
    pub fn new(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return None;
        }
        if path.starts_with('/') {
            Some(Self(path.to_string()))
        } else {
            Some(Self(format!("/{path}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Participant name as submitted; never blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formatted run time as reported by the client (`MM:SS`)
///
/// Recorded verbatim. The ledger is a low-stakes leaderboard, so the only
/// requirement is that something was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalTime(String);

impl TotalTime {
    pub fn parse(raw: &str) -> Option<Self> {
        let time = raw.trim();
        if time.is_empty() {
            None
        } else {
            Some(Self(time.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Final score exactly as the client sent it
///
/// Any JSON number is accepted, zero and fractions included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore(Number);

impl FinalScore {
    pub fn new(points: impl Into<Number>) -> Self {
        Self(points.into())
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
