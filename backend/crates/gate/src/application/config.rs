//! Application Configuration
//!
//! Configuration for the gate application layer.

use crate::domain::services::{CodeTableError, parse_code_table};

/// Codes printed on each puzzle's success screen, paired with the puzzle
/// they open
pub const DEFAULT_ACCESS_CODES: &[(&str, &str)] = &[
    ("CALCFAIL", "/broken-calc"),
    ("BETA", "/painted-cube"),
    ("JET2MAZE", "/invisible-maze"),
    ("R3V3RB", "/mirror-typing"),
    ("SEATS4U", "/seating-arrangement"),
];

/// Gate application configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Access code → route table
    pub access_codes: Vec<(String, String)>,
    /// Message returned on an accepted submission
    pub submission_ack: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            access_codes: DEFAULT_ACCESS_CODES
                .iter()
                .map(|(code, route)| (code.to_string(), route.to_string()))
                .collect(),
            submission_ack: "Completion recorded!".to_string(),
        }
    }
}

impl GateConfig {
    /// Create config for development
    ///
    /// Adds a `DEV` code that opens the first puzzle, so a local run does not
    /// need the printed code sheet.
    pub fn development() -> Self {
        let mut config = Self::default();
        config
            .access_codes
            .push(("DEV".to_string(), "/broken-calc".to_string()));
        config
    }

    /// Replace the code table
    pub fn with_codes<I, C, R>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = (C, R)>,
        C: Into<String>,
        R: Into<String>,
    {
        self.access_codes = codes
            .into_iter()
            .map(|(code, route)| (code.into(), route.into()))
            .collect();
        self
    }

    /// Replace the code table from the `ACCESS_CODES` format
    /// (`CODE=/route,CODE=/route`)
    pub fn with_code_table(self, table: &str) -> Result<Self, CodeTableError> {
        let codes = parse_code_table(table)?;
        Ok(self.with_codes(codes))
    }

    pub fn code_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.access_codes
            .iter()
            .map(|(code, route)| (code.as_str(), route.as_str()))
    }
}
