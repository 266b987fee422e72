//! Domain Services
//!
//! Pure logic for building the access-code directory.

use crate::domain::value_objects::{AccessCode, Route};
use std::collections::HashMap;

/// Why a code table could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeTableError {
    #[error("entry {0:?} is not of the form CODE=/route")]
    MalformedEntry(String),

    #[error("access code {0} is listed twice")]
    DuplicateCode(String),
}

/// Build the lookup table, enforcing one route per code
pub fn build_directory<'a, I>(entries: I) -> Result<HashMap<AccessCode, Route>, CodeTableError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut directory = HashMap::new();
    for (raw_code, raw_route) in entries {
        let entry = format!("{raw_code}={raw_route}");
        let code = AccessCode::parse(raw_code)
            .ok_or_else(|| CodeTableError::MalformedEntry(entry.clone()))?;
        let route = Route::new(raw_route).ok_or(CodeTableError::MalformedEntry(entry))?;
        if directory.contains_key(&code) {
            return Err(CodeTableError::DuplicateCode(code.to_string()));
        }
        directory.insert(code, route);
    }
    Ok(directory)
}

/// Parse `CODE=/route,CODE=/route` (the `ACCESS_CODES` environment format)
pub fn parse_code_table(table: &str) -> Result<Vec<(String, String)>, CodeTableError> {
    table
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(code, route)| (code.trim().to_string(), route.trim().to_string()))
                .ok_or_else(|| CodeTableError::MalformedEntry(entry.to_string()))
        })
        .collect()
}
