//! Score Submission

use serde::Serialize;

/// Body sent to the score ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub username: String,
    /// Elapsed time as `MM:SS`
    pub total_time: String,
    pub final_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&ScoreSubmission {
            username: "Alice".to_string(),
            total_time: "07:12".to_string(),
            final_score: 300,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"username":"Alice","totalTime":"07:12","finalScore":300}"#
        );
    }
}
