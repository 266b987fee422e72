//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Request for POST /api/validate-code
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateCodeRequest {
    #[serde(default)]
    pub code: Option<String>,
}

/// Response for a successful POST /api/validate-code
#[derive(Debug, Clone, Serialize)]
pub struct ValidateCodeResponse {
    pub success: bool,
    pub route: String,
}

/// Request for POST /api/submit-score
///
/// `null` and absent fields both deserialize to `None`. `finalScore` takes
/// any JSON number, fractional ones included.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub final_score: Option<Number>,
}

/// Response for a successful POST /api/submit-score
#[derive(Debug, Clone, Serialize)]
pub struct SubmitScoreResponse {
    pub success: bool,
    pub message: String,
}
