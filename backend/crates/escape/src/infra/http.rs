//! HTTP Gate Client

use crate::application::config::EscapeConfig;
use crate::domain::repository::GateApi;
use crate::domain::submission::ScoreSubmission;
use crate::error::{EscapeError, EscapeResult};
use reqwest::StatusCode;
use serde::Deserialize;

/// Talks to the gate API (`/validate-code`, `/submit-score`)
#[derive(Debug, Clone)]
pub struct HttpGateClient {
    client: reqwest::Client,
    base_url: String,
}

/// Both endpoints answer with this envelope
#[derive(Debug, Deserialize)]
struct GateReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    route: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HttpGateClient {
    pub fn new(config: &EscapeConfig) -> Self {
        Self::with_client(reqwest::Client::new(), &config.api_base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

fn rejection(status: StatusCode, reply: GateReply) -> EscapeError {
    EscapeError::Rejected(
        reply
            .message
            .unwrap_or_else(|| format!("Unexpected response from server ({status})")),
    )
}

impl GateApi for HttpGateClient {
    async fn validate_code(&self, code: &str) -> EscapeResult<String> {
        let response = self
            .client
            .post(self.url("validate-code"))
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await?;

        let status = response.status();
        let reply: GateReply = response.json().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(EscapeError::InvalidAccessCode(code.to_string()));
        }
        match reply {
            GateReply {
                success: true,
                route: Some(route),
                ..
            } if status.is_success() => Ok(route),
            reply => Err(rejection(status, reply)),
        }
    }

    async fn submit_score(&self, submission: &ScoreSubmission) -> EscapeResult<String> {
        let response = self
            .client
            .post(self.url("submit-score"))
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let reply: GateReply = response.json().await?;

        if status.is_success() && reply.success {
            Ok(reply.message.unwrap_or_default())
        } else {
            Err(rejection(status, reply))
        }
    }
}
