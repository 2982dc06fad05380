//! Schedule domain types and remote-response classification.
//!
//! The edge function answers `{"ok": true, "schedule": {...}}` on success
//! and `{"ok": false, "error": "..."}` (or a non-2xx status with an
//! optional error body) on failure. Classifying a received status + body is
//! a pure function here; only the transport-level mapping (timeouts,
//! connection failures) lives in the adapter crate.

use async_trait::async_trait;
use serde::Deserialize;

/// A generated study schedule as returned by the edge function.
///
/// Sessions are opaque to the bot; only their count is reported.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub sessions: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_planned_hours: f64,
    #[serde(default)]
    pub utilization_rate: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    schedule: Option<Schedule>,
}

/// Why a schedule could not be produced, classified for the user.
///
/// Exactly one of these (or a `Schedule`) is derived per invocation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// The request exceeded the configured timeout.
    #[error("connection to the server timed out")]
    Timeout,

    /// DNS/connect-level failure before any response was received.
    #[error("could not connect to the server")]
    Connection,

    /// A response arrived, but with a failure status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The service answered 2xx but reported a business-level failure.
    #[error("{message}")]
    Service { message: String },

    /// Anything else that broke in the call path.
    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

/// Classify a received HTTP response into a schedule or a user-facing error.
///
/// Transport-level failures never reach this function.
pub fn classify_response(status: u16, body: &str) -> Result<Schedule, GenerateError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<GenerateResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_else(|| format!("server error: {status}"));
        return Err(GenerateError::Http { status, message });
    }

    let parsed: GenerateResponse = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(e) => {
            return Err(GenerateError::Unexpected {
                message: format!("malformed response: {e}"),
            })
        }
    };

    if !parsed.ok {
        let message = parsed
            .error
            .unwrap_or_else(|| "schedule generation failed".to_string());
        return Err(GenerateError::Service { message });
    }

    Ok(parsed.schedule.unwrap_or_default())
}

/// Port for the remote scheduling service.
///
/// The production implementation is the edge-function HTTP client; tests
/// substitute a fake.
#[async_trait]
pub trait SchedulePort: Send + Sync {
    async fn generate(&self) -> Result<Schedule, GenerateError>;
}
