//! Edge-function adapter (schedule generation).
//!
//! The edge function computes the schedule entirely server-side, so the
//! request is a single bearer-authenticated POST with an empty body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use spb_core::schedule::{classify_response, GenerateError, Schedule, SchedulePort};

#[derive(Clone, Debug)]
pub struct EdgeClient {
    url: String,
    jwt: String,
    http: reqwest::Client,
}

impl EdgeClient {
    pub fn new(url: impl Into<String>, jwt: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            url: url.into(),
            jwt: jwt.into(),
            http,
        }
    }

    fn classify_send_error(e: reqwest::Error) -> GenerateError {
        if e.is_timeout() {
            return GenerateError::Timeout;
        }
        if e.is_connect() {
            return GenerateError::Connection;
        }
        GenerateError::Unexpected {
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl SchedulePort for EdgeClient {
    async fn generate(&self) -> Result<Schedule, GenerateError> {
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.jwt)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(Self::classify_send_error)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| GenerateError::Unexpected {
            message: e.to_string(),
        })?;

        classify_response(status, &body)
    }
}
