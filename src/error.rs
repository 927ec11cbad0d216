use axum::response::IntoResponse;

use crate::{envelope::Envelope, outcome::Outcome};

/// Why an inbound body could not be decoded into the requested type.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request body is empty")]
    Empty,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failure to turn an axum request into an exchange.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("failed to read request body: {0}")]
    ReadBody(#[from] axum::Error),
}

impl IntoResponse for ExchangeError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(error = %self, "rejecting request");

        let outcome = Outcome::BadRequest;
        Envelope::error(outcome.default_message()).with_status(outcome.status_code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
