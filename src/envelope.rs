use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform body written for every response: `{"msg": .., "data": .., "err": ..}`.
///
/// `data` is left out of the serialized body when there is no payload. A payload that
/// serializes to JSON `null` is treated as no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub msg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    pub err: bool,
}

impl Envelope {
    pub fn new(msg: impl Into<String>, data: Value, err: bool) -> Self {
        Self {
            msg: msg.into(),
            data: match data {
                Value::Null => None,
                data => Some(data),
            },
            err,
        }
    }

    /// An error envelope, which never carries a payload.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            data: None,
            err: true,
        }
    }

    pub fn with_status(self, status_code: StatusCode) -> axum::response::Response {
        (status_code, axum::Json(self)).into_response()
    }
}
