use axum::http::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    config::{Config, DEFAULT_DECODE_MESSAGE},
    envelope::Envelope,
    exchange::Exchange,
    outcome::Outcome,
};

/// Writes [`Envelope`] responses onto one exchange.
///
/// Every outcome method takes an optional message; `None` uses the outcome's default from
/// [`Outcome::default_message`]. Each call finalizes the exchange. Calling more than one is
/// allowed but only the last write is kept.
pub struct Responder<'a, E: Exchange> {
    exchange: &'a mut E,
    config: Config,
}

impl<'a, E: Exchange> Responder<'a, E> {
    pub fn new(exchange: &'a mut E) -> Self {
        Self::with_config(exchange, Config::default())
    }

    pub fn with_config(exchange: &'a mut E, config: Config) -> Self {
        Self { exchange, config }
    }

    /// 200 with `data` attached.
    pub fn ok<T: Serialize>(&mut self, data: T, message: Option<&str>) {
        self.respond_with(Outcome::Ok, data, message);
    }

    /// 201 with `data` attached.
    pub fn created<T: Serialize>(&mut self, data: T, message: Option<&str>) {
        self.respond_with(Outcome::Created, data, message);
    }

    pub fn bad_request(&mut self, message: Option<&str>) {
        self.respond(Outcome::BadRequest, message);
    }

    /// 401. Also aborts the exchange so no further handler runs.
    pub fn access_denied(&mut self, message: Option<&str>) {
        self.respond(Outcome::AccessDenied, message);
    }

    pub fn forbidden(&mut self, message: Option<&str>) {
        self.respond(Outcome::Forbidden, message);
    }

    pub fn not_found(&mut self, message: Option<&str>) {
        self.respond(Outcome::NotFound, message);
    }

    /// Same as [`Responder::not_found`].
    pub fn error_404(&mut self, message: Option<&str>) {
        self.not_found(message);
    }

    pub fn not_allowed(&mut self, message: Option<&str>) {
        self.respond(Outcome::NotAllowed, message);
    }

    pub fn not_acceptable(&mut self, message: Option<&str>) {
        self.respond(Outcome::NotAcceptable, message);
    }

    pub fn req_timeout(&mut self, message: Option<&str>) {
        self.respond(Outcome::ReqTimeout, message);
    }

    pub fn conflict(&mut self, message: Option<&str>) {
        self.respond(Outcome::Conflict, message);
    }

    pub fn unsupported_media(&mut self, message: Option<&str>) {
        self.respond(Outcome::UnsupportedMedia, message);
    }

    pub fn unprocessable_entity(&mut self, message: Option<&str>) {
        self.respond(Outcome::UnprocessableEntity, message);
    }

    pub fn too_many_requests(&mut self, message: Option<&str>) {
        self.respond(Outcome::TooManyRequests, message);
    }

    pub fn server_error(&mut self, message: Option<&str>) {
        self.respond(Outcome::ServerError, message);
    }

    /// Writes `outcome` without a payload.
    pub fn respond(&mut self, outcome: Outcome, message: Option<&str>) {
        self.finish(outcome, Value::Null, message);
    }

    /// Writes an arbitrary status, message, payload and error flag.
    ///
    /// Codes outside `100..=999` are replaced with 500. Pass `()` for no payload.
    pub fn json<T: Serialize>(&mut self, code: u16, message: &str, data: T, is_error: bool) {
        let status_code = StatusCode::from_u16(code).unwrap_or_else(|_| {
            tracing::warn!(code, "invalid status code, responding with 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        match serde_json::to_value(data) {
            Ok(data) => self.write(status_code, message, data, is_error),
            Err(err) => self.payload_failed(&err),
        }
    }

    /// Decodes the request body into `dest`.
    ///
    /// Returns `true` and writes nothing on success. On failure `dest` is left untouched, a
    /// 400 is written with `message` (or the default decode message) and `false` is returned.
    pub fn should_bind<T: DeserializeOwned>(&mut self, dest: &mut T, message: Option<&str>) -> bool {
        match self.bind(message) {
            Some(value) => {
                *dest = value;
                true
            }
            None => false,
        }
    }

    /// Like [`Responder::should_bind`], returning the decoded value.
    pub fn bind<T: DeserializeOwned>(&mut self, message: Option<&str>) -> Option<T> {
        let err = match self.exchange.decode_json() {
            Ok(value) => return Some(value),
            Err(err) => err,
        };

        tracing::warn!(error = %err, "failed to decode request body");

        let message = match message {
            Some(message) => message.to_string(),
            None if self.config.verbose_decode_errors => format!("{DEFAULT_DECODE_MESSAGE}: {err}"),
            None => DEFAULT_DECODE_MESSAGE.to_string(),
        };

        self.respond(Outcome::BadRequest, Some(&message));
        None
    }

    fn respond_with<T: Serialize>(&mut self, outcome: Outcome, data: T, message: Option<&str>) {
        match serde_json::to_value(data) {
            Ok(data) => self.finish(outcome, data, message),
            Err(err) => self.payload_failed(&err),
        }
    }

    fn finish(&mut self, outcome: Outcome, data: Value, message: Option<&str>) {
        let message = message.unwrap_or(outcome.default_message());
        self.write(outcome.status_code(), message, data, outcome.is_error());

        if outcome.aborts_chain() {
            self.exchange.abort();
        }
    }

    fn payload_failed(&mut self, err: &serde_json::Error) {
        tracing::error!(error = %err, "failed to serialize response payload");
        self.respond(Outcome::ServerError, None);
    }

    fn write(&mut self, status_code: StatusCode, message: &str, data: Value, is_error: bool) {
        let envelope = Envelope::new(message, data, is_error);
        self.exchange.write_json(status_code, &envelope);
    }
}
