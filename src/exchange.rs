use axum::{
    async_trait,
    body::{to_bytes, Body, Bytes},
    extract::{FromRequest, Request},
    http::{request::Parts, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    config::Config,
    error::{DecodeError, ExchangeError},
    responder::Responder,
};

/// The capabilities a [`Responder`] needs from the request/response exchange it is bound to.
pub trait Exchange {
    /// Sets the status and JSON body of the response in one step. A later write replaces an
    /// earlier one.
    fn write_json<T: Serialize>(&mut self, status_code: StatusCode, body: &T);

    /// Decodes the inbound body as JSON. Never writes a response.
    fn decode_json<T: DeserializeOwned>(&self) -> Result<T, DecodeError>;

    /// Stops any remaining handlers from running for this exchange.
    fn abort(&mut self);

    fn is_aborted(&self) -> bool;
}

/// An [`Exchange`] over a buffered axum request.
///
/// Usable as the last extractor of a handler, which can then return the exchange itself as
/// the response:
///
/// ```ignore
/// async fn handler(mut exchange: HttpExchange) -> HttpExchange {
///     exchange.responder().not_found(None);
///     exchange
/// }
/// ```
pub struct HttpExchange {
    id: Uuid,
    parts: Parts,
    body: Bytes,
    config: Config,
    response: Option<Response>,
    aborted: bool,
}

impl HttpExchange {
    pub fn new(parts: Parts, body: Bytes, config: Config) -> Self {
        Self {
            id: Uuid::new_v4(),
            parts,
            body,
            config,
            response: None,
            aborted: false,
        }
    }

    /// Buffers the body of `request`, up to `config.body_limit` bytes.
    pub async fn read(request: Request, config: Config) -> Result<Self, ExchangeError> {
        let (parts, body) = request.into_parts();
        let body = to_bytes(body, config.body_limit).await?;

        Ok(Self::new(parts, body, config))
    }

    pub fn responder(&mut self) -> Responder<'_, Self> {
        let config = self.config;
        Responder::with_config(self, config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    /// Rebuilds the request so it can be forwarded to the next handler. Extensions are kept as
    /// they arrived.
    pub fn into_request(self) -> Request {
        Request::from_parts(self.parts, Body::from(self.body))
    }
}

impl Exchange for HttpExchange {
    fn write_json<T: Serialize>(&mut self, status_code: StatusCode, body: &T) {
        if self.response.is_some() {
            tracing::debug!(exchange_id = %self.id, "replacing previously written response");
        }

        tracing::debug!(
            exchange_id = %self.id,
            status = status_code.as_u16(),
            "writing response"
        );

        self.response = Some((status_code, axum::Json(body)).into_response());
    }

    fn decode_json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        if self.body.is_empty() {
            return Err(DecodeError::Empty);
        }

        Ok(serde_json::from_slice(&self.body)?)
    }

    fn abort(&mut self) {
        tracing::debug!(exchange_id = %self.id, "exchange aborted");
        self.aborted = true;
    }

    fn is_aborted(&self) -> bool {
        self.aborted
    }
}

#[async_trait]
impl<S> FromRequest<S> for HttpExchange
where
    S: Send + Sync,
{
    type Rejection = ExchangeError;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let config = request
            .extensions()
            .get::<Config>()
            .copied()
            .unwrap_or_default();

        HttpExchange::read(request, config).await
    }
}

impl IntoResponse for HttpExchange {
    fn into_response(self) -> Response {
        match self.response {
            Some(response) => response,
            None => StatusCode::OK.into_response(),
        }
    }
}
