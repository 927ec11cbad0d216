use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    config::Config,
    exchange::{Exchange, HttpExchange},
};

type Check = dyn Fn(&mut HttpExchange) + Send + Sync;

/// A check that runs ahead of the route handler.
///
/// If the check aborts the exchange (for example through
/// [`Responder::access_denied`](crate::Responder::access_denied)) its response is returned and
/// the handler never runs. Install with [`axum::middleware::from_fn_with_state`] and [`guard`].
///
/// Without [`Guard::with_config`] the guard uses the `Config` found in the request extensions,
/// falling back to the default.
#[derive(Clone)]
pub struct Guard {
    check: Arc<Check>,
    config: Option<Config>,
}

impl Guard {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&mut HttpExchange) + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            config: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

pub async fn guard(State(guard): State<Guard>, request: Request, next: Next) -> Response {
    let config = guard
        .config
        .or_else(|| request.extensions().get::<Config>().copied())
        .unwrap_or_default();

    let mut exchange = match HttpExchange::read(request, config).await {
        Ok(exchange) => exchange,
        Err(err) => return err.into_response(),
    };

    (guard.check)(&mut exchange);

    if exchange.is_aborted() {
        tracing::debug!(exchange_id = %exchange.id(), "guard stopped the request");
        return exchange.into_response();
    }

    if exchange.is_written() {
        tracing::debug!(
            exchange_id = %exchange.id(),
            "guard response will be replaced by the handler response"
        );
    }

    let mut request = exchange.into_request();
    if let Some(config) = guard.config {
        request.extensions_mut().insert(config);
    }

    next.run(request).await
}
