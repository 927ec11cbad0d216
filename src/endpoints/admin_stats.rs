use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum_envelope::{Guard, HttpExchange};
use serde::Serialize;

#[derive(Serialize)]
pub struct Stats {
    version: &'static str,
}

/// Rejects requests whose `Authorization` header does not carry `token`. With no token
/// configured every request is let through.
pub fn authentication(token: Option<Arc<str>>) -> Guard {
    Guard::new(move |exchange: &mut HttpExchange| {
        let Some(token) = &token else {
            return;
        };

        let header = exchange
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let message = match header {
            Some(header) if header == token.as_ref() => return,
            Some(_) => Some("Bad authentication"),
            None => None,
        };

        exchange.responder().access_denied(message);
    })
}

pub async fn admin_stats(mut exchange: HttpExchange) -> HttpExchange {
    exchange.responder().ok(
        Stats {
            version: env!("CARGO_PKG_VERSION"),
        },
        None,
    );

    exchange
}
