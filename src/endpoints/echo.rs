use axum_envelope::HttpExchange;
use serde_json::Value;

pub async fn echo(mut exchange: HttpExchange) -> HttpExchange {
    let mut responder = exchange.responder();

    if let Some(body) = responder.bind::<Value>(None) {
        responder.ok(body, None);
    }

    exchange
}
