use axum_envelope::HttpExchange;

pub async fn not_found(mut exchange: HttpExchange) -> HttpExchange {
    tracing::debug!(method = %exchange.method(), uri = %exchange.uri(), "no route matched");
    exchange.responder().not_found(None);
    exchange
}
