mod endpoints;

use std::{env, sync::Arc};

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use axum_envelope::{guard, Config};
use endpoints::{
    admin_stats::{admin_stats, authentication},
    create_note::create_note,
    echo::echo,
    not_found::not_found,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axum_envelope=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("invalid configuration");
    let token = env::var("AUTH").ok().map(Arc::from);

    let ip = env::var("IP").unwrap_or("0.0.0.0".to_string());
    let port = env::var("PORT")
        .as_deref()
        .unwrap_or("3000")
        .parse::<u16>()
        .expect("PORT must be a number");

    tracing::info!("Starting listener on {ip}:{port}");

    let listener = tokio::net::TcpListener::bind((ip, port))
        .await
        .expect("failed to bind listener");

    axum::serve(listener, app(config, token))
        .await
        .expect("server error");
}

fn app(config: Config, token: Option<Arc<str>>) -> Router {
    let admin = Router::new()
        .route("/admin/stats", get(admin_stats))
        .route_layer(middleware::from_fn_with_state(authentication(token), guard));

    Router::new()
        .route("/", get(|| async { "Hello from axum-envelope!" }))
        .route("/echo", post(echo))
        .route("/notes", post(create_note))
        .merge(admin)
        .fallback(not_found)
        .layer(Extension(config))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn call(app: Router, method: Method, uri: &str, token: Option<&str>, body: &str) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token);
        }

        app.oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn secured() -> Router {
        app(Config::default(), Some(Arc::from("secret")))
    }

    #[tokio::test]
    async fn admin_stats_open_without_token() {
        let response = call(app(Config::default(), None), Method::GET, "/admin/stats", None, "").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["msg"], "Success");
        assert_eq!(json["data"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn admin_stats_accepts_matching_token() {
        let response = call(secured(), Method::GET, "/admin/stats", Some("secret"), "").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_stats_rejects_wrong_token() {
        let response = call(secured(), Method::GET, "/admin/stats", Some("guess"), "").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "msg": "Bad authentication", "err": true })
        );
    }

    #[tokio::test]
    async fn admin_stats_rejects_missing_header() {
        let response = call(secured(), Method::GET, "/admin/stats", None, "").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "msg": "Access Denied", "err": true })
        );
    }

    #[tokio::test]
    async fn create_note_returns_created_note() {
        let body = r#"{"title":"groceries","body":"milk"}"#;
        let response = call(secured(), Method::POST, "/notes", None, body).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["msg"], "Resource created successfully");
        assert_eq!(json["err"], false);
        assert_eq!(json["data"]["title"], "groceries");
        assert_eq!(json["data"]["body"], "milk");
        assert!(json["data"]["id"].is_string());
    }

    #[tokio::test]
    async fn create_note_rejects_blank_title() {
        let response = call(secured(), Method::POST, "/notes", None, r#"{"title":"  "}"#).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "msg": "Title must not be empty", "err": true })
        );
    }

    #[tokio::test]
    async fn create_note_uses_custom_bind_message() {
        let response = call(secured(), Method::POST, "/notes", None, r#"{"body":"x"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "msg": "Expected a JSON object with a title", "err": true })
        );
    }

    #[tokio::test]
    async fn echo_returns_body_as_data() {
        let response = call(secured(), Method::POST, "/echo", None, r#"{"a":[1,2]}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "msg": "Success", "data": { "a": [1, 2] }, "err": false })
        );
    }

    #[tokio::test]
    async fn echo_rejects_malformed_body() {
        let response = call(secured(), Method::POST, "/echo", None, "invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["err"], true);
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped_not_found() {
        let response = call(secured(), Method::GET, "/missing", None, "").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "msg": "Not Found", "err": true })
        );
    }
}
