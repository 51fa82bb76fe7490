use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::Response;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let observability = state.observability.snapshot();
    Json(serde_json::json!({
        "status": "ok",
        "upstream": &*state.upstream_base,
        "observability": {
            "upstream_requests_total": observability.upstream_requests_total,
            "upstream_errors_total": observability.upstream_errors_total,
            "rejected_requests_total": observability.rejected_requests_total,
        }
    }))
}

pub(crate) fn json_body_response(body: impl Into<Body>, cache_control: &'static str) -> Response {
    let mut response = Response::new(body.into());
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    response
}

#[cfg(test)]
pub(crate) mod tests {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use super::*;

    pub(crate) async fn spawn_test_server(
        state: AppState,
    ) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let app = crate::app::build_app(state, PathBuf::from("client/dist"));
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn health_exposes_expected_contract() {
        let state = AppState::new("http://127.0.0.1:9/api").expect("build state");
        let (addr, server_handle) = spawn_test_server(state).await;

        let health = reqwest::Client::new()
            .get(format!("http://{addr}/api/health"))
            .send()
            .await
            .expect("health request")
            .error_for_status()
            .expect("health status")
            .json::<serde_json::Value>()
            .await
            .expect("parse health");

        assert_eq!(health.get("status").and_then(|v| v.as_str()), Some("ok"));
        assert_eq!(
            health.get("upstream").and_then(|v| v.as_str()),
            Some("http://127.0.0.1:9/api")
        );
        assert_eq!(
            health
                .get("observability")
                .and_then(|v| v.get("upstream_requests_total"))
                .and_then(|v| v.as_u64()),
            Some(0)
        );

        server_handle.abort();
        let _ = server_handle.await;
    }
}
