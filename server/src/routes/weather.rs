//! Same-origin forwarding of the two weather backend endpoints.
//!
//! Bodies pass through untouched; grading stays with the backend.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use tracing::warn;

use crate::error::ProxyError;
use crate::routes::api::json_body_response;
use crate::state::AppState;

const MAX_REGION_CODE_LEN: usize = 32;
const WEATHER_CACHE_CONTROL: &str = "no-cache";

pub async fn get_weather_map(State(state): State<AppState>) -> Result<Response, ProxyError> {
    forward(&state, "weather/map").await
}

pub async fn get_region_grade(
    State(state): State<AppState>,
    Path(raw_code): Path<String>,
) -> Result<Response, ProxyError> {
    let code = normalize_region_code(&raw_code).inspect_err(|_| {
        state.observability.record_rejected_request();
    })?;
    forward(&state, &format!("weather/grade/{code}")).await
}

fn normalize_region_code(raw: &str) -> Result<&str, ProxyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_REGION_CODE_LEN {
        return Err(ProxyError::InvalidRegionCode);
    }
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-'))
    {
        return Err(ProxyError::InvalidRegionCode);
    }
    Ok(trimmed)
}

async fn forward(state: &AppState, path: &str) -> Result<Response, ProxyError> {
    state.observability.record_upstream_request();
    let url = format!("{}/{path}", state.upstream_base);

    let resp = match state.http_client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            state.observability.record_upstream_error();
            warn!(error = %e, %url, "weather backend unreachable");
            return Err(e.into());
        }
    };

    if !resp.status().is_success() {
        state.observability.record_upstream_error();
        let status =
            StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        warn!(status = status.as_u16(), %url, "weather backend returned an error status");
        return Err(ProxyError::UpstreamStatus(status));
    }

    let body = resp.bytes().await.inspect_err(|e| {
        state.observability.record_upstream_error();
        warn!(error = %e, %url, "failed to read weather backend body");
    })?;

    Ok(json_body_response(body, WEATHER_CACHE_CONTROL))
}
