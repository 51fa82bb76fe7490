use std::path::{Path, PathBuf};

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

use photospot_shared::PHOTO_SPOTS_PATH;

use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState, static_dir: PathBuf) -> Router {
    // Listing URLs pushed by the client load the app shell on reload.
    let app_shell = ServeFile::new(static_dir.join("index.html"));
    let static_assets = Router::new()
        .nest_service(PHOTO_SPOTS_PATH, app_shell)
        .fallback_service(
            ServeDir::new(static_dir)
                .precompressed_br()
                .precompressed_gzip(),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    let app = Router::new()
        .route(
            "/api/weather/map",
            axum::routing::get(routes::weather::get_weather_map),
        )
        .route(
            "/api/weather/grade/{code}",
            axum::routing::get(routes::weather::get_region_grade),
        )
        .route("/api/health", axum::routing::get(routes::api::health));

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    is_hashed_bundle_asset(path).then_some("public, max-age=31536000, immutable")
}

/// Trunk output names carry a hex content hash, e.g. `photospot-client-71578f6b278221f3_bg.wasm`.
fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    if !matches!(ext, "wasm" | "js" | "css") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}
