use gloo_net::http::Request;

use photospot_shared::{
    FetchError, RegionGradeDetail, RegionGradeSnapshot, decode_detail, decode_snapshot,
};

const API_BASE: &str = "/api";

/// Fetch the region code -> grade map.
pub async fn fetch_snapshot() -> Result<RegionGradeSnapshot, FetchError> {
    let body = get_text(&format!("{API_BASE}/weather/map")).await?;
    decode_snapshot(&body)
}

/// Fetch the detailed reading for one region code.
pub async fn fetch_detail(code: &str) -> Result<RegionGradeDetail, FetchError> {
    let code = String::from(js_sys::encode_uri_component(code));
    let body = get_text(&format!("{API_BASE}/weather/grade/{code}")).await?;
    decode_detail(&body)
}

async fn get_text(url: &str) -> Result<String, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}
