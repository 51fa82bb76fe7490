use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_WEATHER_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 3;

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

/// Base URL of the weather backend, without a trailing slash.
pub fn weather_api_base_url() -> String {
    std::env::var("WEATHER_API_BASE_URL")
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_WEATHER_API_BASE_URL.to_owned())
}

pub fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

pub fn upstream_http_timeout() -> Duration {
    std::env::var("UPSTREAM_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS))
}

pub fn upstream_connect_timeout() -> Duration {
    std::env::var("UPSTREAM_CONNECT_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        temp_env::with_vars_unset(
            [
                "SERVER_PORT",
                "WEATHER_API_BASE_URL",
                "STATIC_DIR",
                "UPSTREAM_HTTP_TIMEOUT_SECS",
            ],
            || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT);
                assert_eq!(weather_api_base_url(), DEFAULT_WEATHER_API_BASE_URL);
                assert_eq!(static_dir(), PathBuf::from(DEFAULT_STATIC_DIR));
                assert_eq!(
                    upstream_http_timeout(),
                    Duration::from_secs(DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS)
                );
            },
        );
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        temp_env::with_vars(
            [
                ("SERVER_PORT", Some("0")),
                ("UPSTREAM_CONNECT_TIMEOUT_SECS", Some("soon")),
            ],
            || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT);
                assert_eq!(
                    upstream_connect_timeout(),
                    Duration::from_secs(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS)
                );
            },
        );
    }

    #[test]
    fn overrides_are_read_from_env() {
        temp_env::with_vars(
            [
                ("SERVER_PORT", Some("8088")),
                ("WEATHER_API_BASE_URL", Some(" https://weather.example/api/ ")),
                ("STATIC_DIR", Some("/srv/photospot")),
                ("UPSTREAM_HTTP_TIMEOUT_SECS", Some("25")),
            ],
            || {
                assert_eq!(server_port(), 8088);
                assert_eq!(weather_api_base_url(), "https://weather.example/api");
                assert_eq!(static_dir(), PathBuf::from("/srv/photospot"));
                assert_eq!(upstream_http_timeout(), Duration::from_secs(25));
            },
        );
    }
}
