//! CORS for browser clients of the claim endpoint.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use couponhub_core::config::CorsConfig;

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Entries that fail to parse are skipped.
fn parsed<T: FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}

/// Builds the CORS layer from `server.cors`.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: AllowOrigin = if is_wildcard(&config.allowed_origins) {
        Any.into()
    } else {
        parsed::<HeaderValue>(&config.allowed_origins).into()
    };
    let headers: AllowHeaders = if is_wildcard(&config.allowed_headers) {
        Any.into()
    } else {
        parsed::<HeaderName>(&config.allowed_headers).into()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers(headers)
        .allow_methods(parsed::<Method>(&config.allowed_methods))
        .max_age(Duration::from_secs(config.max_age_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_skips_invalid_entries() {
        let methods = parsed::<Method>(&["GET".to_string(), "NOT A METHOD".to_string()]);
        assert_eq!(methods, vec![Method::GET]);
        assert!(is_wildcard(&["*".to_string()]));
        assert!(!is_wildcard(&["https://shop.example".to_string()]));
    }
}
