use crate::config::{AllowedOrigins, Config};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, warn};

/// Build the CORS layer applied in front of every route.
///
/// Preflight `OPTIONS` requests are answered here, so routes only register
/// their real methods.
pub fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(config.allowed_origins()))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// An explicit list never widens to `*`; if no entry is a valid header value
/// no origin is allowed.
fn allow_origin(origins: AllowedOrigins) -> AllowOrigin {
    let origins = match origins {
        AllowedOrigins::Any => {
            info!("CORS: allowing any origin");
            return AllowOrigin::any();
        }
        AllowedOrigins::Only(origins) => origins,
    };

    let values: Vec<HeaderValue> = origins
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    if values.is_empty() {
        error!("CORS: no configured origin is valid, cross-origin requests will be refused");
    } else {
        info!("CORS: allowing {} configured origin(s)", values.len());
    }
    AllowOrigin::list(values)
}
