use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header::ORIGIN},
    middleware::Next,
    response::Response,
};

use crate::{errors::HttpError, state::HttpState};

pub const TOKEN_HEADER: &str = "x-console-token";

/// Gate for the `/api` routes. Browsers attach `Origin` to cross-site
/// POSTs, so a request whose origin resolves to anything but this
/// machine is refused before the token is even looked at; requests must
/// then present the run token the console printed at startup.
pub async fn require_run_token(
    State(state): State<HttpState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    if let Some(origin) = req.headers().get(ORIGIN) {
        let allowed = origin
            .to_str()
            .ok()
            .is_some_and(is_loopback_origin);
        if !allowed {
            return Err(HttpError::new(
                StatusCode::FORBIDDEN,
                "request origin is not this console",
                Some("invalid_origin".to_string()),
            ));
        }
    }

    let presented = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if !state.token_matches(presented) {
        return Err(HttpError::new(
            StatusCode::UNAUTHORIZED,
            format!("missing or invalid {TOKEN_HEADER} header"),
            Some("token_invalid".to_string()),
        ));
    }

    Ok(next.run(req).await)
}

/// The host part of an http(s) origin, with the port stripped. `None`
/// for other schemes or malformed values.
fn origin_host(origin: &str) -> Option<&str> {
    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))?;
    if let Some(bracketed) = rest.strip_prefix('[') {
        return bracketed.split(']').next();
    }
    rest.split(':').next()
}

fn is_loopback_origin(origin: &str) -> bool {
    matches!(origin_host(origin), Some("127.0.0.1" | "localhost" | "::1"))
}
