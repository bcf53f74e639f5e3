//! Caller identification and role guards.
//!
//! `identify_caller` runs on every request and attaches a [`Caller`] built
//! from the `Authorization: Bearer <token>` header. `require_role` is layered
//! onto individual routes and rejects callers below the route's role before
//! any extractor or handler runs.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::server::types::ApiError;
use crate::types::{AppState, Caller, Role};

/// Hashes a bearer token the same way configured keys are stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(&hasher.finalize())
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolves the caller's role and stores it in the request extensions.
///
/// Unknown or missing tokens resolve to [`Role::Anonymous`]; rejecting them
/// is left to the route guards.
pub async fn identify_caller(
    State(s): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let caller = match bearer_token(&req) {
        Some(token) => match s.credentials.get(&hash_token(token)) {
            Some(credential) => Caller {
                name: Some(credential.name.clone()),
                role: credential.role,
            },
            None => {
                warn!("Unrecognized API key on {} {}", req.method(), req.uri().path());
                Caller::anonymous()
            }
        },
        None => Caller::anonymous(),
    };

    req.extensions_mut().insert(caller);
    next.run(req).await
}

/// Lets the request through only if the caller holds at least `required`.
pub async fn require_role(State(required): State<Role>, req: Request, next: Next) -> Response {
    let caller = req
        .extensions()
        .get::<Caller>()
        .cloned()
        .unwrap_or_else(Caller::anonymous);

    if caller.role == Role::Anonymous || caller.role < required {
        warn!(
            "Denied {:?} caller {} on {} {}",
            caller.role,
            caller.name.as_deref().unwrap_or("<anonymous>"),
            req.method(),
            req.uri().path()
        );
        return ApiError::Forbidden.into_response();
    }

    debug!(
        "{} ({:?}) -> {} {}",
        caller.name.as_deref().unwrap_or("<anonymous>"),
        caller.role,
        req.method(),
        req.uri().path()
    );
    next.run(req).await
}

mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_hash_token() {
        // sha256("abc")
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_bearer_token_parsing() {
        let req = axum::http::Request::builder()
            .header(AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), Some("secret"));

        let req = axum::http::Request::builder()
            .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), None);

        let req = axum::http::Request::builder()
            .header(AUTHORIZATION, "Bearer ")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), None);
    }
}
