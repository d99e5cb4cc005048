//! REST helper for the authentication endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning a transport failure, since the
//! endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `SignInResponse` in every case instead of a `Result`: the
//! outcome logic treats every non-200 status the same way, so request and
//! decode failures are folded into status 0 rather than surfaced as a
//! separate path.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use super::types::SignInBody;
use super::types::{SignInRequest, SignInResponse};

/// Submit credentials via `POST /api/auth/sign-in`.
pub async fn sign_in(request: &SignInRequest) -> SignInResponse {
    #[cfg(feature = "hydrate")]
    {
        let builder = match gloo_net::http::Request::post("/api/auth/sign-in").json(request) {
            Ok(builder) => builder,
            Err(err) => {
                log::warn!("sign-in request could not be built: {err}");
                return SignInResponse::transport_failure();
            }
        };

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("sign-in request failed: {err}");
                return SignInResponse::transport_failure();
            }
        };

        let status = resp.status();
        let body = resp.json::<SignInBody>().await.unwrap_or_default();
        SignInResponse {
            status,
            token: body.token,
            email: body.email,
            role: body.role,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        SignInResponse::transport_failure()
    }
}
