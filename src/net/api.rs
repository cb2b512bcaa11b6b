//! REST helper for the session profile endpoint.
//!
//! Client-side (hydrate): one real HTTP call via `gloo-net`.
//! Server-side (SSR): a stub returning [`FetchError::Unsupported`], since the
//! profile is only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! There is one logical failure here, "profile fetch failed"; the variants
//! record its cause. The call is a single best-effort attempt with no retry,
//! timeout, or backoff, and the caller decides what to show the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::session::SessionState;

/// Fixed endpoint returning the current session profile.
pub const SESSION_ENDPOINT: &str = "/api/v1/user";

/// Error returned by [`fetch_session`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (network failure).
    #[error("profile request failed: {0}")]
    Request(String),
    /// The endpoint answered with a non-2xx status.
    #[error("profile request returned status {0}")]
    Status(u16),
    /// The response body was not a valid session payload.
    #[error("profile response was malformed: {0}")]
    Decode(String),
    /// No browser environment to issue the request from.
    #[error("profile fetch is only available in the browser")]
    Unsupported,
}

/// Fetch the session profile from [`SESSION_ENDPOINT`].
///
/// The body is parsed in full before the result is returned, so callers can
/// treat a success as one atomic `SessionState` value.
///
/// # Errors
///
/// Returns [`FetchError`] on network failure, a non-2xx status, a malformed
/// body, or when called outside the browser.
pub async fn fetch_session() -> Result<SessionState, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<SessionState>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unsupported)
    }
}
