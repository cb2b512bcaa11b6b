//! Session state: the single source of truth for "is a user signed in."

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api::{self, FetchError};

/// Profile payload for the signed-in user. Opaque beyond its shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Authentication state for the current user session.
///
/// `user` and `connected` always come from the same profile response; they
/// are never written independently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub connected: bool,
}

impl SessionState {
    /// Whether the most recent profile fetch reported an authenticated user.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.connected
    }
}

/// Handle to the session store, shared through the rendering context.
///
/// Copyable like the raw `RwSignal` it wraps, so pages and the route guard
/// can capture it in closures freely.
#[derive(Clone, Copy)]
pub struct SessionStore(RwSignal<SessionState>);

impl SessionStore {
    /// Create a store in the logged-out state.
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Current state (reactive read).
    #[must_use]
    pub fn get(&self) -> SessionState {
        self.0.get()
    }

    /// Whether a user is signed in (reactive read).
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.0.with(SessionState::is_logged_in)
    }

    /// Replace the whole state in a single write.
    ///
    /// The only mutation path: used by [`SessionStore::login`] after a
    /// successful fetch and by client hydration.
    pub fn replace(&self, next: SessionState) {
        self.0.set(next);
    }

    /// Fetch the profile endpoint once and overwrite state from the response.
    ///
    /// # Errors
    ///
    /// Propagates [`FetchError`] from the request. The store is written only
    /// after the full response has been parsed, so a failed call leaves the
    /// prior state untouched.
    pub async fn login(self) -> Result<(), FetchError> {
        let next = api::fetch_session().await?;
        self.replace(next);
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
