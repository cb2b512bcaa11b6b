//! Navigation guard keeping signed-out visitors on the sign-in page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{SessionState, SessionStore};

/// Route path of the sign-in page, the only route reachable while signed out.
pub const SIGNIN_PATH: &str = "/signin";

/// Decision for a pending navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation proceed.
    Allow,
    /// Cancel the navigation and go to the contained path instead.
    Redirect(&'static str),
}

/// Decide whether a navigation to `target_path` may proceed.
///
/// Signed-in sessions go anywhere. Signed-out sessions may only reach the
/// sign-in page; every other target redirects there.
#[must_use]
pub fn evaluate(target_path: &str, session: &SessionState) -> GuardOutcome {
    if target_path != SIGNIN_PATH && !session.is_logged_in() {
        GuardOutcome::Redirect(SIGNIN_PATH)
    } else {
        GuardOutcome::Allow
    }
}

/// Invisible component re-running [`evaluate`] on every route transition.
///
/// Mounted once inside the router. Tracks both the location and the session
/// store, so a session that disconnects is also pushed back to sign-in.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        if let GuardOutcome::Redirect(target) = evaluate(&path, &session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
