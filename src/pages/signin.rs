//! Sign-in page, the only route reachable while signed out.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Sign-in page — the button fetches the session profile and, once the store
/// reports a connected user, moves on to the dashboard. A failed fetch is
/// shown inline and leaves the session untouched.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_signin = move |_| {
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login().await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("sign-in failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <div class="signin-page">
            <h1>"Noteboard"</h1>
            <p>"Sign in to continue"</p>
            <button class="signin-button" on:click=on_signin>
                "Sign in"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="signin-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
