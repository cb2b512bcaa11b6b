//! Dashboard page, the guarded landing route.

use leptos::prelude::*;

use crate::modules::theme;
use crate::state::session::{SessionState, SessionStore};

/// Dashboard page — greets the signed-in user. The route guard keeps
/// signed-out visitors away, so this page only reads the session store.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let dark = RwSignal::new(theme::read_preference());

    let on_toggle = move |_| dark.set(theme::toggle(dark.get_untracked()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Noteboard"</h1>
                <button class="btn" on:click=on_toggle>
                    {move || if dark.get() { "Light theme" } else { "Dark theme" }}
                </button>
            </header>
            <p class="dashboard-page__welcome">{move || welcome(&session.get())}</p>
        </div>
    }
}

fn welcome(state: &SessionState) -> String {
    match state.user.as_ref().and_then(|user| user.name.as_deref()) {
        Some(name) => format!("Signed in as {name}"),
        None => "Signed in".to_owned(),
    }
}
