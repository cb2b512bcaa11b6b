//! Root application component: routing, bootstrap, and the route guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::bootstrap::{self, AppContext, RenderPass};
use crate::guard::RouteGuard;
use crate::handoff::{self, STATE_ELEMENT_ID};
use crate::modules;
use crate::pages::{dashboard::DashboardPage, signin::SignInPage};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App pass=RenderPass::Server/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Runs the bootstrap sequence once for the given pass: construct the
/// session store, install the module initializers, attach the store to the
/// rendering context, perform the state handoff, and register the navigation
/// guard. The handoff payload is embedded in (or, on the client, re-embedded
/// from) the `session-state` element so both passes render the same document.
#[component]
pub fn App(pass: RenderPass) -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext { session: SessionStore::new(), pass };
    bootstrap::install(&ctx, &modules::defaults());
    provide_context(ctx.session);

    let payload = bootstrap::transfer(&ctx, handoff::read_embedded());

    view! {
        <Stylesheet id="leptos" href="/pkg/noteboard-ui.css"/>
        <Title text="Noteboard"/>

        <script id=STATE_ELEMENT_ID type="application/json" inner_html=payload></script>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
