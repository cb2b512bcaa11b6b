//! Application bootstrap: render-pass selection, module installation, and
//! the server-to-client state transfer.
//!
//! DESIGN
//! ======
//! The root component drives this module in a fixed order: construct the
//! store, install modules, attach the store to the rendering context, then
//! run [`transfer`] for whichever pass is executing. The pass is an explicit
//! parameter rather than an ambient environment probe, so both branches can
//! be exercised from plain unit tests.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::handoff;
use crate::state::session::{SessionState, SessionStore};

/// Which rendering pass the application shell is executing.
///
/// The two passes are mutually exclusive: the server pass produces the
/// initial HTML and state payload, the client pass reads the payload back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPass {
    /// Server-side render emitting the page and its state payload.
    Server,
    /// Browser hydration reconstructing state from the embedded payload.
    Client,
}

/// Shared context handed to every module initializer.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The session store for this application instance.
    pub session: SessionStore,
    /// The pass this instance is rendering under.
    pub pass: RenderPass,
}

/// A module initializer, invoked once at bootstrap with the shared context.
pub type Initializer = fn(&AppContext);

/// Run every module initializer, in registration order.
///
/// An empty list is a no-op; a module with nothing to set up simply is not
/// registered.
pub fn install(ctx: &AppContext, initializers: &[Initializer]) {
    for initializer in initializers {
        initializer(ctx);
    }
}

/// Perform the state transfer for the executing pass and return the payload
/// text to embed in the page.
///
/// Server pass: snapshot the store into the outgoing payload.
///
/// Client pass: replace the store from `inbound` when it is present and well
/// formed; a missing payload leaves the default-constructed state, and a
/// malformed one is logged and discarded. The inbound text is re-embedded
/// unchanged so the hydrated document matches the server-rendered one.
#[must_use]
pub fn transfer(ctx: &AppContext, inbound: Option<String>) -> String {
    match ctx.pass {
        RenderPass::Server => handoff::encode_state(&ctx.session.get()),
        RenderPass::Client => {
            if let Some(raw) = &inbound {
                match handoff::decode_state(raw) {
                    Ok(state) => ctx.session.replace(state),
                    Err(e) => leptos::logging::warn!("discarding state payload: {e}"),
                }
            }
            inbound.unwrap_or_else(|| handoff::encode_state(&SessionState::default()))
        }
    }
}
