//! Shared application state modules.
//!
//! DESIGN
//! ======
//! State lives in plain serde-friendly structs so it can be snapshotted for
//! the server-to-client handoff and tested without a browser. Reactivity is
//! layered on top: the structs are wrapped in `RwSignal`s and shared through
//! the Leptos context.

pub mod session;
