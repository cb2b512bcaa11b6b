//! Optional application modules installed at bootstrap.
//!
//! Each module exposes an `install` initializer taking the shared
//! [`AppContext`](crate::bootstrap::AppContext). The list returned by
//! [`defaults`] is explicit and ordered; a module with nothing to set up is
//! simply left off the list.

pub mod theme;

use crate::bootstrap::Initializer;

/// Modules installed by default, in registration order.
#[must_use]
pub fn defaults() -> Vec<Initializer> {
    vec![theme::install]
}
