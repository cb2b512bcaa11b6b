//! Serialized state handoff between the server render and client hydration.
//!
//! The server pass embeds a JSON snapshot of the session store in a
//! `<script type="application/json">` element; the hydration pass reads it
//! back and replaces the store's in-memory state. Every `<` in the payload is
//! emitted as `\u003c` so no string content can terminate the carrier
//! element early.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use crate::state::session::SessionState;

/// DOM id of the element carrying the serialized state payload.
pub const STATE_ELEMENT_ID: &str = "session-state";

/// Error returned by [`decode_state`].
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The payload was not a JSON document matching [`SessionState`].
    #[error("malformed state snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize session state for inline embedding.
#[must_use]
pub fn encode_state(state: &SessionState) -> String {
    // Safety: serializing a struct of plain optional fields is infallible,
    // so the error arm of to_string cannot be hit.
    serde_json::to_string(state).unwrap_or_default().replace('<', "\\u003c")
}

/// Parse a payload produced by [`encode_state`].
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] when the payload is not valid JSON or
/// does not match the session state shape.
pub fn decode_state(raw: &str) -> Result<SessionState, SnapshotError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read the embedded state payload from the current document.
///
/// Returns `None` outside the browser or when the carrier element is absent
/// (e.g. a page rendered without a server pass).
#[must_use]
pub fn read_embedded() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(STATE_ELEMENT_ID))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
