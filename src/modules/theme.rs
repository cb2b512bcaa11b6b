//! Color theme module.
//!
//! Applies the visitor's dark-mode preference when the application boots:
//! `localStorage` wins, falling back to the system `prefers-color-scheme`
//! query. The preference toggles the `.dark-mode` class on `<html>` and is
//! persisted across visits. Requires a browser environment; on the server
//! pass every call is a no-op.

use crate::bootstrap::AppContext;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "noteboard_dark";

/// Module initializer: apply the stored preference once at bootstrap.
pub fn install(_ctx: &AppContext) {
    apply(read_preference());
}

/// Read the dark-mode preference.
///
/// Returns `true` when the visitor previously enabled dark mode, or when the
/// system prefers dark and no choice is stored.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "true";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let classes = root.class_list();
            if enabled {
                let _ = classes.add_1("dark-mode");
            } else {
                let _ = classes.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persist the choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
            }
        }
    }
    next
}
