//! Credential token storage.
//!
//! One fixed key in two independently scoped stores: `localStorage` for
//! "remember me" sign-ins (survives browser restarts) and `sessionStorage`
//! otherwise (dropped when the session ends). Requires a browser
//! environment; server-side these helpers are inert.
//!
//! NOTE: the route guard reads only the durable store. A token written to
//! the session store is never consulted for admission — that asymmetry is
//! long-standing deployed behavior and is kept as-is rather than silently
//! changed (see DESIGN.md).

use crate::state::sign_in::TokenScope;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "pantry_token";

/// Read the credential token from the durable store.
///
/// Returns `None` outside the browser, when storage is unavailable, or
/// when no token has been written.
#[must_use]
pub fn read_durable_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token into the chosen scope.
pub fn store_token(token: &str, scope: TokenScope) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let storage = match scope {
            TokenScope::Durable => window.local_storage(),
            TokenScope::Ephemeral => window.session_storage(),
        };
        if let Ok(Some(storage)) = storage {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, scope);
    }
}
