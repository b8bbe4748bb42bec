//! Bearer token storage.
//!
//! On wasm the token lives in `localStorage` under [`TOKEN_KEY`] so it
//! survives reloads; everywhere else (tests, tooling) a process-local cell
//! stands in.

pub const TOKEN_KEY: &str = "token";

#[cfg(not(target_arch = "wasm32"))]
static TOKEN: std::sync::Mutex<Option<String>> = std::sync::Mutex::new(None);

/// Read the stored bearer token, if any.
pub fn get() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        TOKEN.lock().ok()?.clone()
    }
}

/// Store a bearer token.
pub fn set(token: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(mut slot) = TOKEN.lock() {
            *slot = Some(token.to_string());
        }
    }
}

/// Remove the stored token.
pub fn clear() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(mut slot) = TOKEN.lock() {
            *slot = None;
        }
    }
}

/// Whether a token is currently stored. Presence does not imply validity;
/// the server decides that on the next request.
pub fn is_authenticated() -> bool {
    get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_round_trip() {
        clear();
        assert!(!is_authenticated());

        set("abc123");
        assert_eq!(get().as_deref(), Some("abc123"));
        assert!(is_authenticated());

        clear();
        assert_eq!(get(), None);
    }
}
