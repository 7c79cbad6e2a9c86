use dioxus::prelude::*;

/// localStorage key holding the session token.
#[allow(dead_code)] // read in WASM builds
pub const AUTH_TOKEN_KEY: &str = "drivecheck_auth_token";

/// Login session shared app-wide as a live signal.
///
/// Seeded from the persisted token at startup; login and logout write
/// through the same signal, so every mounted reader follows without a
/// remount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSession {
    token: Option<String>,
}

impl AuthSession {
    /// Seed the session from the persisted token, if any.
    pub fn restore() -> Self {
        Self {
            token: storage::read_token(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Persist the token and mark the session live.
    pub fn log_in(&mut self, token: String) {
        if let Err(err) = storage::write_token(&token) {
            tracing::warn!("Session token not persisted: {err}");
        }
        self.token = Some(token);
    }

    /// Drop the session and the persisted token.
    pub fn log_out(&mut self) {
        if let Err(err) = storage::clear_token() {
            tracing::warn!("Persisted session token not removed: {err}");
        }
        self.token = None;
    }
}

/// The session signal provided at the app root.
pub fn use_auth_session() -> Signal<AuthSession> {
    use_context::<Signal<AuthSession>>()
}

#[cfg(target_family = "wasm")]
mod storage {
    use super::AUTH_TOKEN_KEY;

    fn local_storage() -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or("No window")?;
        Ok(window
            .local_storage()
            .map_err(|_| "No localStorage")?
            .ok_or("localStorage unavailable")?)
    }

    pub fn read_token() -> Option<String> {
        local_storage().ok()?.get_item(AUTH_TOKEN_KEY).ok()?
    }

    pub fn write_token(token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|_| "Failed to write localStorage".to_string())
    }

    pub fn clear_token() -> Result<(), String> {
        local_storage()?
            .remove_item(AUTH_TOKEN_KEY)
            .map_err(|_| "Failed to write localStorage".to_string())
    }
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
mod storage {
    pub fn read_token() -> Option<String> {
        None
    }

    pub fn write_token(_token: &str) -> Result<(), String> {
        Ok(())
    }

    pub fn clear_token() -> Result<(), String> {
        Ok(())
    }
}
