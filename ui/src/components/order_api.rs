/// Order service base URL, overridden at compile-time via DRIVECHECK_API_URL.
/// The default is same-origin relative paths.
#[allow(dead_code)] // used in WASM builds
pub fn api_base_url() -> String {
    option_env!("DRIVECHECK_API_URL").unwrap_or("").to_string()
}

#[cfg(target_family = "wasm")]
pub mod wasm {
    use gloo_net::http::{Request, Response};
    use serde::{Deserialize, Serialize};

    use drivecheck_common::booking::OrderRequest;

    use super::api_base_url;

    #[derive(Serialize)]
    struct LoginRequest<'a> {
        username: &'a str,
        password: &'a str,
    }

    #[derive(Deserialize)]
    struct LoginResponse {
        token: String,
    }

    /// Rejected requests may carry a human-readable reason in the body.
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    async fn rejection_message(response: Response, fallback: &str) -> String {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Create a booking. Any 2xx counts as success; the body is not
    /// inspected further.
    pub async fn create_order(request: &OrderRequest) -> Result<(), String> {
        let url = format!("{}/api/orders", api_base_url());
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if response.ok() {
            tracing::info!("Booking created for {}", request.inspection_date);
            return Ok(());
        }

        let status = response.status();
        let message = rejection_message(response, "Booking failed").await;
        tracing::error!("Order service rejected booking (HTTP {status}): {message}");
        Err(message)
    }

    /// Exchange credentials for a session token.
    pub async fn log_in(username: &str, password: &str) -> Result<String, String> {
        let url = format!("{}/api/auth/login", api_base_url());
        let response = Request::post(&url)
            .json(&LoginRequest { username, password })
            .map_err(|e| format!("Serialization error: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if !response.ok() {
            let status = response.status();
            let message = rejection_message(response, "Login failed").await;
            tracing::error!("Login rejected (HTTP {status}): {message}");
            return Err(message);
        }

        response
            .json::<LoginResponse>()
            .await
            .map(|body| body.token)
            .map_err(|e| format!("Parse error: {e}"))
    }
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
pub mod wasm {
    use drivecheck_common::booking::OrderRequest;

    pub async fn create_order(_request: &OrderRequest) -> Result<(), String> {
        Ok(())
    }

    pub async fn log_in(_username: &str, _password: &str) -> Result<String, String> {
        Err("Order service is only reachable from the web build".to_string())
    }
}
