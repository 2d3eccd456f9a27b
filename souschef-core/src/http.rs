//! Shared HTTP client
//!
//! A single, lazily-initialized client for all completion calls, so
//! connections are pooled across invocations.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// HTTP timeout for completion requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("souschef-rs/0.1")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
