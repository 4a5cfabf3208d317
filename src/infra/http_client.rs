//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound clients (currently only the Resend mailer) are built here so every
//! call gets the same connect and request timeouts.

use reqwest::Client;
use std::time::Duration;

/// Connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request/response time for third-party API calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
}
