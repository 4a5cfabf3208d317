use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub database_url: String,
    /// Public origin of the site. Check-in URLs encoded into QR codes hang off it.
    pub app_origin: Url,
    pub cors_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub resend_api_key: SecretString,
    pub email_from: String,
    /// Event attached to registrations that do not name one.
    pub default_event: Option<String>,
    /// Call-to-action link in the confirmation email (e.g. a community group).
    pub community_link: Option<Url>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: String = get_env("DATABASE_URL");
        let app_origin: Url = get_env("APP_ORIGIN");
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let resend_api_key = SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let email_from: String = get_env("EMAIL_FROM");
        let default_event = optional_env("DEFAULT_EVENT");
        let community_link = optional_env("COMMUNITY_LINK").map(|raw| {
            Url::parse(&raw).expect("COMMUNITY_LINK must be a valid URL")
        });

        Self {
            database_url,
            app_origin,
            cors_origin,
            bind_addr,
            resend_api_key,
            email_from,
            default_event,
            community_link,
        }
    }

    /// Origin without the trailing slash `Url` adds to bare hosts.
    pub fn origin(&self) -> String {
        self.app_origin.as_str().trim_end_matches('/').to_string()
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
