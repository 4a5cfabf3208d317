use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    infra::http_client,
    use_cases::registration::EmailSender,
};

const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

/// Sends mail through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    from: String,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString, from: String) -> AppResult<Self> {
        let client = http_client::try_build_client()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key,
            from,
        })
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
        };
        self.client
            .post(RESEND_EMAILS_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Email(format!("Failed to send email: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Email(format!("Email API error: {e}")))?;
        Ok(())
    }
}
