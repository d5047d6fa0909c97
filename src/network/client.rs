//! EmailJS REST client

use async_trait::async_trait;
use serde::Serialize;

use crate::config::EmailJsConfig;
use crate::constants::{APP_VERSION, EMAILJS_SEND_PATH};
use crate::error::SendError;
use crate::models::FormPayload;
use crate::network::sender::EmailSender;

/// JSON body of `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormPayload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Sends submissions to EmailJS with injected identifiers
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self::with_client(create_client(), config)
    }

    pub fn with_client(client: reqwest::Client, config: EmailJsConfig) -> Self {
        EmailJsClient { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.api_url, EMAILJS_SEND_PATH)
    }

    fn body<'a>(&'a self, payload: &'a FormPayload) -> SendEmailBody<'a> {
        SendEmailBody {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
            access_token: self.config.private_key.as_deref(),
        }
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, payload: &FormPayload) -> Result<(), SendError> {
        let resp = self
            .client
            .post(self.endpoint())
            .json(&self.body(payload))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Create an HTTP client with default configuration.
///
/// No request timeout is set: a send runs until the service answers.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(format!("contactform/{}", APP_VERSION))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let client = EmailJsClient::new(
            EmailJsConfig::new("service_1", "template_1", "public_1")
                .with_api_url("http://localhost:1234"),
        );
        let payload = FormPayload::new("Jo", "jo@example.com", "hi");
        let json = serde_json::to_value(client.body(&payload)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "public_1",
                "template_params": {
                    "user_name": "Jo",
                    "user_email": "jo@example.com",
                    "message": "hi",
                },
            })
        );
        assert_eq!(client.endpoint(), "http://localhost:1234/api/v1.0/email/send");
    }

    #[test]
    fn test_body_includes_access_token() {
        let client = EmailJsClient::new(EmailJsConfig::new("s", "t", "p").with_private_key("secret"));
        let payload = FormPayload::default();
        let json = serde_json::to_value(client.body(&payload)).unwrap();
        assert_eq!(json["accessToken"], "secret");
    }
}
