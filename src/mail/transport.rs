use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::DeskError;

const TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// A fully rendered message, ready for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// What the relay told us when it accepted a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailReceipt {
    pub message_id: Option<String>,
}

/// Anything that can deliver an `OutboundEmail`. Implementations must be
/// safe to share across request handlers.
pub trait MailTransport: Send + Sync {
    /// Send once. No retry happens at this layer or above.
    fn send<'a>(&'a self, email: &'a OutboundEmail) -> BoxFuture<'a, Result<MailReceipt, DeskError>>;

    /// Check that the relay is reachable and accepts our credentials.
    fn verify(&self) -> BoxFuture<'_, Result<(), DeskError>>;
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    #[serde(rename = "MessageID")]
    message_id: Option<String>,
}

/// Transactional-email relay reached over HTTPS with a JSON API.
pub struct HttpMailTransport {
    http_client: Client,
    base_url: Url,
    token: Secret<String>,
}

impl HttpMailTransport {
    pub fn new(base_url: Url, token: Secret<String>, timeout: Duration) -> Result<Self, DeskError> {
        let http_client = Client::builder()
            .user_agent(concat!("bizdesk/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http_client,
            base_url,
            token,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, DeskError> {
        Self::new(
            cfg.mail_relay_url.clone(),
            Secret::new(cfg.mail_secret()),
            Duration::from_millis(cfg.mail_timeout_ms),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn send_inner(&self, email: &OutboundEmail) -> Result<MailReceipt, DeskError> {
        let request_body = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
        };

        let resp = self
            .http_client
            .post(self.endpoint("email"))
            .header(TOKEN_HEADER, self.token.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(DeskError::MailRejected {
                status: status.as_u16(),
                detail,
            });
        }

        // An accepted message with an unreadable body is still accepted.
        let message_id = match resp.json::<SendEmailResponse>().await {
            Ok(body) => body.message_id,
            Err(e) => {
                debug!(error = %e, "relay accepted message without a readable receipt");
                None
            }
        };
        Ok(MailReceipt { message_id })
    }

    async fn verify_inner(&self) -> Result<(), DeskError> {
        let resp = self
            .http_client
            .get(self.endpoint("server"))
            .header(TOKEN_HEADER, self.token.expose_secret())
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(DeskError::MailRejected {
            status: status.as_u16(),
            detail: resp.text().await.unwrap_or_default(),
        })
    }
}

impl MailTransport for HttpMailTransport {
    fn send<'a>(&'a self, email: &'a OutboundEmail) -> BoxFuture<'a, Result<MailReceipt, DeskError>> {
        Box::pin(self.send_inner(email))
    }

    fn verify(&self) -> BoxFuture<'_, Result<(), DeskError>> {
        Box::pin(self.verify_inner())
    }
}
