use std::sync::Arc;

use htmlescape::encode_minimal;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::models::DbInquiry;
use crate::error::DeskError;
use crate::mail::transport::{MailReceipt, MailTransport, OutboundEmail};

const NO_MESSAGE: &str = "No message provided.";

/// Formats inquiries into staff notifications and sends them to one fixed recipient.
#[derive(Clone)]
pub struct NotificationDispatcher {
    transport: Arc<dyn MailTransport>,
    sender: String,
    recipient: String,
}

impl NotificationDispatcher {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }

    pub fn from_config(cfg: &Config, transport: Arc<dyn MailTransport>) -> Self {
        Self::new(transport, cfg.sender_mailbox(), cfg.receiver_email.clone())
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn compose(&self, inquiry: &DbInquiry) -> OutboundEmail {
        let message = inquiry
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(NO_MESSAGE);
        let received = inquiry.created_at.format("%Y-%m-%d %H:%M:%S UTC");

        let text_body = format!(
            "New Business Inquiry:\n\nName: {}\nEmail: {}\nService: {}\nMessage: {}",
            inquiry.name, inquiry.email, inquiry.service, message
        );

        let html_body = format!(
            r##"<div style="font-family: sans-serif; padding: 20px; border: 1px solid #eee; border-radius: 10px; max-width: 600px;">
  <h2 style="color: #10b981; border-bottom: 2px solid #10b981; padding-bottom: 10px;">New Business Inquiry</h2>
  <p style="margin: 10px 0;"><strong>Name:</strong> {name}</p>
  <p style="margin: 10px 0;"><strong>Email:</strong> {email}</p>
  <p style="margin: 10px 0;"><strong>Service:</strong> <span style="background: #f0fdf4; padding: 2px 6px; border-radius: 4px; color: #166534;">{service}</span></p>
  <div style="background: #f8fafc; padding: 15px; border-radius: 8px; margin-top: 15px;">
    <p style="margin: 0; font-weight: bold; color: #64748b; font-size: 12px; text-transform: uppercase;">Message:</p>
    <p style="margin: 5px 0; color: #334155;">{message}</p>
  </div>
  <hr style="margin: 20px 0; border: 0; border-top: 1px solid #eee;" />
  <p style="font-size: 11px; color: #94a3b8;">This inquiry was sent from your website contact form on {received}</p>
</div>"##,
            name = encode_minimal(&inquiry.name),
            email = encode_minimal(&inquiry.email),
            service = encode_minimal(&inquiry.service),
            message = encode_minimal(message),
            received = received,
        );

        OutboundEmail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            subject: format!("New Inquiry: {} from {}", inquiry.service, inquiry.name),
            text_body,
            html_body,
        }
    }

    /// Send one notification for `inquiry`. Failures are returned, never retried.
    pub async fn notify_inquiry(&self, inquiry: &DbInquiry) -> Result<MailReceipt, DeskError> {
        let email = self.compose(inquiry);
        let receipt = self.transport.send(&email).await?;
        info!(
            inquiry_id = inquiry.id,
            message_id = receipt.message_id.as_deref().unwrap_or("<none>"),
            "notification email sent"
        );
        Ok(receipt)
    }

    /// Probe the relay once and log the result. Never fails startup.
    pub async fn verify(&self) -> bool {
        match self.transport.verify().await {
            Ok(()) => {
                info!(recipient = %self.recipient, "mail relay is ready to take our messages");
                true
            }
            Err(e) => {
                warn!(error = %e, "mail relay verification failed");
                false
            }
        }
    }
}
