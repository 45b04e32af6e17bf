//! Wire types for the Intake API, shared by the handlers and `ui::client`.

use serde::{Deserialize, Serialize};

use crate::error::DeskError;

/// Body of `POST /api/inquiries`. Fields are optional at the wire level so a
/// missing field is reported as a 400 with our own message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InquiryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An inquiry that passed validation. Email shape and service name are not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl InquiryRequest {
    pub fn validate(self) -> Result<NewInquiry, DeskError> {
        match (
            required(self.name),
            required(self.email),
            required(self.service),
        ) {
            (Some(name), Some(email), Some(service)) => Ok(NewInquiry {
                name,
                email,
                service,
                message: self.message,
            }),
            _ => Err(DeskError::Validation("Missing required fields")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub success: bool,
    pub email_sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InquiryResponse {
    pub fn delivered() -> Self {
        Self {
            success: true,
            email_sent: true,
            message: Some("Inquiry received and email sent.".to_string()),
            error: None,
        }
    }

    /// The lead was stored but the notification did not go out.
    pub fn undelivered(detail: impl Into<String>) -> Self {
        Self {
            success: true,
            email_sent: false,
            message: None,
            error: Some(detail.into()),
        }
    }
}

/// Body of `POST /api/newsletter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsletterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewsletterRequest {
    pub fn validate(self) -> Result<String, DeskError> {
        required(self.email).ok_or(DeskError::Validation("Email is required"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsletterResponse {
    pub success: bool,
    pub message: String,
}
