use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::error::{ApiErrorResponse, DeskError};
use crate::types::intake::{
    InquiryRequest, InquiryResponse, NewsletterRequest, NewsletterResponse,
};

/// How the Intake API answered a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// 2xx with a parsed body.
    Accepted(T),
    /// Any other status; `error` is the server's message when it sent one.
    Refused { status: u16, error: String },
}

/// Browser-side caller of the Intake API.
#[derive(Clone)]
pub struct IntakeClient {
    http: Client,
    base_url: Url,
}

impl IntakeClient {
    pub fn new(base_url: Url) -> Result<Self, DeskError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, base_url })
    }

    pub async fn submit_inquiry(
        &self,
        body: &InquiryRequest,
    ) -> Result<Reply<InquiryResponse>, DeskError> {
        self.post("/api/inquiries", body).await
    }

    pub async fn subscribe(
        &self,
        body: &NewsletterRequest,
    ) -> Result<Reply<NewsletterResponse>, DeskError> {
        self.post("/api/newsletter", body).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<Reply<T>, DeskError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        let resp = self.http.post(url).json(body).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(Reply::Accepted(resp.json::<T>().await?));
        }

        let text = resp.text().await.unwrap_or_default();
        let error = serde_json::from_str::<ApiErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        Ok(Reply::Refused {
            status: status.as_u16(),
            error,
        })
    }
}
