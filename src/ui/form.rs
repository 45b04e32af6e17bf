//! Submission state of the page's forms.
//!
//! Each form owns one `FormMachine`. Its status is a single tagged value, so
//! "submitting and errored at once" cannot be expressed.

use std::time::{Duration, Instant};

use thiserror::Error as ThisError;
use tracing::warn;

use crate::error::DeskError;
use crate::types::intake::{InquiryRequest, InquiryResponse, NewsletterRequest, NewsletterResponse};
use crate::ui::catalog::DEFAULT_SERVICE;
use crate::ui::client::{IntakeClient, Reply};

/// How long the newsletter confirmation stays up before the form is usable again.
pub const NEWSLETTER_RESET_AFTER: Duration = Duration::from_secs(3);

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: Option<String>,
    /// Only meaningful for inquiries.
    pub email_sent: Option<bool>,
    pub settled_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success(Confirmation),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum FormError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("no submission is in flight")]
    NotSubmitting,
}

#[derive(Debug, Clone)]
pub struct FormMachine {
    status: FormStatus,
    auto_reset: Option<Duration>,
}

impl FormMachine {
    /// `auto_reset`: how long `Success` lasts before `tick` returns to `Idle`.
    /// `None` keeps it until `reset`.
    pub fn new(auto_reset: Option<Duration>) -> Self {
        Self {
            status: FormStatus::Idle,
            auto_reset,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    /// Start a submission. Allowed from every state except `Submitting`.
    pub fn begin(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.status = FormStatus::Submitting;
        Ok(())
    }

    pub fn succeed(
        &mut self,
        message: Option<String>,
        email_sent: Option<bool>,
        now: Instant,
    ) -> Result<(), FormError> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }
        self.status = FormStatus::Success(Confirmation {
            message,
            email_sent,
            settled_at: now,
        });
        Ok(())
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), FormError> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }
        self.status = FormStatus::Error(reason.into());
        Ok(())
    }

    /// Explicit user action ("send another", closing the notice).
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
    }

    /// Expire a settled success. Returns true when the form went back to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (FormStatus::Success(confirmation), Some(after)) = (&self.status, self.auto_reset) else {
            return false;
        };
        if now.saturating_duration_since(confirmation.settled_at) < after {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            service: DEFAULT_SERVICE.to_string(),
            message: String::new(),
        }
    }
}

impl ContactDraft {
    pub fn to_request(&self) -> InquiryRequest {
        InquiryRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            service: Some(self.service.clone()),
            message: Some(self.message.clone()),
        }
    }
}

/// The contact section. Success stays on screen until `send_another`.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub draft: ContactDraft,
    machine: FormMachine,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            draft: ContactDraft::default(),
            machine: FormMachine::new(None),
        }
    }
}

impl ContactForm {
    pub fn status(&self) -> &FormStatus {
        self.machine.status()
    }

    pub async fn submit(&mut self, client: &IntakeClient) -> Result<&FormStatus, FormError> {
        self.machine.begin()?;
        let reply = client.submit_inquiry(&self.draft.to_request()).await;
        self.settle(reply, Instant::now())?;
        Ok(self.machine.status())
    }

    /// Fold a finished request into the form. Success needs a 2xx with
    /// `success: true`, and clears the draft.
    fn settle(
        &mut self,
        reply: Result<Reply<InquiryResponse>, DeskError>,
        now: Instant,
    ) -> Result<(), FormError> {
        match reply {
            Ok(Reply::Accepted(body)) if body.success => {
                self.draft = ContactDraft::default();
                self.machine.succeed(body.message, Some(body.email_sent), now)
            }
            Ok(Reply::Accepted(_)) => self.machine.fail(GENERIC_FAILURE),
            Ok(Reply::Refused { error, .. }) => self.machine.fail(error),
            Err(e) => {
                warn!(error = %e, "inquiry submission failed");
                self.machine.fail(GENERIC_FAILURE)
            }
        }
    }

    pub fn send_another(&mut self) {
        self.machine.reset();
    }
}

/// The footer signup. An empty address is ignored; success clears the field
/// and expires after `NEWSLETTER_RESET_AFTER`.
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: String,
    machine: FormMachine,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            machine: FormMachine::new(Some(NEWSLETTER_RESET_AFTER)),
        }
    }
}

impl NewsletterForm {
    pub fn status(&self) -> &FormStatus {
        self.machine.status()
    }

    /// Returns `Ok(false)` without a request when the field is empty.
    pub async fn submit(&mut self, client: &IntakeClient) -> Result<bool, FormError> {
        if self.email.is_empty() {
            return Ok(false);
        }
        self.machine.begin()?;
        let request = NewsletterRequest {
            email: Some(self.email.clone()),
        };
        let reply = client.subscribe(&request).await;
        self.settle(reply, Instant::now())?;
        Ok(true)
    }

    fn settle(
        &mut self,
        reply: Result<Reply<NewsletterResponse>, DeskError>,
        now: Instant,
    ) -> Result<(), FormError> {
        match reply {
            Ok(Reply::Accepted(body)) => {
                self.email.clear();
                self.machine.succeed(Some(body.message), None, now)
            }
            Ok(Reply::Refused { error, .. }) => self.machine.fail(error),
            Err(e) => {
                warn!(error = %e, "newsletter signup failed");
                self.machine.fail("Failed. Try again.")
            }
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.machine.tick(now)
    }

    pub fn dismiss(&mut self) {
        self.machine.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_allows_only_one_submission_in_flight() {
        let mut machine = FormMachine::new(None);
        machine.begin().unwrap();
        assert_eq!(machine.begin(), Err(FormError::AlreadySubmitting));
        machine.fail("boom").unwrap();
        assert_eq!(machine.status(), &FormStatus::Error("boom".into()));
        // retry from error
        machine.begin().unwrap();
        assert!(machine.is_submitting());
    }

    #[test]
    fn machine_settles_only_from_submitting() {
        let mut machine = FormMachine::new(None);
        assert_eq!(
            machine.succeed(None, None, Instant::now()),
            Err(FormError::NotSubmitting)
        );
        assert_eq!(machine.fail("x"), Err(FormError::NotSubmitting));
        assert_eq!(machine.status(), &FormStatus::Idle);
    }

    #[test]
    fn success_expires_only_with_auto_reset() {
        let start = Instant::now();
        let mut timed = FormMachine::new(Some(Duration::from_secs(3)));
        timed.begin().unwrap();
        timed.succeed(None, None, start).unwrap();
        assert!(!timed.tick(start + Duration::from_secs(2)));
        assert!(matches!(timed.status(), FormStatus::Success(_)));
        assert!(timed.tick(start + Duration::from_secs(3)));
        assert_eq!(timed.status(), &FormStatus::Idle);

        let mut sticky = FormMachine::new(None);
        sticky.begin().unwrap();
        sticky.succeed(None, None, start).unwrap();
        assert!(!sticky.tick(start + Duration::from_secs(3600)));
        sticky.reset();
        assert_eq!(sticky.status(), &FormStatus::Idle);
    }

    #[test]
    fn errors_do_not_expire() {
        let start = Instant::now();
        let mut machine = FormMachine::new(Some(Duration::from_secs(1)));
        machine.begin().unwrap();
        machine.fail("nope").unwrap();
        assert!(!machine.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn contact_success_clears_draft_and_records_email_flag() {
        let mut form = ContactForm::default();
        form.draft.name = "Ada".into();
        form.draft.email = "ada@x.com".into();
        form.draft.service = "Business Banking".into();

        form.machine.begin().unwrap();
        form.settle(
            Ok(Reply::Accepted(InquiryResponse::undelivered("relay down"))),
            Instant::now(),
        )
        .unwrap();

        assert_eq!(form.draft, ContactDraft::default());
        match form.status() {
            FormStatus::Success(c) => assert_eq!(c.email_sent, Some(false)),
            other => panic!("unexpected status {other:?}"),
        }
        form.send_another();
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn contact_refusal_keeps_draft() {
        let mut form = ContactForm::default();
        form.draft.name = "Ada".into();
        form.machine.begin().unwrap();
        form.settle(
            Ok(Reply::Refused {
                status: 400,
                error: "Missing required fields".into(),
            }),
            Instant::now(),
        )
        .unwrap();
        assert_eq!(form.draft.name, "Ada");
        assert_eq!(
            form.status(),
            &FormStatus::Error("Missing required fields".into())
        );
    }

    #[test]
    fn newsletter_success_clears_field_and_expires() {
        let start = Instant::now();
        let mut form = NewsletterForm::default();
        form.email = "a@b.com".into();
        form.machine.begin().unwrap();
        form.settle(
            Ok(Reply::Accepted(NewsletterResponse {
                success: true,
                message: "Already subscribed!".into(),
            })),
            start,
        )
        .unwrap();
        assert!(form.email.is_empty());
        assert!(form.tick(start + NEWSLETTER_RESET_AFTER));
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn draft_defaults_to_first_service_option() {
        let req = ContactDraft::default().to_request();
        assert_eq!(req.service.as_deref(), Some("USA LLC Registration"));
        assert_eq!(req.message.as_deref(), Some(""));
    }
}
