//! State model of the marketing page: what the browser keeps between renders.
//!
//! Layout and copy live with the frontend assets; this module holds the parts
//! with behavior (form submission state, the open modal, the service
//! catalog) and the client that talks to the Intake API.

pub mod catalog;
pub mod client;
pub mod form;
pub mod page;

pub use client::{IntakeClient, Reply};
pub use form::{ContactForm, FormStatus, NewsletterForm};
pub use page::{Overlay, PageState, PolicyKind};
