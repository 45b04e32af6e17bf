//! Staff notifications for new inquiries.
//!
//! `dispatcher` turns a stored inquiry into an `OutboundEmail`; `transport`
//! hands it to the relay. The two are split so handlers can be exercised
//! with an in-process transport.

pub mod dispatcher;
pub mod transport;

pub use dispatcher::NotificationDispatcher;
pub use transport::{HttpMailTransport, MailReceipt, MailTransport, OutboundEmail};
