use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbSubscriber {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a newsletter insert. A duplicate address is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed(i64),
    AlreadySubscribed,
}

impl SubscribeOutcome {
    /// Caller-facing confirmation text.
    pub fn message(&self) -> &'static str {
        match self {
            SubscribeOutcome::Subscribed(_) => "Subscribed successfully!",
            SubscribeOutcome::AlreadySubscribed => "Already subscribed!",
        }
    }
}
