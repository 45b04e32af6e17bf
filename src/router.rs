use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::db::IntakeStorage;
use crate::handlers::{inquiries::create_inquiry, newsletter::subscribe};
use crate::mail::NotificationDispatcher;

/// Largest accepted request body. Form payloads are a few hundred bytes.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Process-scoped handles shared by every request.
#[derive(Clone)]
pub struct DeskState {
    pub storage: IntakeStorage,
    pub dispatcher: NotificationDispatcher,
}

impl DeskState {
    pub fn new(storage: IntakeStorage, dispatcher: NotificationDispatcher) -> Self {
        Self {
            storage,
            dispatcher,
        }
    }
}

pub fn desk_router(state: DeskState) -> Router {
    Router::new()
        .route("/api/inquiries", post(create_inquiry))
        .route("/api/newsletter", post(subscribe))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
