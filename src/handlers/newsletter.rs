use axum::{Json, extract::State};
use tracing::info;

use crate::db::SubscribeOutcome;
use crate::middleware::ApiJson;
use crate::types::intake::{NewsletterRequest, NewsletterResponse};
use crate::{DeskError, router::DeskState};

/// POST /api/newsletter -> add the address; a repeat signup is still a success.
pub async fn subscribe(
    State(state): State<DeskState>,
    ApiJson(body): ApiJson<NewsletterRequest>,
) -> Result<Json<NewsletterResponse>, DeskError> {
    let email = body.validate()?;

    let outcome = state.storage.insert_subscriber(&email).await?;
    if let SubscribeOutcome::Subscribed(id) = outcome {
        info!(subscriber_id = id, email = %email, "new newsletter subscriber");
    }

    Ok(Json(NewsletterResponse {
        success: true,
        message: outcome.message().to_string(),
    }))
}
