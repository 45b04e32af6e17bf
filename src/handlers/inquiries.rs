use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::middleware::ApiJson;
use crate::types::intake::{InquiryRequest, InquiryResponse};
use crate::ui::catalog;
use crate::{DeskError, router::DeskState};

/// POST /api/inquiries -> store the lead, then try to notify staff.
///
/// Once the row is written the caller always gets `success: true`; a mail
/// failure only flips `emailSent` and adds `error`.
pub async fn create_inquiry(
    State(state): State<DeskState>,
    ApiJson(body): ApiJson<InquiryRequest>,
) -> Result<Json<InquiryResponse>, DeskError> {
    let inquiry = body.validate()?;

    info!(
        name = %inquiry.name,
        email = %inquiry.email,
        service = %inquiry.service,
        "new inquiry received"
    );
    if !catalog::is_offered(&inquiry.service) {
        debug!(service = %inquiry.service, "inquiry names a service outside the offered set");
    }

    let stored = state.storage.insert_inquiry(&inquiry).await?;
    info!(inquiry_id = stored.id, "inquiry saved to database");

    match state.dispatcher.notify_inquiry(&stored).await {
        Ok(_) => Ok(Json(InquiryResponse::delivered())),
        Err(e) => {
            error!(inquiry_id = stored.id, error = %e, "failed to send inquiry notification");
            Ok(Json(InquiryResponse::undelivered(e.to_string())))
        }
    }
}
