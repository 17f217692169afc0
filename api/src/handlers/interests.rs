//! Interest handlers
//!
//! Public interest registration and the admin demand views.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{EventId, InterestId, InterestRecord, NewInterest};
use crate::error::AppError;
use crate::AppState;

/// Request to register interest in an event
#[derive(Debug, Deserialize)]
pub struct RegisterInterestRequest {
    pub club_name: String,
    pub contact_email: String,
    pub expected_participants: i32,
}

/// Response for a single interest record
#[derive(Debug, Serialize)]
pub struct InterestResponse {
    pub id: String,
    pub event_id: String,
    pub club_name: String,
    pub contact_email: String,
    pub expected_participants: i32,
    pub converted: bool,
    pub reference_code: String,
    pub created_at: String,
}

impl From<InterestRecord> for InterestResponse {
    fn from(record: InterestRecord) -> Self {
        InterestResponse {
            id: record.id.to_string(),
            event_id: record.event_id.to_string(),
            club_name: record.club_name,
            contact_email: record.contact_email,
            expected_participants: record.expected_participants,
            converted: record.converted,
            reference_code: record.reference_code,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// POST /events/:id/interest
///
/// Register a travelling team's interest in an approved event.
pub async fn register_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RegisterInterestRequest>,
) -> Result<Json<InterestResponse>, AppError> {
    let record = state
        .interest_service
        .register(NewInterest {
            event_id: EventId(id),
            club_name: request.club_name,
            contact_email: request.contact_email,
            expected_participants: request.expected_participants,
        })
        .await?;

    Ok(Json(record.into()))
}

/// GET /events/:id/interests
///
/// List interest records for an event, oldest first.
pub async fn list_interests(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InterestResponse>>, AppError> {
    let records = state.interest_service.list_for_event(&EventId(id)).await?;
    Ok(Json(records.into_iter().map(|r| r.into()).collect()))
}

/// POST /interests/:id/convert
///
/// Mark an interest record as converted into a confirmed registration.
pub async fn convert_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterestResponse>, AppError> {
    let record = state.interest_service.convert(&InterestId(id)).await?;
    Ok(Json(record.into()))
}
