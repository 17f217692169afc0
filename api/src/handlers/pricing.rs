//! Pricing handlers
//!
//! Day-pass rate configuration per hosting club.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::revenue::DEFAULT_DAY_PASS_PRICE;
use crate::domain::entities::{ClubId, NewDayPassRate};
use crate::error::AppError;
use crate::AppState;

/// Response for a club's day-pass rate
#[derive(Debug, Serialize)]
pub struct DayPassRateResponse {
    pub club_id: String,
    pub price_per_participant: f64,
    /// False when the platform default applies
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request to set a club's day-pass rate
#[derive(Debug, Deserialize)]
pub struct SetDayPassRateRequest {
    pub price_per_participant: f64,
}

/// GET /clubs/:id/day-pass
///
/// The club's day-pass rate, or the platform default when unconfigured.
pub async fn get_day_pass_rate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DayPassRateResponse>, AppError> {
    let club_id = ClubId(id);
    let rate = state.pricing_service.get_rate(&club_id).await?;

    Ok(Json(match rate {
        Some(rate) => DayPassRateResponse {
            club_id: club_id.to_string(),
            price_per_participant: rate.price_per_participant,
            configured: true,
            updated_at: Some(rate.updated_at.to_rfc3339()),
        },
        None => DayPassRateResponse {
            club_id: club_id.to_string(),
            price_per_participant: DEFAULT_DAY_PASS_PRICE,
            configured: false,
            updated_at: None,
        },
    }))
}

/// PUT /clubs/:id/day-pass
///
/// Set a club's day-pass rate.
pub async fn set_day_pass_rate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetDayPassRateRequest>,
) -> Result<Json<DayPassRateResponse>, AppError> {
    let rate = state
        .pricing_service
        .set_rate(NewDayPassRate {
            club_id: ClubId(id),
            price_per_participant: request.price_per_participant,
        })
        .await?;

    Ok(Json(DayPassRateResponse {
        club_id: rate.club_id.to_string(),
        price_per_participant: rate.price_per_participant,
        configured: true,
        updated_at: Some(rate.updated_at.to_rfc3339()),
    }))
}
