//! Club handlers
//!
//! Endpoints for club registration, review, and name matching.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Club, ClubId, NewClub};
use crate::error::AppError;
use crate::AppState;

use super::events::RejectRequest;

/// Query parameters for listing clubs
#[derive(Debug, Deserialize)]
pub struct ListClubsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// Response for a single club
#[derive(Debug, Serialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    pub contact_email: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        ClubResponse {
            id: club.id.to_string(),
            name: club.name,
            country: club.country,
            county: club.county,
            contact_email: club.contact_email,
            status: club.status.to_string(),
            rejection_reason: club.rejection_reason,
            created_at: club.created_at.to_rfc3339(),
        }
    }
}

/// Request to register a new club
#[derive(Debug, Deserialize)]
pub struct RegisterClubRequest {
    pub name: String,
    pub country: String,
    pub county: Option<String>,
    pub contact_email: String,
}

/// Query parameters for club matching
#[derive(Debug, Deserialize)]
pub struct MatchClubQuery {
    pub name: String,
    pub country: Option<String>,
}

/// Response for club matching
#[derive(Debug, Serialize)]
pub struct MatchClubResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<ClubResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// POST /clubs/register
///
/// Register a new club. The registration awaits administrator review.
pub async fn register_club(
    State(state): State<AppState>,
    Json(request): Json<RegisterClubRequest>,
) -> Result<Json<ClubResponse>, AppError> {
    let club = state
        .club_service
        .register(NewClub {
            name: request.name,
            country: request.country,
            county: request.county,
            contact_email: request.contact_email,
        })
        .await?;

    Ok(Json(club.into()))
}

/// GET /clubs
///
/// List clubs, newest registration first.
pub async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ListClubsQuery>,
) -> Result<Json<Vec<ClubResponse>>, AppError> {
    let clubs = state.club_service.list(query.limit, query.offset).await?;
    Ok(Json(clubs.into_iter().map(|c| c.into()).collect()))
}

/// GET /clubs/match
///
/// Find the approved club best matching a free-text name.
pub async fn match_club(
    State(state): State<AppState>,
    Query(query): Query<MatchClubQuery>,
) -> Result<Json<MatchClubResponse>, AppError> {
    let result = state
        .club_service
        .match_club(&query.name, query.country.as_deref())
        .await?;

    Ok(Json(match result {
        Some(m) => MatchClubResponse {
            matched: true,
            club: Some(m.club.into()),
            score: Some(m.score),
        },
        None => MatchClubResponse {
            matched: false,
            club: None,
            score: None,
        },
    }))
}

/// POST /clubs/:id/approve
///
/// Approve a pending club registration.
pub async fn approve_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClubResponse>, AppError> {
    let club = state.club_service.approve(&ClubId(id)).await?;
    Ok(Json(club.into()))
}

/// POST /clubs/:id/reject
///
/// Reject a pending club registration with a reason.
pub async fn reject_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RejectRequest>,
) -> Result<Json<ClubResponse>, AppError> {
    let club = state
        .club_service
        .reject(&ClubId(id), &request.reason)
        .await?;
    Ok(Json(club.into()))
}
