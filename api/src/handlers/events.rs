//! Event handlers
//!
//! Endpoints for event listing, submission, and administrator review.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::{ClashGroup, EventFilter};
use crate::domain::entities::{Category, ClubId, Event, EventId, NewEvent};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing events
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub clashes_only: bool,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    200
}

/// Response for a single event
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub start_date: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_club_id: Option<String>,
    pub location: String,
    pub categories: Vec<String>,
    pub created_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        EventResponse {
            id: event.id.to_string(),
            title: event.title,
            start_date: event.start_date.map(|d| d.to_string()),
            status: event.status.to_string(),
            rejection_reason: event.rejection_reason,
            host_club_id: event.host_club_id.map(|c| c.to_string()),
            location: event.location,
            categories: event.categories.iter().map(|c| c.to_string()).collect(),
            created_at: event.created_at.to_rfc3339(),
        }
    }
}

/// A clash group in the listing response
#[derive(Debug, Serialize)]
pub struct ClashGroupResponse {
    pub date: String,
    pub event_ids: Vec<String>,
}

impl From<ClashGroup> for ClashGroupResponse {
    fn from(group: ClashGroup) -> Self {
        ClashGroupResponse {
            date: group.date.to_string(),
            event_ids: group.events.iter().map(|e| e.id.to_string()).collect(),
        }
    }
}

/// Response for the event listing
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
    pub clashes: Vec<ClashGroupResponse>,
}

/// Request to submit a new event
#[derive(Debug, Deserialize)]
pub struct SubmitEventRequest {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub host_club_id: Option<Uuid>,
    pub location: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Request to reject an event
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// GET /events
///
/// List events with optional status/date filters and the clash groups
/// among them.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<EventListResponse>, AppError> {
    let status = query
        .status
        .as_deref()
        .map(|s| s.parse())
        .transpose()
        .map_err(AppError::BadRequest)?;

    let filter = EventFilter {
        status,
        from: query.from,
        to: query.to,
        clashes_only: query.clashes_only,
    };

    let listing = state.event_service.list(&filter, query.limit).await?;

    Ok(Json(EventListResponse {
        events: listing.events.into_iter().map(|e| e.into()).collect(),
        clashes: listing.clashes.into_iter().map(|g| g.into()).collect(),
    }))
}

/// GET /events/:id
///
/// Get event details.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state
        .event_service
        .get(&EventId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

    Ok(Json(event.into()))
}

/// POST /events
///
/// Submit a new event for review.
pub async fn submit_event(
    State(state): State<AppState>,
    Json(request): Json<SubmitEventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let categories = request
        .categories
        .iter()
        .map(|c| c.parse::<Category>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::BadRequest)?;

    let event = state
        .event_service
        .submit(NewEvent {
            title: request.title,
            start_date: request.start_date,
            host_club_id: request.host_club_id.map(ClubId),
            location: request.location,
            categories,
        })
        .await?;

    Ok(Json(event.into()))
}

/// POST /events/:id/approve
///
/// Approve a pending event.
pub async fn approve_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state.event_service.approve(&EventId(id)).await?;
    Ok(Json(event.into()))
}

/// POST /events/:id/reject
///
/// Reject a pending event with a reason.
pub async fn reject_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RejectRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state
        .event_service
        .reject(&EventId(id), &request.reason)
        .await?;
    Ok(Json(event.into()))
}
