//! Report handlers
//!
//! Admin dashboard and per-event analytics endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::{DashboardSummary, DemandReport, RevenueReport};
use crate::domain::entities::EventId;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the revenue report
#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    /// Override for the assumed average travelling party size
    pub avg_participants: Option<f64>,
}

/// GET /reports/dashboard
///
/// Platform-wide summary for the admin dashboard.
pub async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(state.report_service.dashboard().await?))
}

/// GET /reports/events/:id/demand
///
/// Demand analytics for one event.
pub async fn event_demand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DemandReport>, AppError> {
    Ok(Json(state.report_service.event_demand(&EventId(id)).await?))
}

/// GET /reports/events/:id/revenue
///
/// Realized and projected day-pass revenue for one event.
pub async fn event_revenue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueReport>, AppError> {
    if let Some(avg) = query.avg_participants {
        if !avg.is_finite() || avg < 0.0 {
            return Err(AppError::BadRequest(format!(
                "avg_participants must be non-negative, got {}",
                avg
            )));
        }
    }

    Ok(Json(
        state
            .report_service
            .event_revenue(&EventId(id), query.avg_participants)
            .await?,
    ))
}
