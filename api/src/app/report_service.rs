//! Report service
//!
//! Read models for the admin dashboard: demand analytics per event,
//! realized and projected day-pass revenue, and the platform summary.

use std::sync::Arc;

use serde::Serialize;

use crate::app::revenue::{actual_revenue, revenue_potential, DEFAULT_AVG_PARTY_SIZE};
use crate::app::scheduling::clash_count;
use crate::app::PricingService;
use crate::domain::entities::{ApprovalStatus, ClubStatus, EventId};
use crate::domain::ports::{
    ClubRepository, DayPassRateRepository, EventRepository, InterestRepository,
};
use crate::error::{AppError, DomainError};

/// Demand analytics for one event
#[derive(Debug, Clone, Serialize)]
pub struct DemandReport {
    pub event_id: String,
    pub interest_count: usize,
    pub converted_count: usize,
    /// 0.0 when there is no interest at all
    pub conversion_rate: f64,
    /// Sum of expected participants across all interest records
    pub expected_participants: i64,
}

/// Realized and projected day-pass revenue for one event
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub event_id: String,
    pub price_per_participant: f64,
    pub actual_revenue: f64,
    pub potential_revenue: f64,
}

/// Platform-wide summary for the admin dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub pending_events: i64,
    pub pending_clubs: i64,
    pub open_clashes: usize,
    pub unconverted_interest: usize,
    pub projected_revenue: f64,
}

/// Service producing admin read models
pub struct ReportService<ER, CR, IR, DR>
where
    ER: EventRepository,
    CR: ClubRepository,
    IR: InterestRepository,
    DR: DayPassRateRepository,
{
    events: Arc<ER>,
    clubs: Arc<CR>,
    interests: Arc<IR>,
    pricing: Arc<PricingService<DR, CR>>,
}

impl<ER, CR, IR, DR> ReportService<ER, CR, IR, DR>
where
    ER: EventRepository,
    CR: ClubRepository,
    IR: InterestRepository,
    DR: DayPassRateRepository,
{
    pub fn new(
        events: Arc<ER>,
        clubs: Arc<CR>,
        interests: Arc<IR>,
        pricing: Arc<PricingService<DR, CR>>,
    ) -> Self {
        Self {
            events,
            clubs,
            interests,
            pricing,
        }
    }

    /// Demand analytics for one event
    pub async fn event_demand(&self, event_id: &EventId) -> Result<DemandReport, AppError> {
        self.require_event(event_id).await?;
        let interests = self.interests.find_by_event(event_id).await?;

        let interest_count = interests.len();
        let converted_count = interests.iter().filter(|i| i.converted).count();
        let conversion_rate = if interest_count == 0 {
            0.0
        } else {
            converted_count as f64 / interest_count as f64
        };
        let expected_participants = interests
            .iter()
            .map(|i| i.expected_participants.max(0) as i64)
            .sum();

        Ok(DemandReport {
            event_id: event_id.to_string(),
            interest_count,
            converted_count,
            conversion_rate,
            expected_participants,
        })
    }

    /// Revenue report for one event. `avg_participants` overrides the
    /// platform average party size for the projection.
    pub async fn event_revenue(
        &self,
        event_id: &EventId,
        avg_participants: Option<f64>,
    ) -> Result<RevenueReport, AppError> {
        let event = self.require_event(event_id).await?;
        let interests = self.interests.find_by_event(event_id).await?;

        let price = match &event.host_club_id {
            Some(club_id) => self.pricing.effective_price(club_id).await?,
            None => crate::app::revenue::DEFAULT_DAY_PASS_PRICE,
        };

        let unconverted = interests.iter().filter(|i| !i.converted).count() as u64;
        let avg = avg_participants.unwrap_or(DEFAULT_AVG_PARTY_SIZE);

        Ok(RevenueReport {
            event_id: event_id.to_string(),
            price_per_participant: price,
            actual_revenue: actual_revenue(&interests, price),
            potential_revenue: revenue_potential(unconverted, avg, price),
        })
    }

    /// Platform-wide dashboard summary
    pub async fn dashboard(&self) -> Result<DashboardSummary, AppError> {
        let pending_events = self.events.count_by_status(ApprovalStatus::Pending).await?;
        let pending_clubs = self.clubs.count_by_status(ClubStatus::Pending).await?;

        let all_events = self.events.find_all(1000, 0).await?;
        let open_clashes = clash_count(&all_events);

        let all_interests = self.interests.find_all().await?;
        let unconverted: Vec<_> = all_interests.iter().filter(|i| !i.converted).collect();

        // Projection across events uses the platform defaults; per-event
        // pricing is only applied in the per-event report
        let projected_revenue = revenue_potential(
            unconverted.len() as u64,
            DEFAULT_AVG_PARTY_SIZE,
            crate::app::revenue::DEFAULT_DAY_PASS_PRICE,
        );

        Ok(DashboardSummary {
            pending_events,
            pending_clubs,
            open_clashes,
            unconverted_interest: unconverted.len(),
            projected_revenue,
        })
    }

    async fn require_event(
        &self,
        event_id: &EventId,
    ) -> Result<crate::domain::entities::Event, AppError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Event {} not found", event_id)).into())
    }
}
