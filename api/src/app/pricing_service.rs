//! Pricing service
//!
//! Day-pass rate configuration per hosting club. The platform default
//! applies when a club has no configured rate.

use std::sync::Arc;

use crate::app::revenue::DEFAULT_DAY_PASS_PRICE;
use crate::domain::entities::{ClubId, DayPassRate, NewDayPassRate};
use crate::domain::ports::{ClubRepository, DayPassRateRepository};
use crate::error::{AppError, DomainError};

/// Service for day-pass pricing configuration
pub struct PricingService<DR, CR>
where
    DR: DayPassRateRepository,
    CR: ClubRepository,
{
    rates: Arc<DR>,
    clubs: Arc<CR>,
}

impl<DR, CR> PricingService<DR, CR>
where
    DR: DayPassRateRepository,
    CR: ClubRepository,
{
    pub fn new(rates: Arc<DR>, clubs: Arc<CR>) -> Self {
        Self { rates, clubs }
    }

    /// The club's configured rate, if any
    pub async fn get_rate(&self, club_id: &ClubId) -> Result<Option<DayPassRate>, AppError> {
        Ok(self.rates.find_by_club(club_id).await?)
    }

    /// The price to charge per participant for a club: configured rate
    /// or the platform default
    pub async fn effective_price(&self, club_id: &ClubId) -> Result<f64, AppError> {
        Ok(self
            .rates
            .find_by_club(club_id)
            .await?
            .map(|r| r.price_per_participant)
            .unwrap_or(DEFAULT_DAY_PASS_PRICE))
    }

    /// Set a club's day-pass rate. The club must exist and be approved;
    /// the price must be positive and finite.
    pub async fn set_rate(&self, rate: NewDayPassRate) -> Result<DayPassRate, AppError> {
        if !rate.price_per_participant.is_finite() || rate.price_per_participant <= 0.0 {
            return Err(DomainError::Validation(format!(
                "Day-pass price must be positive, got {}",
                rate.price_per_participant
            ))
            .into());
        }

        let club = self
            .clubs
            .find_by_id(&rate.club_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Club {} not found", rate.club_id)))?;
        if !club.is_active() {
            return Err(DomainError::Validation(format!(
                "Club {} is not approved",
                club.name
            ))
            .into());
        }

        Ok(self.rates.upsert(&rate).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClubStatus;
    use crate::test_utils::{
        test_club_with_status, InMemoryClubRepository, InMemoryDayPassRateRepository,
    };

    fn create_service(
        rate_repo: InMemoryDayPassRateRepository,
        club_repo: InMemoryClubRepository,
    ) -> PricingService<InMemoryDayPassRateRepository, InMemoryClubRepository> {
        PricingService::new(Arc::new(rate_repo), Arc::new(club_repo))
    }

    #[tokio::test]
    async fn effective_price_defaults_when_unconfigured() {
        let service = create_service(
            InMemoryDayPassRateRepository::new(),
            InMemoryClubRepository::new(),
        );

        let price = service.effective_price(&ClubId::new()).await.unwrap();

        assert_eq!(price, DEFAULT_DAY_PASS_PRICE);
    }

    #[tokio::test]
    async fn set_rate_then_read_it_back() {
        let club = test_club_with_status(ClubStatus::Approved);
        let service = create_service(
            InMemoryDayPassRateRepository::new(),
            InMemoryClubRepository::new().with_club(club.clone()),
        );

        let rate = service
            .set_rate(NewDayPassRate {
                club_id: club.id,
                price_per_participant: 12.5,
            })
            .await
            .unwrap();
        assert_eq!(rate.price_per_participant, 12.5);

        assert_eq!(service.effective_price(&club.id).await.unwrap(), 12.5);
    }

    #[tokio::test]
    async fn set_rate_overwrites_previous() {
        let club = test_club_with_status(ClubStatus::Approved);
        let service = create_service(
            InMemoryDayPassRateRepository::new(),
            InMemoryClubRepository::new().with_club(club.clone()),
        );

        for price in [10.0, 17.5] {
            service
                .set_rate(NewDayPassRate {
                    club_id: club.id,
                    price_per_participant: price,
                })
                .await
                .unwrap();
        }

        assert_eq!(service.effective_price(&club.id).await.unwrap(), 17.5);
    }

    #[tokio::test]
    async fn set_rate_rejects_bad_prices() {
        let club = test_club_with_status(ClubStatus::Approved);
        let service = create_service(
            InMemoryDayPassRateRepository::new(),
            InMemoryClubRepository::new().with_club(club.clone()),
        );

        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = service
                .set_rate(NewDayPassRate {
                    club_id: club.id,
                    price_per_participant: price,
                })
                .await;
            assert!(matches!(
                result,
                Err(AppError::Domain(DomainError::Validation(_)))
            ));
        }
    }

    #[tokio::test]
    async fn set_rate_requires_approved_club() {
        let club = test_club_with_status(ClubStatus::Pending);
        let service = create_service(
            InMemoryDayPassRateRepository::new(),
            InMemoryClubRepository::new().with_club(club.clone()),
        );

        let result = service
            .set_rate(NewDayPassRate {
                club_id: club.id,
                price_per_participant: 10.0,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }
}
