//! PostgreSQL adapter for DayPassRateRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{ClubId, DayPassRate, NewDayPassRate};
use crate::domain::ports::DayPassRateRepository;
use crate::entity::day_pass_rates;
use crate::error::DomainError;

/// PostgreSQL implementation of DayPassRateRepository
pub struct PostgresDayPassRateRepository {
    db: DatabaseConnection,
}

impl PostgresDayPassRateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DayPassRateRepository for PostgresDayPassRateRepository {
    async fn find_by_club(&self, club_id: &ClubId) -> Result<Option<DayPassRate>, DomainError> {
        let result = day_pass_rates::Entity::find_by_id(club_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn upsert(&self, rate: &NewDayPassRate) -> Result<DayPassRate, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = day_pass_rates::ActiveModel {
            club_id: Set(rate.club_id.0),
            price_per_participant: Set(rate.price_per_participant),
            updated_at: Set(Some(now)),
        };

        day_pass_rates::Entity::insert(model)
            .on_conflict(
                OnConflict::column(day_pass_rates::Column::ClubId)
                    .update_columns([
                        day_pass_rates::Column::PricePerParticipant,
                        day_pass_rates::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        self.find_by_club(&rate.club_id).await?.ok_or_else(|| {
            DomainError::Internal(format!("Rate for club {} missing after upsert", rate.club_id))
        })
    }
}

/// Convert SeaORM model to domain entity
impl From<day_pass_rates::Model> for DayPassRate {
    fn from(model: day_pass_rates::Model) -> Self {
        DayPassRate {
            club_id: ClubId(model.club_id),
            price_per_participant: model.price_per_participant,
            updated_at: model
                .updated_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
