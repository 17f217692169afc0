//! PostgreSQL adapter for ClubRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Club, ClubId, ClubStatus, NewClub};
use crate::domain::ports::ClubRepository;
use crate::entity::clubs;
use crate::error::DomainError;

/// PostgreSQL implementation of ClubRepository
pub struct PostgresClubRepository {
    db: DatabaseConnection,
}

impl PostgresClubRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let result = clubs::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Club>, DomainError> {
        let result = clubs::Entity::find()
            .filter(clubs::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Club>, DomainError> {
        let results = clubs::Entity::find()
            .order_by_desc(clubs::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_approved(&self, country: Option<&str>) -> Result<Vec<Club>, DomainError> {
        let mut query = clubs::Entity::find()
            .filter(clubs::Column::Status.eq(ClubStatus::Approved.to_string()));

        if let Some(country) = country {
            query = query.filter(clubs::Column::Country.eq(country));
        }

        let results = query
            .order_by_asc(clubs::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, club: &NewClub) -> Result<Club, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = clubs::ActiveModel {
            id: Set(id),
            name: Set(club.name.clone()),
            country: Set(club.country.clone()),
            county: Set(club.county.clone()),
            contact_email: Set(club.contact_email.clone()),
            status: Set(Some(ClubStatus::Pending.to_string())),
            rejection_reason: Set(None),
            created_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_status(
        &self,
        id: &ClubId,
        status: ClubStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError> {
        clubs::ActiveModel {
            id: Set(id.0),
            status: Set(Some(status.to_string())),
            rejection_reason: Set(rejection_reason.map(|r| r.to_string())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn count_by_status(&self, status: ClubStatus) -> Result<i64, DomainError> {
        let count = clubs::Entity::find()
            .filter(clubs::Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }
}

/// Convert SeaORM model to domain entity
impl From<clubs::Model> for Club {
    fn from(model: clubs::Model) -> Self {
        Club {
            id: ClubId(model.id),
            name: model.name,
            country: model.country,
            county: model.county,
            contact_email: model.contact_email,
            status: model
                .status
                .and_then(|s| s.parse().ok())
                .unwrap_or(ClubStatus::Pending),
            rejection_reason: model.rejection_reason,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
