//! PostgreSQL adapter for InterestRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{EventId, InterestId, InterestRecord, NewInterest};
use crate::domain::ports::InterestRepository;
use crate::entity::interests;
use crate::error::DomainError;

/// PostgreSQL implementation of InterestRepository
pub struct PostgresInterestRepository {
    db: DatabaseConnection,
}

impl PostgresInterestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestRepository for PostgresInterestRepository {
    async fn find_by_id(&self, id: &InterestId) -> Result<Option<InterestRecord>, DomainError> {
        let result = interests::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_event(&self, event_id: &EventId) -> Result<Vec<InterestRecord>, DomainError> {
        let results = interests::Entity::find()
            .filter(interests::Column::EventId.eq(event_id.0))
            .order_by_asc(interests::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_all(&self) -> Result<Vec<InterestRecord>, DomainError> {
        let results = interests::Entity::find()
            .order_by_asc(interests::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(
        &self,
        interest: &NewInterest,
        reference_code: &str,
    ) -> Result<InterestRecord, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = interests::ActiveModel {
            id: Set(id),
            event_id: Set(interest.event_id.0),
            club_name: Set(interest.club_name.clone()),
            contact_email: Set(interest.contact_email.clone()),
            expected_participants: Set(Some(interest.expected_participants)),
            converted: Set(Some(false)),
            reference_code: Set(reference_code.to_string()),
            created_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn mark_converted(&self, id: &InterestId) -> Result<(), DomainError> {
        // Raw SQL so an already-converted record is a no-op rather than a lost update
        let stmt = sea_orm::Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "UPDATE interests SET converted = TRUE WHERE id = $1",
            [id.0.into()],
        );

        let result = self
            .db
            .execute(stmt)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            Err(DomainError::NotFound(format!(
                "Interest record {} not found",
                id
            )))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<interests::Model> for InterestRecord {
    fn from(model: interests::Model) -> Self {
        InterestRecord {
            id: InterestId(model.id),
            event_id: EventId(model.event_id),
            club_name: model.club_name,
            contact_email: model.contact_email,
            expected_participants: model.expected_participants.unwrap_or(0),
            converted: model.converted.unwrap_or(false),
            reference_code: model.reference_code,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
