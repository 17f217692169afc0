//! PostgreSQL adapter for EventRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{ApprovalStatus, ClubId, Event, EventId, NewEvent};
use crate::domain::ports::EventRepository;
use crate::entity::events;
use crate::error::DomainError;

/// PostgreSQL implementation of EventRepository
pub struct PostgresEventRepository {
    db: DatabaseConnection,
}

impl PostgresEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let result = events::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Event>, DomainError> {
        let results = events::Entity::find()
            .order_by_desc(events::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = events::ActiveModel {
            id: Set(id),
            title: Set(event.title.clone()),
            start_date: Set(event.start_date),
            status: Set(Some(ApprovalStatus::Pending.to_string())),
            rejection_reason: Set(None),
            host_club_id: Set(event.host_club_id.map(|c| c.0)),
            location: Set(event.location.clone()),
            categories: Set(Some(join_categories(&event.categories))),
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
        id: &EventId,
        status: ApprovalStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError> {
        events::ActiveModel {
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

    async fn count_by_status(&self, status: ApprovalStatus) -> Result<i64, DomainError> {
        let count = events::Entity::find()
            .filter(events::Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }
}

fn join_categories(categories: &[crate::domain::entities::Category]) -> String {
    categories
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Convert SeaORM model to domain entity
impl From<events::Model> for Event {
    fn from(model: events::Model) -> Self {
        Event {
            id: EventId(model.id),
            title: model.title,
            start_date: model.start_date,
            status: model
                .status
                .and_then(|s| s.parse().ok())
                .unwrap_or(ApprovalStatus::Pending),
            rejection_reason: model.rejection_reason,
            host_club_id: model.host_club_id.map(ClubId),
            location: model.location,
            categories: model
                .categories
                .map(|s| {
                    s.split(',')
                        .filter_map(|c| c.trim().parse().ok())
                        .collect()
                })
                .unwrap_or_default(),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
