use crate::{
    error::{AppError, AppResult},
    models::{topic, Category, Topic, TopicModel, DESC_MAX_LENGTH, NAME_MAX_LENGTH},
};
use sea_orm::{
    prelude::DateTime, ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewTopic {
    pub category_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub name: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub description: String,
    /// Defaults to now.
    pub date_added: Option<DateTime>,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateTopic {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub name: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub description: String,
}

pub struct TopicService {
    db: DatabaseConnection,
}

impl TopicService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<TopicModel>> {
        let topics = Topic::find()
            .filter(topic::Column::CategoryId.eq(category_id))
            .order_by_desc(topic::Column::DateAdded)
            .all(&self.db)
            .await?;
        Ok(topics)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TopicModel> {
        Topic::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_by_slug(&self, slug: &str) -> AppResult<TopicModel> {
        Topic::find()
            .filter(topic::Column::Slug.eq(slug))
            .order_by_asc(topic::Column::Id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, input: NewTopic) -> AppResult<TopicModel> {
        input.validate()?;
        Category::find_by_id(input.category_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        self.ensure_name_free(&input.name, None).await?;

        let date_added = input
            .date_added
            .unwrap_or_else(|| chrono::Utc::now().naive_utc());

        let new_topic = topic::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            category_has: Set(0),
            date_added: Set(date_added),
            category_id: Set(input.category_id),
            ..Default::default()
        };

        let topic = new_topic
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "topic"))?;
        tracing::info!(
            "Created topic {} ({}) in category {}",
            topic.id,
            topic.slug,
            topic.category_id
        );
        Ok(topic)
    }

    pub async fn update(&self, id: i32, input: UpdateTopic) -> AppResult<TopicModel> {
        input.validate()?;
        let existing = self.get_by_id(id).await?;
        self.ensure_name_free(&input.name, Some(id)).await?;

        let mut active: topic::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "topic"))?;
        tracing::debug!("Updated topic {} ({})", updated.id, updated.slug);
        Ok(updated)
    }

    /// Cascades to the topic's posts and any team-lead access grants.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Topic::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!("Deleted topic {id}");
        Ok(())
    }

    async fn ensure_name_free(&self, name: &str, except: Option<i32>) -> AppResult<()> {
        let mut query = Topic::find().filter(topic::Column::Name.eq(name));
        if let Some(id) = except {
            query = query.filter(topic::Column::Id.ne(id));
        }
        if query.one(&self.db).await?.is_some() {
            tracing::warn!("Rejected duplicate topic name {name:?}");
            return Err(AppError::Conflict(format!(
                "topic named {name:?} already exists"
            )));
        }
        Ok(())
    }
}
