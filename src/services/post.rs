use crate::{
    error::{AppError, AppResult},
    models::{
        post::{self, CONTENT_MAX_LENGTH, FILE_MAX_LENGTH},
        Post, PostModel, Topic, DESC_MAX_LENGTH, NAME_MAX_LENGTH,
    },
};
use sea_orm::{
    prelude::DateTime, sea_query::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewPost {
    pub topic_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub name: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub description: String,
    #[validate(length(max = CONTENT_MAX_LENGTH))]
    pub content: String,
    #[validate(length(max = FILE_MAX_LENGTH))]
    pub file: String,
    /// Defaults to now.
    pub date_added: Option<DateTime>,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdatePost {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub name: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub description: String,
    #[validate(length(max = CONTENT_MAX_LENGTH))]
    pub content: String,
    #[validate(length(max = FILE_MAX_LENGTH))]
    pub file: String,
}

pub struct PostService {
    db: DatabaseConnection,
}

impl PostService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest first. `page` is 1-based.
    pub async fn list_by_topic(
        &self,
        topic_id: i32,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<PostModel>, u64)> {
        let paginator = Post::find()
            .filter(post::Column::TopicId.eq(topic_id))
            .order_by_desc(post::Column::DateAdded)
            .order_by_desc(post::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let posts = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((posts, total))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<PostModel> {
        Post::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, input: NewPost) -> AppResult<PostModel> {
        input.validate()?;
        Topic::find_by_id(input.topic_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let date_added = input
            .date_added
            .unwrap_or_else(|| chrono::Utc::now().naive_utc());

        let new_post = post::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            content: Set(input.content),
            file: Set(input.file),
            viewership: Set(0),
            topic_has: Set(0),
            date_added: Set(date_added),
            topic_id: Set(input.topic_id),
            ..Default::default()
        };

        let post = new_post
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "post"))?;
        tracing::info!("Created post {} in topic {}", post.id, post.topic_id);
        Ok(post)
    }

    pub async fn update(&self, id: i32, input: UpdatePost) -> AppResult<PostModel> {
        input.validate()?;
        let existing = self.get_by_id(id).await?;

        let mut active: post::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.content = Set(input.content);
        active.file = Set(input.file);

        let updated = active.update(&self.db).await?;
        tracing::debug!("Updated post {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Post::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!("Deleted post {id}");
        Ok(())
    }

    pub async fn increment_viewership(&self, id: i32) -> AppResult<()> {
        let result = Post::update_many()
            .col_expr(
                post::Column::Viewership,
                Expr::col(post::Column::Viewership).add(1),
            )
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
