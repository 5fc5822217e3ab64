use crate::{
    error::{AppError, AppResult},
    models::{category, Category, CategoryModel, Parent, DESC_MAX_LENGTH, NAME_MAX_LENGTH},
};
use sea_orm::{
    prelude::DateTime, ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub name: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub description: String,
    pub date_added: Option<DateTime>,
    pub parent: Parent,
}

pub struct CategoryService {
    db: DatabaseConnection,
}

impl CategoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<CategoryModel>> {
        let categories = Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<CategoryModel> {
        Category::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Slugs are not unique; the lowest id wins.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<CategoryModel> {
        Category::find()
            .filter(category::Column::Slug.eq(slug))
            .order_by_asc(category::Column::Id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, input: NewCategory) -> AppResult<CategoryModel> {
        input.validate()?;
        self.ensure_name_free(&input.name, None).await?;

        let new_category = category::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            forum_has: Set(0),
            date_added: Set(input.date_added),
            parent: Set(input.parent),
            ..Default::default()
        };

        let category = new_category
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "category"))?;
        tracing::info!("Created category {} ({})", category.id, category.slug);
        Ok(category)
    }

    /// Replace the editable fields; the slug is rederived from the new name.
    pub async fn update(&self, id: i32, input: NewCategory) -> AppResult<CategoryModel> {
        input.validate()?;
        let existing = self.get_by_id(id).await?;
        self.ensure_name_free(&input.name, Some(id)).await?;

        let mut active: category::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.date_added = Set(input.date_added);
        active.parent = Set(input.parent);

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "category"))?;
        tracing::debug!("Updated category {} ({})", updated.id, updated.slug);
        Ok(updated)
    }

    /// Deleting a category cascades to its topics and their posts.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Category::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!("Deleted category {id}");
        Ok(())
    }

    async fn ensure_name_free(&self, name: &str, except: Option<i32>) -> AppResult<()> {
        let mut query = Category::find().filter(category::Column::Name.eq(name));
        if let Some(id) = except {
            query = query.filter(category::Column::Id.ne(id));
        }
        if query.one(&self.db).await?.is_some() {
            tracing::warn!("Rejected duplicate category name {name:?}");
            return Err(AppError::Conflict(format!(
                "category named {name:?} already exists"
            )));
        }
        Ok(())
    }
}
