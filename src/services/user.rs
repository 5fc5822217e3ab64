use crate::{
    error::{AppError, AppResult},
    models::{user, User, UserModel, DESC_MAX_LENGTH, NAME_MAX_LENGTH},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    pub student_id: i32,
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub first_name: String,
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub last_name: String,
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub picture: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub bio: String,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateProfile {
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub first_name: Option<String>,
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub last_name: Option<String>,
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub picture: Option<String>,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub bio: Option<String>,
}

pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<UserModel> {
        User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_by_student_id(&self, student_id: i32) -> AppResult<UserModel> {
        User::find()
            .filter(user::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, input: NewUser) -> AppResult<UserModel> {
        input.validate()?;

        let taken = User::find()
            .filter(user::Column::StudentId.eq(input.student_id))
            .one(&self.db)
            .await?;
        if taken.is_some() {
            tracing::warn!("Rejected duplicate student id {}", input.student_id);
            return Err(AppError::Conflict(format!(
                "student id {} already registered",
                input.student_id
            )));
        }

        let new_user = user::ActiveModel {
            student_id: Set(input.student_id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            picture: Set(input.picture),
            bio: Set(input.bio),
            admin: Set(false),
            ..Default::default()
        };

        let user = new_user
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "user"))?;
        tracing::info!("Created user {} (student {})", user.id, user.student_id);
        Ok(user)
    }

    pub async fn update_profile(&self, id: i32, input: UpdateProfile) -> AppResult<UserModel> {
        input.validate()?;
        let existing = self.get_by_id(id).await?;

        let mut active: user::ActiveModel = existing.clone().into();
        if let Some(first_name) = input.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(picture) = input.picture {
            active.picture = Set(picture);
        }
        if let Some(bio) = input.bio {
            active.bio = Set(bio);
        }

        if !active.is_changed() {
            return Ok(existing);
        }

        let updated = active.update(&self.db).await?;
        tracing::debug!("Updated profile for user {}", updated.id);
        Ok(updated)
    }

    pub async fn set_admin(&self, id: i32, admin: bool) -> AppResult<UserModel> {
        let existing = self.get_by_id(id).await?;
        let mut active: user::ActiveModel = existing.into();
        active.admin = Set(admin);
        let updated = active.update(&self.db).await?;
        tracing::info!("User {} admin flag set to {}", updated.id, admin);
        Ok(updated)
    }

    /// Cascades to the user's team-lead and team-member records.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = User::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!("Deleted user {id}");
        Ok(())
    }
}
