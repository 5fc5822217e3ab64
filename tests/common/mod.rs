#![allow(dead_code)]

use formula::models::{CategoryModel, Parent, TopicModel, UserModel};
use formula::services::{CategoryService, NewCategory, NewTopic, NewUser, TopicService, UserService};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::atomic::{AtomicI32, Ordering};

static STUDENT_COUNTER: AtomicI32 = AtomicI32::new(1000);

/// Fresh in-memory SQLite database with every migration applied.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    formula::migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: format!("{name} description"),
        date_added: None,
        parent: Parent::General,
    }
}

pub fn new_topic(category_id: i32, name: &str) -> NewTopic {
    NewTopic {
        category_id,
        name: name.to_string(),
        description: format!("{name} description"),
        date_added: None,
    }
}

pub async fn create_category(db: &DatabaseConnection, name: &str) -> CategoryModel {
    CategoryService::new(db.clone())
        .create(new_category(name))
        .await
        .expect("Failed to create category")
}

pub async fn create_topic(db: &DatabaseConnection, category_id: i32, name: &str) -> TopicModel {
    TopicService::new(db.clone())
        .create(new_topic(category_id, name))
        .await
        .expect("Failed to create topic")
}

pub async fn create_user(db: &DatabaseConnection, first_name: &str) -> UserModel {
    let student_id = STUDENT_COUNTER.fetch_add(1, Ordering::SeqCst);
    UserService::new(db.clone())
        .create(NewUser {
            student_id,
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            picture: String::new(),
            bio: String::new(),
        })
        .await
        .expect("Failed to create user")
}
