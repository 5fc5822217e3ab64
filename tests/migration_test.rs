mod common;

use formula::models::{category, team, team_lead, team_member, user};
use formula::AppError;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbBackend, Statement,
};
use sea_orm_migration::{MigratorTrait, SchemaManager};

async fn insert_category(db: &DatabaseConnection, name: &str) -> Result<category::Model, AppError> {
    category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_write(e, "category"))
}

async fn insert_user(db: &DatabaseConnection, student_id: i32) -> Result<user::Model, AppError> {
    user::ActiveModel {
        student_id: Set(student_id),
        first_name: Set("Grace".to_string()),
        last_name: Set("Hopper".to_string()),
        picture: Set(String::new()),
        bio: Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_write(e, "user"))
}

async fn insert_team(db: &DatabaseConnection, name: &str) -> team::Model {
    team::ActiveModel {
        name: Set(name.to_string()),
        description: Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_lead(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<team_lead::Model, AppError> {
    team_lead::ActiveModel {
        user_id: Set(user_id),
        team_id: Set(team_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_write(e, "team lead"))
}

#[tokio::test]
async fn migrations_create_every_table() {
    let db = common::setup_db().await;
    let manager = SchemaManager::new(&db);

    for table in [
        "users",
        "categories",
        "topics",
        "posts",
        "teams",
        "Team Lead",
        "Team Lead_topic_access",
        "Team Member",
    ] {
        assert!(
            manager.has_table(table).await.unwrap(),
            "missing table {table}"
        );
    }
}

#[tokio::test]
async fn column_defaults_apply_to_raw_inserts() {
    let db = common::setup_db().await;

    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "INSERT INTO categories (name, description, slug) VALUES ('Raw', '', 'raw')",
    ))
    .await
    .unwrap();

    let row = db
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT forum_has, parent FROM categories WHERE name = 'Raw'",
        ))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.try_get::<i32>("", "forum_has").unwrap(), 0);
    assert_eq!(row.try_get::<String>("", "parent").unwrap(), "GE");
}

#[tokio::test]
async fn down_drops_all_tables() {
    let db = common::setup_db().await;
    formula::migration::Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("categories").await.unwrap());
    assert!(!manager.has_table("Team Member").await.unwrap());
}

#[tokio::test]
async fn storage_rejects_duplicate_category_name() {
    let db = common::setup_db().await;
    let first = insert_category(&db, "Telemetry").await.unwrap();
    assert_eq!(first.slug, "telemetry");

    let result = insert_category(&db, "Telemetry").await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn storage_rejects_duplicate_student_id() {
    let db = common::setup_db().await;
    insert_user(&db, 7001).await.unwrap();

    let result = insert_user(&db, 7001).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn storage_rejects_second_lead_for_team() {
    let db = common::setup_db().await;
    let team = insert_team(&db, "Aero").await;
    let first = insert_user(&db, 7101).await.unwrap();
    let second = insert_user(&db, 7102).await.unwrap();
    insert_lead(&db, team.id, first.id).await.unwrap();

    let result = insert_lead(&db, team.id, second.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn storage_rejects_orphan_reference() {
    let db = common::setup_db().await;

    let result = team_member::ActiveModel {
        user_id: Set(999),
        team_id: Set(999),
        ..Default::default()
    }
    .insert(&db)
    .await
    .map_err(|e| AppError::from_write(e, "team member"));
    assert!(matches!(result, Err(AppError::NotFound)));
}
