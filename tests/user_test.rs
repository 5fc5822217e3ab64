mod common;

use formula::services::{NewUser, UpdateProfile, UserService};
use formula::models::DESC_MAX_LENGTH;
use formula::AppError;

fn new_user(student_id: i32) -> NewUser {
    NewUser {
        student_id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        picture: "ada.png".to_string(),
        bio: "Engines".to_string(),
    }
}

#[tokio::test]
async fn create_user_defaults_to_non_admin() {
    let db = common::setup_db().await;
    let user = UserService::new(db.clone())
        .create(new_user(2024001))
        .await
        .unwrap();

    assert!(!user.admin);
    assert_eq!(user.student_id, 2024001);
    assert_eq!(user.to_string(), "Ada Lovelace");
}

#[tokio::test]
async fn duplicate_student_id_is_rejected() {
    let db = common::setup_db().await;
    let service = UserService::new(db.clone());
    service.create(new_user(2024002)).await.unwrap();

    let result = service.create(new_user(2024002)).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn lookup_by_student_id() {
    let db = common::setup_db().await;
    let service = UserService::new(db.clone());
    let user = service.create(new_user(2024003)).await.unwrap();

    assert_eq!(service.get_by_student_id(2024003).await.unwrap().id, user.id);
    assert!(matches!(
        service.get_by_student_id(1).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn update_profile_only_touches_given_fields() {
    let db = common::setup_db().await;
    let service = UserService::new(db.clone());
    let user = service.create(new_user(2024004)).await.unwrap();

    let updated = service
        .update_profile(
            user.id,
            UpdateProfile {
                first_name: None,
                last_name: None,
                picture: None,
                bio: Some("Analytical engines".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.bio, "Analytical engines");
    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.picture, "ada.png");
}

#[tokio::test]
async fn bio_over_limit_is_rejected() {
    let db = common::setup_db().await;
    let mut input = new_user(2024005);
    input.bio = "b".repeat(DESC_MAX_LENGTH as usize + 1);

    let result = UserService::new(db.clone()).create(input).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn set_admin_toggles_flag() {
    let db = common::setup_db().await;
    let service = UserService::new(db.clone());
    let user = service.create(new_user(2024006)).await.unwrap();

    assert!(service.set_admin(user.id, true).await.unwrap().admin);
    assert!(!service.set_admin(user.id, false).await.unwrap().admin);
}
