mod common;

use formula::services::{NewTeam, TeamService, TopicService, UserService};
use formula::AppError;

fn new_team(name: &str) -> NewTeam {
    NewTeam {
        name: name.to_string(),
        description: "race team".to_string(),
    }
}

#[tokio::test]
async fn team_display_is_name() {
    let db = common::setup_db().await;
    let team = TeamService::new(db.clone())
        .create(new_team("Powertrain"))
        .await
        .unwrap();
    assert_eq!(team.to_string(), "Powertrain");
}

#[tokio::test]
async fn members_can_join_and_leave() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let team = service.create(new_team("Chassis")).await.unwrap();
    let alice = common::create_user(&db, "Alice").await;
    let bob = common::create_user(&db, "Bob").await;

    service.add_member(team.id, alice.id).await.unwrap();
    service.add_member(team.id, bob.id).await.unwrap();
    let again = service.add_member(team.id, alice.id).await.unwrap();
    assert_eq!(again.user_id, alice.id);

    let members: Vec<i32> = service
        .list_members(team.id)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(members, vec![alice.id, bob.id]);

    service.remove_member(team.id, alice.id).await.unwrap();
    assert_eq!(service.list_members(team.id).await.unwrap().len(), 1);
    assert!(matches!(
        service.remove_member(team.id, alice.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn member_requires_existing_user_and_team() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let team = service.create(new_team("Chassis")).await.unwrap();
    let user = common::create_user(&db, "Alice").await;

    assert!(matches!(
        service.add_member(team.id, user.id + 50).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.add_member(team.id + 50, user.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn second_lead_for_team_is_rejected() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let team = service.create(new_team("Aero")).await.unwrap();
    let first = common::create_user(&db, "Alice").await;
    let second = common::create_user(&db, "Bob").await;

    let lead = service.assign_lead(team.id, first.id, true).await.unwrap();
    assert!(lead.leader);

    let result = service.assign_lead(team.id, second.id, false).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        service.get_lead(team.id).await.unwrap().map(|l| l.user_id),
        Some(first.id)
    );
}

#[tokio::test]
async fn one_user_may_lead_several_teams() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let aero = service.create(new_team("Aero")).await.unwrap();
    let brakes = service.create(new_team("Brakes")).await.unwrap();
    let user = common::create_user(&db, "Alice").await;

    service.assign_lead(aero.id, user.id, false).await.unwrap();
    service.assign_lead(brakes.id, user.id, false).await.unwrap();
}

#[tokio::test]
async fn topic_access_grant_and_revoke() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let team = service.create(new_team("Electrical")).await.unwrap();
    let user = common::create_user(&db, "Alice").await;
    let lead = service.assign_lead(team.id, user.id, true).await.unwrap();
    let category = common::create_category(&db, "Electric").await;
    let wiring = common::create_topic(&db, category.id, "Wiring").await;
    let battery = common::create_topic(&db, category.id, "Battery").await;

    service.grant_topic_access(lead.id, wiring.id).await.unwrap();
    service.grant_topic_access(lead.id, battery.id).await.unwrap();
    service.grant_topic_access(lead.id, wiring.id).await.unwrap();

    let names: Vec<String> = service
        .accessible_topics(lead.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Battery", "Wiring"]);

    service.revoke_topic_access(lead.id, battery.id).await.unwrap();
    assert_eq!(service.accessible_topics(lead.id).await.unwrap().len(), 1);

    TopicService::new(db.clone()).delete(wiring.id).await.unwrap();
    assert!(service.accessible_topics(lead.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_user_cascades_to_lead_and_membership() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let team = service.create(new_team("Aero")).await.unwrap();
    let user = common::create_user(&db, "Alice").await;
    service.add_member(team.id, user.id).await.unwrap();
    service.assign_lead(team.id, user.id, true).await.unwrap();

    UserService::new(db.clone()).delete(user.id).await.unwrap();

    assert!(service.get_lead(team.id).await.unwrap().is_none());
    assert!(service.list_members(team.id).await.unwrap().is_empty());
    assert!(service.get_by_id(team.id).await.is_ok());
}

#[tokio::test]
async fn deleting_team_cascades_to_lead_and_members() {
    let db = common::setup_db().await;
    let service = TeamService::new(db.clone());
    let team = service.create(new_team("Aero")).await.unwrap();
    let user = common::create_user(&db, "Alice").await;
    service.add_member(team.id, user.id).await.unwrap();
    let lead = service.assign_lead(team.id, user.id, true).await.unwrap();

    service.delete(team.id).await.unwrap();

    assert!(service.get_lead(team.id).await.unwrap().is_none());
    assert!(service.list_members(team.id).await.unwrap().is_empty());
    assert!(matches!(
        service.accessible_topics(lead.id).await,
        Err(AppError::NotFound)
    ));
    assert!(UserService::new(db.clone()).get_by_id(user.id).await.is_ok());
}
