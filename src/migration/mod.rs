use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_categories_table;
mod m20250301_000003_create_topics_table;
mod m20250301_000004_create_posts_table;
mod m20250301_000005_create_teams_table;
mod m20250301_000006_create_team_lead_table;
mod m20250301_000007_create_team_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_categories_table::Migration),
            Box::new(m20250301_000003_create_topics_table::Migration),
            Box::new(m20250301_000004_create_posts_table::Migration),
            Box::new(m20250301_000005_create_teams_table::Migration),
            Box::new(m20250301_000006_create_team_lead_table::Migration),
            Box::new(m20250301_000007_create_team_member_table::Migration),
        ]
    }
}
