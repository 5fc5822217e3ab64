use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TeamLead {
    #[sea_orm(iden = "Team Lead")]
    Table,
    Id,
    UserId,
    TeamId,
    Leader,
}

#[derive(DeriveIden)]
enum TopicAccess {
    #[sea_orm(iden = "Team Lead_topic_access")]
    Table,
    TeamLeadId,
    TopicId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamLead::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamLead::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeamLead::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(TeamLead::TeamId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeamLead::Leader)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_lead_user_id")
                            .from(TeamLead::Table, TeamLead::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_lead_team_id")
                            .from(TeamLead::Table, TeamLead::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_lead_user_id")
                    .table(TeamLead::Table)
                    .col(TeamLead::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TopicAccess::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TopicAccess::TeamLeadId).integer().not_null())
                    .col(ColumnDef::new(TopicAccess::TopicId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TopicAccess::TeamLeadId)
                            .col(TopicAccess::TopicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_access_team_lead_id")
                            .from(TopicAccess::Table, TopicAccess::TeamLeadId)
                            .to(TeamLead::Table, TeamLead::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_access_topic_id")
                            .from(TopicAccess::Table, TopicAccess::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_topic_access_topic_id")
                    .table(TopicAccess::Table)
                    .col(TopicAccess::TopicId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TopicAccess::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeamLead::Table).to_owned())
            .await
    }
}
