use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Name,
    Description,
    Content,
    File,
    Viewership,
    TopicHas,
    DateAdded,
    TopicId,
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
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Posts::Description).string_len(512).not_null())
                    .col(ColumnDef::new(Posts::Content).string_len(8192).not_null())
                    .col(ColumnDef::new(Posts::File).string_len(512).not_null())
                    .col(
                        ColumnDef::new(Posts::Viewership)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Posts::TopicHas)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Posts::DateAdded).timestamp().not_null())
                    .col(ColumnDef::new(Posts::TopicId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_topic_id")
                            .from(Posts::Table, Posts::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_topic_id")
                    .table(Posts::Table)
                    .col(Posts::TopicId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}
