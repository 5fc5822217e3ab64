use super::Named;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONTENT_MAX_LENGTH: u64 = 8192;
pub const FILE_MAX_LENGTH: u64 = 512;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub content: String,
    pub file: String,
    pub viewership: i32,
    pub topic_has: i32,
    pub date_added: DateTime,
    pub topic_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topic::Entity",
        from = "Column::TopicId",
        to = "super::topic::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl Named for Model {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ActiveModelBehavior for ActiveModel {}
