use super::{Named, Slugged};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub category_has: i32,
    pub date_added: DateTime,
    pub slug: String,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::team_lead_topic::Entity")]
    TeamLeadTopic,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

/// Team leads granted access to this topic.
impl Related<super::team_lead::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_lead_topic::Relation::TeamLead.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_lead_topic::Relation::Topic.def().rev())
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

impl Slugged for ActiveModel {
    fn name_value(&self) -> &ActiveValue<String> {
        &self.name
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = ActiveValue::Set(slug);
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.refresh_slug();
        Ok(self)
    }
}
