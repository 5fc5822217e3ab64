use super::{Named, Slugged};
use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level grouping a category belongs to. Stored as its two-letter code.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(64))")]
pub enum Parent {
    #[default]
    #[sea_orm(string_value = "GE")]
    General,
    #[sea_orm(string_value = "OP")]
    Operations,
    #[sea_orm(string_value = "EV")]
    ElectricVehicle,
}

impl Parent {
    pub const ALL: [Parent; 3] = [Parent::General, Parent::Operations, Parent::ElectricVehicle];

    pub fn code(self) -> &'static str {
        match self {
            Parent::General => "GE",
            Parent::Operations => "OP",
            Parent::ElectricVehicle => "EV",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parent::General => "General",
            Parent::Operations => "Operations",
            Parent::ElectricVehicle => "Electric Vehicle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub forum_has: i32,
    pub date_added: Option<DateTime>,
    pub parent: Parent,
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::topic::Entity")]
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
