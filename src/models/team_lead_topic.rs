use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join rows backing `TeamLead.topic_access`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Team Lead_topic_access")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_lead_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_lead::Entity",
        from = "Column::TeamLeadId",
        to = "super::team_lead::Column::Id",
        on_delete = "Cascade"
    )]
    TeamLead,
    #[sea_orm(
        belongs_to = "super::topic::Entity",
        from = "Column::TopicId",
        to = "super::topic::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<super::team_lead::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamLead.def()
    }
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
