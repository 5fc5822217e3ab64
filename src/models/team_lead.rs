use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Team Lead")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// One lead per team.
    #[sea_orm(unique)]
    pub team_id: i32,
    pub leader: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(has_many = "super::team_lead_topic::Entity")]
    TeamLeadTopic,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

/// Topics in `topic_access`.
impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_lead_topic::Relation::Topic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_lead_topic::Relation::TeamLead.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
