use crate::{
    error::{AppError, AppResult},
    models::{
        team, team_lead, team_lead_topic, team_member, topic, Team, TeamLead, TeamLeadModel,
        TeamLeadTopic, TeamMember, TeamMemberModel, TeamModel, Topic, TopicModel, User, UserModel,
        DESC_MAX_LENGTH, NAME_MAX_LENGTH,
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewTeam {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub name: String,
    #[validate(length(max = DESC_MAX_LENGTH))]
    pub description: String,
}

/// Teams, their members, their single lead, and the lead's topic access.
pub struct TeamService {
    db: DatabaseConnection,
}

impl TeamService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewTeam) -> AppResult<TeamModel> {
        input.validate()?;

        let new_team = team::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            ..Default::default()
        };

        let team = new_team.insert(&self.db).await?;
        tracing::info!("Created team {} ({})", team.id, team.name);
        Ok(team)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TeamModel> {
        Team::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Cascades to the team's lead (and its topic access) and members.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Team::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!("Deleted team {id}");
        Ok(())
    }

    /// Adding an existing member returns the existing membership.
    pub async fn add_member(&self, team_id: i32, user_id: i32) -> AppResult<TeamMemberModel> {
        self.ensure_team_and_user(team_id, user_id).await?;

        let existing = TeamMember::find()
            .filter(team_member::Column::TeamId.eq(team_id))
            .filter(team_member::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        if let Some(member) = existing {
            return Ok(member);
        }

        let member = team_member::ActiveModel {
            user_id: Set(user_id),
            team_id: Set(team_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AppError::from_write(e, "team member"))?;
        tracing::info!("User {user_id} joined team {team_id}");
        Ok(member)
    }

    pub async fn remove_member(&self, team_id: i32, user_id: i32) -> AppResult<()> {
        let result = TeamMember::delete_many()
            .filter(team_member::Column::TeamId.eq(team_id))
            .filter(team_member::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!("User {user_id} left team {team_id}");
        Ok(())
    }

    pub async fn list_members(&self, team_id: i32) -> AppResult<Vec<UserModel>> {
        let users = User::find()
            .inner_join(TeamMember)
            .filter(team_member::Column::TeamId.eq(team_id))
            .order_by_asc(team_member::Column::Id)
            .all(&self.db)
            .await?;
        Ok(users)
    }

    /// A team has at most one lead; a second assignment is a conflict.
    pub async fn assign_lead(
        &self,
        team_id: i32,
        user_id: i32,
        leader: bool,
    ) -> AppResult<TeamLeadModel> {
        self.ensure_team_and_user(team_id, user_id).await?;

        if self.get_lead(team_id).await?.is_some() {
            tracing::warn!("Rejected second lead for team {team_id}");
            return Err(AppError::Conflict(format!(
                "team {team_id} already has a lead"
            )));
        }

        let lead = team_lead::ActiveModel {
            user_id: Set(user_id),
            team_id: Set(team_id),
            leader: Set(leader),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AppError::from_write(e, "team lead"))?;
        tracing::info!("User {user_id} now leads team {team_id}");
        Ok(lead)
    }

    pub async fn get_lead(&self, team_id: i32) -> AppResult<Option<TeamLeadModel>> {
        let lead = TeamLead::find()
            .filter(team_lead::Column::TeamId.eq(team_id))
            .one(&self.db)
            .await?;
        Ok(lead)
    }

    /// Granting access twice is a no-op.
    pub async fn grant_topic_access(&self, team_lead_id: i32, topic_id: i32) -> AppResult<()> {
        TeamLead::find_by_id(team_lead_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Topic::find_by_id(topic_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let granted = TeamLeadTopic::find_by_id((team_lead_id, topic_id))
            .one(&self.db)
            .await?;
        if granted.is_some() {
            return Ok(());
        }

        team_lead_topic::ActiveModel {
            team_lead_id: Set(team_lead_id),
            topic_id: Set(topic_id),
        }
        .insert(&self.db)
        .await
        .map_err(|e| AppError::from_write(e, "topic access"))?;
        tracing::debug!("Team lead {team_lead_id} granted topic {topic_id}");
        Ok(())
    }

    pub async fn revoke_topic_access(&self, team_lead_id: i32, topic_id: i32) -> AppResult<()> {
        let result = TeamLeadTopic::delete_by_id((team_lead_id, topic_id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::debug!("Team lead {team_lead_id} lost topic {topic_id}");
        Ok(())
    }

    pub async fn accessible_topics(&self, team_lead_id: i32) -> AppResult<Vec<TopicModel>> {
        let lead = TeamLead::find_by_id(team_lead_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        let topics = lead
            .find_related(Topic)
            .order_by_asc(topic::Column::Name)
            .all(&self.db)
            .await?;
        Ok(topics)
    }

    async fn ensure_team_and_user(&self, team_id: i32, user_id: i32) -> AppResult<()> {
        Team::find_by_id(team_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(())
    }
}
