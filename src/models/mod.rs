pub mod category;
pub mod post;
pub mod team;
pub mod team_lead;
pub mod team_lead_topic;
pub mod team_member;
pub mod topic;
pub mod user;

pub use category::{Entity as Category, Model as CategoryModel, Parent};
pub use post::{Entity as Post, Model as PostModel};
pub use team::{Entity as Team, Model as TeamModel};
pub use team_lead::{Entity as TeamLead, Model as TeamLeadModel};
pub use team_lead_topic::Entity as TeamLeadTopic;
pub use team_member::{Entity as TeamMember, Model as TeamMemberModel};
pub use topic::{Entity as Topic, Model as TopicModel};
pub use user::{Entity as User, Model as UserModel};

use crate::utils::slugify;
use sea_orm::ActiveValue;

pub const NAME_MAX_LENGTH: u64 = 64;
pub const DESC_MAX_LENGTH: u64 = 512;

/// Records whose display string is their `name` column.
pub trait Named {
    fn name(&self) -> &str;
}

/// Active models that keep a `slug` column derived from `name`.
///
/// `refresh_slug` is called from `before_save`, so every insert and update
/// rewrites the slug from whatever name is about to be written.
pub trait Slugged {
    fn name_value(&self) -> &ActiveValue<String>;

    fn set_slug(&mut self, slug: String);

    fn refresh_slug(&mut self) {
        let slug = match self.name_value() {
            ActiveValue::Set(name) | ActiveValue::Unchanged(name) => Some(slugify(name)),
            // partial update without a name keeps the stored slug
            ActiveValue::NotSet => None,
        };
        if let Some(slug) = slug {
            self.set_slug(slug);
        }
    }
}
