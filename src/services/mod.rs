pub mod category;
pub mod post;
pub mod team;
pub mod topic;
pub mod user;

pub use category::{CategoryService, NewCategory};
pub use post::{NewPost, PostService, UpdatePost};
pub use team::{NewTeam, TeamService};
pub use topic::{NewTopic, TopicService, UpdateTopic};
pub use user::{NewUser, UpdateProfile, UserService};
