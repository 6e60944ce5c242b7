pub use super::event::Entity as Event;
pub use super::event_group::Entity as EventGroup;
pub use super::event_user::Entity as EventUser;
pub use super::group::Entity as Group;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
