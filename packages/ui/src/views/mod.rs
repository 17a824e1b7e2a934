mod about;
pub use about::AboutView;

mod contact;
pub use contact::ContactView;

mod skills;
pub use skills::SkillsView;

mod not_found;
pub use not_found::NotFoundView;
