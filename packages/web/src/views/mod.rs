mod about;
pub use about::About;

mod skills;
pub use skills::Skills;

mod contact;
pub use contact::Contact;

mod admin_layout;
pub use admin_layout::AdminLayout;

mod not_found;
pub use not_found::NotFound;
