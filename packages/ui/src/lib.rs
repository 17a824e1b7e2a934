//! This crate contains all shared UI for the portfolio site.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod views;

pub const MAIN_THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod site;
pub use site::{use_site_config, SiteProvider};

mod viewport;
pub use viewport::{use_viewport, Viewport, ViewportProvider};

mod timer;
pub use timer::sleep;

pub mod nav;
pub use nav::NavController;

mod navbar;
pub use navbar::{AdminNavbar, NavItem};

mod sidebar;
pub use sidebar::{AdminSidebar, HamburgerIcon};

mod header;
pub use header::PageHeader;

mod skill_card;
pub use skill_card::SkillCard;

mod contact_form;
pub use contact_form::ContactFormView;
