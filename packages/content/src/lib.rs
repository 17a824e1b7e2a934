//! # Content crate — site content and configuration for the portfolio
//!
//! Everything the pages render that is not markup lives here: the profile shown
//! on the About and Contact pages, the skill records shown on the Skills page,
//! and the site-wide [`PortfolioConfig`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `portfolio.toml` configuration: relay credentials, status delay, nav breakpoint |
//! | [`models`] | [`SkillRecord`], [`Profile`] and the [`SiteContent`] document they are read from |
//! | [`source`] | The [`ContentSource`] trait and the build-time [`EmbeddedSource`] |
//! | [`loader`] | [`load_skills`] / [`load_profile`] and the [`LoadError`] they fail with |

pub mod config;
pub mod loader;
pub mod models;
pub mod source;

mod memory;
pub use memory::MemorySource;

#[cfg(not(target_arch = "wasm32"))]
mod file_source;
#[cfg(not(target_arch = "wasm32"))]
pub use file_source::FileSource;

pub use config::{ConfigError, NavConfig, PortfolioConfig, RelayConfig, StatusConfig};
pub use loader::{load_content, load_profile, load_skills, LoadError};
pub use models::{ContactChannels, Profile, SiteContent, SkillRecord};
pub use source::{ContentSource, EmbeddedSource};
