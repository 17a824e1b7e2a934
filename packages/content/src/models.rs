//! # Content models for the portfolio pages
//!
//! These types are read from the site content document (TOML) by
//! [`crate::loader`] and handed to the rendering layer unchanged.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`SkillRecord`] | One card on the Skills page. `id` is the stable list key. |
//! | [`Profile`] | The owner's details shown on the About page. |
//! | [`ContactChannels`] | Phone, email, WhatsApp and location shown on the Contact page. |
//! | [`SiteContent`] | The whole document: one profile and the ordered skill list. |

use serde::{Deserialize, Serialize};

/// A single skill shown on the Skills page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Unique, stable key: "rust"
    pub id: String,
    /// Display title: "Rust"
    pub title: String,
    /// Icon name resolved by the UI: "rust", "react", ...
    #[serde(default)]
    pub icon: String,
    /// Self-assessed proficiency, 0 to 100.
    #[serde(default)]
    pub proficiency: u8,
    /// Short markdown description.
    #[serde(default)]
    pub description: String,
}

/// Personal details for the About page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub freelance: bool,
    /// Link target for the "Download resume" button.
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub contact: ContactChannels,
}

/// Ways to reach the site owner outside the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactChannels {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// International number without separators, used in the `wa.me` link.
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub location: String,
}

impl ContactChannels {
    /// `tel:` link with the display separators stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn whatsapp_href(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }
}

impl Profile {
    /// Comma-separated language list: "English, Persian"
    pub fn languages_label(&self) -> String {
        self.languages.join(", ")
    }

    pub fn freelance_label(&self) -> &'static str {
        if self.freelance {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

/// The full content document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub profile: Profile,
    /// Skills in source order.
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}
