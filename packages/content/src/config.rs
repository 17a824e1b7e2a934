//! # Site-level configuration — `portfolio.toml`
//!
//! Defines the TOML configuration that tunes the interactive parts of the site.
//! The site ships `data/portfolio.toml`, compiled in with `include_str!`; an
//! empty file is equivalent to [`PortfolioConfig::default`]. Relay credentials
//! set in the build environment take precedence over the file.
//!
//! ## Structure
//!
//! ```toml
//! [relay]
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! service_id = "service_xxx"
//! template_id = "template_xxx"
//! public_key = "pk_xxx"
//!
//! [status]
//! clear_after_ms = 5000   # how long a send status stays on screen
//!
//! [nav]
//! breakpoint = 1024       # viewport width at which the nav panel auto-closes
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortfolioConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`RelayConfig`] | Credentials for the email relay. Can also be resolved from build-time env vars. |
//! | [`StatusConfig`] | Auto-clear delay for the contact status line, default **5000 ms**. |
//! | [`NavConfig`] | Breakpoint for the responsive nav panel, default **1024 px**. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default relay endpoint (EmailJS REST API).
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The shipped `portfolio.toml`.
const SHIPPED_CONFIG: &str = include_str!("../data/portfolio.toml");

/// Errors raised while building a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid portfolio.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub nav: NavConfig,
}

/// Credentials and endpoint for the message relay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

fn default_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Builder method to point the relay at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Resolve credentials from the environment the crate was compiled in.
    ///
    /// The values are baked into the binary, so a browser build needs them set
    /// when `dx build` runs, not when the page loads.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let service_id = option_env!("PORTFOLIO_EMAIL_SERVICE_ID")
            .ok_or(ConfigError::Missing("PORTFOLIO_EMAIL_SERVICE_ID"))?;
        let template_id = option_env!("PORTFOLIO_EMAIL_TEMPLATE_ID")
            .ok_or(ConfigError::Missing("PORTFOLIO_EMAIL_TEMPLATE_ID"))?;
        let public_key = option_env!("PORTFOLIO_EMAIL_PUBLIC_KEY")
            .ok_or(ConfigError::Missing("PORTFOLIO_EMAIL_PUBLIC_KEY"))?;

        Ok(Self::new(service_id, template_id, public_key))
    }

    /// True when every credential is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.service_id.is_empty()
            && !self.template_id.is_empty()
            && !self.public_key.is_empty()
    }
}

/// Status line configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Milliseconds a send status stays visible before it is cleared.
    #[serde(default = "default_clear_after_ms")]
    pub clear_after_ms: u64,
}

fn default_clear_after_ms() -> u64 {
    5000
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            clear_after_ms: default_clear_after_ms(),
        }
    }
}

impl StatusConfig {
    pub fn clear_after(&self) -> Duration {
        Duration::from_millis(self.clear_after_ms)
    }
}

/// Responsive navigation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Viewport width (logical pixels) at or above which the nav panel is force-closed.
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u32,
}

fn default_breakpoint() -> u32 {
    1024
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint: default_breakpoint(),
        }
    }
}

impl PortfolioConfig {
    /// Config with the given relay credentials and default timings.
    pub fn new(relay: RelayConfig) -> Self {
        Self {
            relay,
            ..Self::default()
        }
    }

    /// Builder method to set the status auto-clear delay.
    pub fn with_clear_after_ms(mut self, ms: u64) -> Self {
        self.status.clear_after_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// The shipped `portfolio.toml`, with relay credentials taken from the
    /// build environment.
    ///
    /// An unparseable file falls back to the defaults. Missing credentials
    /// leave whatever the file provides; callers check
    /// [`RelayConfig::is_complete`] before relying on the relay.
    pub fn from_build_env() -> Self {
        let config = Self::from_toml(SHIPPED_CONFIG).unwrap_or_else(|e| {
            tracing::error!("Ignoring {}: {e}", Self::filename());
            Self::default()
        });
        config.with_relay_env(RelayConfig::from_build_env())
    }

    /// Overlay build-time credentials on the file's relay section.
    ///
    /// The endpoint always comes from the file.
    fn with_relay_env(mut self, credentials: Result<RelayConfig, ConfigError>) -> Self {
        match credentials {
            Ok(relay) => self.relay = relay.with_endpoint(self.relay.endpoint),
            Err(e) if !self.relay.is_complete() => {
                tracing::warn!("Relay credentials unavailable: {e}");
            }
            Err(_) => {}
        }
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
