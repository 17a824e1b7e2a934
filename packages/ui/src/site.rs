//! Site-wide configuration context.

use content::PortfolioConfig;
use dioxus::prelude::*;

/// Provider component that makes the [`PortfolioConfig`] available to every page.
///
/// Incomplete relay credentials are reported once, when the config is built.
#[component]
pub fn SiteProvider(config: PortfolioConfig, children: Element) -> Element {
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Get the site configuration.
pub fn use_site_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}
