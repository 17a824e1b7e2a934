use dioxus::prelude::*;

use crate::icons::{FaBars, FaUserShield, FaXmark};
use crate::navbar::{AdminNavbar, NavItem};
use crate::nav::NavController;
use crate::viewport::use_viewport;
use crate::{use_site_config, Icon};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Admin navigation shell: avatar, collapsible link panel and hamburger.
///
/// The panel is inline on wide viewports. On narrow ones it is hidden unless
/// opened with the hamburger, and it force-closes when the viewport widens
/// past the configured breakpoint.
#[component]
pub fn AdminSidebar(active: Option<NavItem>, on_navigate: EventHandler<NavItem>) -> Element {
    let config = use_site_config();
    let viewport = use_viewport();
    let mut nav = use_signal(move || NavController::new(config.nav.breakpoint));

    // Subscribes to the viewport only; same-width updates are dropped by the controller.
    use_effect(move || {
        let width = viewport().width;
        if nav.write().observe_width(width) {
            tracing::debug!("Nav panel closed at width {width}");
        }
    });

    let is_open = nav.read().is_open();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "admin-sidebar",

            div {
                class: "admin-sidebar-user",
                span {
                    class: "admin-sidebar-avatar",
                    Icon { icon: FaUserShield, width: 32, height: 32 }
                }
                h3 { class: "admin-sidebar-title", "Admin" }
            }

            div {
                class: if is_open { "admin-sidebar-panel open" } else { "admin-sidebar-panel" },
                AdminNavbar {
                    active: active,
                    on_navigate: on_navigate,
                    on_close: move |_| nav.write().close(),
                }
            }

            div {
                class: "admin-sidebar-toggle",
                HamburgerIcon {
                    is_open: is_open,
                    on_toggle: move |_| {
                        nav.write().toggle();
                    },
                }
            }
        }
    }
}

/// Button switching between a hamburger and a close icon.
#[component]
pub fn HamburgerIcon(is_open: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "hamburger",
            "aria-label": if is_open { "Close navigation" } else { "Open navigation" },
            "aria-expanded": "{is_open}",
            onclick: move |_| on_toggle.call(()),
            if is_open {
                Icon { icon: FaXmark, width: 24, height: 24 }
            } else {
                Icon { icon: FaBars, width: 24, height: 24 }
            }
        }
    }
}
