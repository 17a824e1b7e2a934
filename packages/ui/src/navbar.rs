use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCode, FaEnvelope, FaUser};

/// A destination in the admin navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    About,
    Skills,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::About, NavItem::Skills, NavItem::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::About => "About",
            NavItem::Skills => "Skills",
            NavItem::Contact => "Contact",
        }
    }
}

/// Vertical list of nav links. Following a link also calls `on_close`.
#[component]
pub fn AdminNavbar(
    active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        nav {
            class: "admin-navbar",
            for item in NavItem::ALL {
                button {
                    key: "{item.label()}",
                    class: if active == Some(item) { "admin-navbar-item active" } else { "admin-navbar-item" },
                    onclick: move |_| {
                        on_close.call(());
                        on_navigate.call(item);
                    },
                    {nav_icon(item)}
                    span { "{item.label()}" }
                }
            }
        }
    }
}

fn nav_icon(item: NavItem) -> Element {
    match item {
        NavItem::About => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        NavItem::Skills => rsx! { Icon { icon: FaCode, width: 16, height: 16 } },
        NavItem::Contact => rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } },
    }
}
