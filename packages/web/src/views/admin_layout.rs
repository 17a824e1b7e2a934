use dioxus::prelude::*;
use ui::NavItem;

use crate::Route;

#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let active = match route {
        Route::About {} => Some(NavItem::About),
        Route::Skills {} => Some(NavItem::Skills),
        Route::Contact {} => Some(NavItem::Contact),
        Route::NotFound { .. } => None,
    };

    let navigate = move |item: NavItem| {
        let target = match item {
            NavItem::About => Route::About {},
            NavItem::Skills => Route::Skills {},
            NavItem::Contact => Route::Contact {},
        };
        nav.push(target);
    };

    rsx! {
        div {
            class: "admin-shell",
            ui::AdminSidebar {
                active: active,
                on_navigate: navigate,
            }
            main {
                class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}
