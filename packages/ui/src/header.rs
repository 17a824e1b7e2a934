use dioxus::prelude::*;

/// Title and description block at the top of a page.
#[component]
pub fn PageHeader(title: String, description: String) -> Element {
    rsx! {
        header {
            class: "page-header",
            h1 { class: "page-header-title", "{title}" }
            p { class: "page-header-description", "{description}" }
        }
    }
}
