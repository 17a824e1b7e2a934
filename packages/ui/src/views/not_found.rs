use dioxus::prelude::*;

/// Empty state for unknown routes.
#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "page-empty",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
        }
    }
}
