use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        ui::views::NotFoundView { path: segments.join("/") }
    }
}
