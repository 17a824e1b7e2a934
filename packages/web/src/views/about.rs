use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        ui::views::AboutView {}
    }
}
