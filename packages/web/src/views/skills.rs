use dioxus::prelude::*;

#[component]
pub fn Skills() -> Element {
    rsx! {
        ui::views::SkillsView {}
    }
}
