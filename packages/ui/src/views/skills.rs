use content::{load_skills, EmbeddedSource, SkillRecord};
use dioxus::prelude::*;

use crate::{PageHeader, SkillCard};

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Skills page: one card per skill, in content order.
///
/// A content error is logged and the page renders without cards.
#[component]
pub fn SkillsView() -> Element {
    let mut skills = use_signal(Vec::<SkillRecord>::new);
    let mut failed = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match load_skills(&EmbeddedSource::default()).await {
            Ok(list) => skills.set(list),
            Err(e) => {
                tracing::error!("Failed to load skills: {e}");
                failed.set(true);
            }
        }
    });

    rsx! {
        document::Stylesheet { href: PAGES_CSS }

        section {
            class: "skills",
            PageHeader {
                title: "My Skills",
                description: "I design for humans to help brands grow. I combine a passion for people-focused design with modern development technologies.",
            }

            if failed() {
                p { class: "page-empty", "Skills are unavailable right now." }
            }

            div {
                class: "skills-grid",
                for skill in skills() {
                    SkillCard { key: "{skill.id}", skill: skill.clone() }
                }
            }
        }
    }
}
