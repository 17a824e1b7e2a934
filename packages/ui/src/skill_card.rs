use content::SkillRecord;
use dioxus::prelude::*;
use pulldown_cmark::{html, Parser};

use crate::brands::{FaCss3Alt, FaGitAlt, FaHtml5, FaJs, FaNodeJs, FaPython, FaReact, FaRust};
use crate::icons::FaCode;
use crate::Icon;

/// One skill: icon, title, proficiency bar and markdown description.
#[component]
pub fn SkillCard(skill: SkillRecord) -> Element {
    let description = render_markdown(&skill.description);
    let proficiency = skill.proficiency.min(100);

    rsx! {
        article {
            class: "skill-card",
            div { class: "skill-card-icon", {skill_icon(&skill.icon)} }
            h3 { class: "skill-card-title", "{skill.title}" }
            div {
                class: "skill-card-bar",
                title: "{proficiency}%",
                div {
                    class: "skill-card-bar-fill",
                    style: "width: {proficiency}%",
                }
            }
            if !description.is_empty() {
                div {
                    class: "skill-card-description",
                    dangerous_inner_html: "{description}",
                }
            }
        }
    }
}

fn skill_icon(name: &str) -> Element {
    match name {
        "html5" | "html" => rsx! { Icon { icon: FaHtml5, width: 48, height: 48 } },
        "css3" | "css" => rsx! { Icon { icon: FaCss3Alt, width: 48, height: 48 } },
        "js" | "javascript" => rsx! { Icon { icon: FaJs, width: 48, height: 48 } },
        "react" => rsx! { Icon { icon: FaReact, width: 48, height: 48 } },
        "rust" => rsx! { Icon { icon: FaRust, width: 48, height: 48 } },
        "git" => rsx! { Icon { icon: FaGitAlt, width: 48, height: 48 } },
        "node" => rsx! { Icon { icon: FaNodeJs, width: 48, height: 48 } },
        "python" => rsx! { Icon { icon: FaPython, width: 48, height: 48 } },
        _ => rsx! { Icon { icon: FaCode, width: 48, height: 48 } },
    }
}

/// Markdown to HTML. Content is authored by the site owner, not visitors.
pub(crate) fn render_markdown(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(text));
    out
}
