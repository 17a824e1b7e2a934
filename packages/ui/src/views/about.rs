use content::{load_profile, EmbeddedSource, Profile};
use dioxus::prelude::*;

use crate::icons::{FaDownload, FaUserTie};
use crate::Icon;

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// About page: introduction, personal details and the resume link.
#[component]
pub fn AboutView() -> Element {
    let mut profile = use_signal(|| Option::<Profile>::None);

    let _loader = use_resource(move || async move {
        match load_profile(&EmbeddedSource::default()).await {
            Ok(p) => profile.set(Some(p)),
            Err(e) => tracing::error!("Failed to load profile: {e}"),
        }
    });

    let Some(profile) = profile() else {
        return rsx! {
            document::Stylesheet { href: PAGES_CSS }
            div { class: "page-empty" }
        };
    };

    let details = [
        ("Full Name", profile.name.clone()),
        ("Age", profile.age.map(|a| format!("{a} years")).unwrap_or_default()),
        ("Nationality", profile.nationality.clone()),
        ("Languages", profile.languages_label()),
        ("Address", profile.address.clone()),
        ("Freelance", profile.freelance_label().to_string()),
    ];

    rsx! {
        document::Stylesheet { href: PAGES_CSS }

        section {
            class: "about",
            h1 { class: "page-title", "About Me" }
            div {
                class: "about-body",
                div {
                    class: "about-portrait",
                    Icon { icon: FaUserTie, width: 160, height: 160 }
                }
                div {
                    class: "about-text",
                    h2 {
                        "I am "
                        span { class: "accent", "{profile.name}" }
                    }
                    p { "{profile.blurb}" }
                    ul {
                        class: "about-details",
                        for (label, value) in details {
                            if !value.is_empty() {
                                li {
                                    key: "{label}",
                                    strong { "{label}: " }
                                    "{value}"
                                }
                            }
                        }
                    }
                    if let Some(ref url) = profile.resume_url {
                        a {
                            class: "about-resume",
                            href: "{url}",
                            download: "",
                            "DOWNLOAD RESUME"
                            Icon { icon: FaDownload, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}
