use content::{load_profile, ContactChannels, EmbeddedSource};
use dioxus::prelude::*;

use crate::brands::FaWhatsapp;
use crate::icons::{FaEnvelope, FaLocationDot, FaPhone};
use crate::{ContactFormView, Icon, PageHeader};

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

/// Contact page: direct channels and the message form.
#[component]
pub fn ContactView() -> Element {
    let mut channels = use_signal(ContactChannels::default);

    let _loader = use_resource(move || async move {
        match load_profile(&EmbeddedSource::default()).await {
            Ok(profile) => channels.set(profile.contact),
            Err(e) => tracing::error!("Failed to load contact details: {e}"),
        }
    });

    let contact = channels();

    rsx! {
        document::Stylesheet { href: PAGES_CSS }

        div {
            class: "contact",
            PageHeader {
                title: "Contact Me",
                description: "Let's get in touch. Reach out and let's discuss how we can work together.",
            }

            div {
                class: "contact-body",
                section {
                    class: "contact-channels",
                    if !contact.phone.is_empty() {
                        h6 {
                            Icon { icon: FaPhone, width: 20, height: 20 }
                            a { href: "{contact.phone_href()}", "{contact.phone}" }
                        }
                    }
                    if !contact.email.is_empty() {
                        h6 {
                            Icon { icon: FaEnvelope, width: 20, height: 20 }
                            a { href: "{contact.email_href()}", "{contact.email}" }
                        }
                    }
                    if !contact.whatsapp.is_empty() {
                        h6 {
                            Icon { icon: FaWhatsapp, width: 20, height: 20 }
                            a { href: "{contact.whatsapp_href()}", "Send Message on WhatsApp" }
                        }
                    }
                    if !contact.location.is_empty() {
                        h6 {
                            Icon { icon: FaLocationDot, width: 20, height: 20 }
                            p { "{contact.location}" }
                        }
                    }
                }

                section {
                    class: "contact-message",
                    h4 { "Leave me a Message" }
                    ContactFormView {}
                }
            }
        }
    }
}
