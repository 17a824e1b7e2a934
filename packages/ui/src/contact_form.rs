use std::rc::Rc;

use api::{ContactForm, EmailJsRelay, Field, SubmissionClient, SubmitRejected};
use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::timer::sleep;
use crate::{use_site_config, Icon};

/// Name / email / message form wired to the email relay.
///
/// Field errors appear after the first submit and follow every edit from then
/// on. The status line clears itself after the configured delay; a newer
/// status is never cleared by an older timer.
#[component]
pub fn ContactFormView() -> Element {
    let config = use_site_config();
    let clear_after = config.status.clear_after();
    let mut form = use_signal(move || ContactForm::new(clear_after));
    let client = use_hook(move || Rc::new(SubmissionClient::emailjs(config.relay.clone())));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let input = match form.write().begin_submit() {
            Ok(input) => input,
            Err(SubmitRejected::Busy) => return,
            Err(e @ SubmitRejected::Invalid(_)) => {
                tracing::debug!("Contact form not sent: {e}");
                return;
            }
        };

        let client: Rc<SubmissionClient<EmailJsRelay>> = client.clone();
        spawn(async move {
            let result = client.submit(&input).await;
            let ticket = form.write().finish(result);
            let delay = form.peek().clear_after();
            sleep(delay).await;
            form.write().expire(ticket);
        });
    };

    let state = form.read().clone();
    let input = state.input().clone();
    let errors = state.errors().messages();
    let pending = state.is_pending();
    let status_line = state.status().message().unwrap_or_default().to_string();

    rsx! {
        form {
            class: "contact-form",
            autocomplete: "off",
            onsubmit: handle_submit,

            input {
                class: "contact-input",
                name: Field::Name.key(),
                placeholder: "Full Name",
                value: "{input.name}",
                oninput: move |evt: FormEvent| form.write().set_field(Field::Name, evt.value()),
            }
            input {
                class: "contact-input",
                name: Field::Email.key(),
                placeholder: "Email",
                value: "{input.email}",
                oninput: move |evt: FormEvent| form.write().set_field(Field::Email, evt.value()),
            }
            textarea {
                class: "contact-input",
                name: Field::Message.key(),
                rows: "10",
                placeholder: "Message",
                value: "{input.message}",
                oninput: move |evt: FormEvent| form.write().set_field(Field::Message, evt.value()),
            }
            button {
                class: "contact-submit",
                r#type: "submit",
                disabled: pending,
                "Send Message"
            }

            if !errors.is_empty() {
                ul {
                    class: "contact-errors",
                    for (field_label, message) in errors {
                        li {
                            key: "{field_label}",
                            class: "contact-error",
                            label { class: "contact-error-label", "● {field_label}:" }
                            p { class: "contact-error-message", "{message}" }
                        }
                    }
                }
            }

            if pending {
                span {
                    class: "contact-loading",
                    Icon { icon: FaSpinner, width: 16, height: 16 }
                }
            }
            p { class: "contact-status", "{status_line}" }
        }
    }
}
