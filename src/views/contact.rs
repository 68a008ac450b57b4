use dioxus::prelude::*;

use crate::components::SectionWrapper;
use crate::services::use_email_client;
use crate::utils::animation::border_sweep;
use crate::utils::contact_form::{ submit_contact, ContactForm };
use crate::utils::scheduler::use_animation;
use crate::utils::{ use_theme, LayoutVariant, SectionId };

const BORDER_GRADIENT: &str = "linear-gradient(270deg, #DD335C, #1E67C6, #13FFAA, #DD335C)";

/// Status banner colors by outcome and theme.
pub fn banner_class(ok: Option<bool>, is_dark: bool) -> &'static str {
    match (ok == Some(true), is_dark) {
        (true, true) => "border-green-400 bg-green-800/20 text-green-300",
        (true, false) => "border-green-500 bg-green-100 text-green-800",
        (false, true) => "border-red-400 bg-red-800/20 text-red-300",
        (false, false) => "border-red-500 bg-red-100 text-red-800",
    }
}

fn field_class(is_dark: bool) -> &'static str {
    if is_dark {
        "w-full rounded-md p-3 border-2 focus:outline-none focus:ring-2 transition-all bg-transparent text-white border-gray-400 focus:ring-pink-400"
    } else {
        "w-full rounded-md p-3 border-2 focus:outline-none focus:ring-2 transition-all bg-white text-[#06071f] border-gray-300 focus:ring-pink-500"
    }
}

#[component]
pub fn Contact() -> Element {
    let theme = use_theme().state();
    let mut form = use_signal(ContactForm::default);
    let client = use_email_client();
    let position = use_animation(border_sweep)
        .map(|position| *position.read())
        .unwrap_or_default();

    let ContactForm { fields, status } = form();
    let input_class = field_class(theme.is_dark);
    let banner = banner_class(status.ok, theme.is_dark);

    let border_style = format!(
        "background: {BORDER_GRADIENT}; background-size: 600% 600%; background-position: {position:.2}% 50%; padding: 4px; border-radius: 1.5rem; width: 100%; max-width: 600px;"
    );
    let panel = if theme.is_dark { "bg-[#020617]/70 backdrop-blur-md" } else { "bg-white/70 backdrop-blur-md" };
    let submit_class = if theme.is_dark {
        "py-3 rounded-full font-semibold transition-all bg-[#020617]/60 text-white border border-white hover:shadow-[0_0_15px_#fff]"
    } else {
        "py-3 rounded-full font-semibold transition-all bg-[#f3f4f6] text-[#06071f] border border-gray-400 hover:shadow-[0_0_10px_#aaa]"
    };
    let submit_style = if status.sending {
        "cursor: not-allowed; opacity: 0.7;"
    } else {
        "cursor: pointer; opacity: 1;"
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            submit_contact(&form, client.as_ref()).await;
        });
    };

    rsx! {
        SectionWrapper { id: SectionId::Contact, variant: LayoutVariant::Auto, class: format!("justify-center min-h-screen {}", theme.section_text()),
            div { style: border_style,
                div { class: "rounded-3xl p-10 {panel}",
                    h2 { class: "text-4xl font-extrabold text-center mb-6", "Contact Me" }

                    if !status.message.is_empty() {
                        div { class: "mb-4 p-3 rounded-md border text-center {banner}",
                            "{status.message}"
                        }
                    }

                    form { class: "flex flex-col gap-6", onsubmit: onsubmit,
                        input {
                            r#type: "text",
                            name: "user_name",
                            placeholder: "Your Name",
                            required: true,
                            class: input_class,
                            value: fields.name,
                            oninput: move |evt| form.write().fields.name = evt.value(),
                        }
                        input {
                            r#type: "email",
                            name: "reply_to",
                            placeholder: "Your Email",
                            required: true,
                            class: input_class,
                            value: fields.reply_to,
                            oninput: move |evt| form.write().fields.reply_to = evt.value(),
                        }
                        textarea {
                            name: "message",
                            placeholder: "What do you want to say?",
                            rows: "5",
                            required: true,
                            class: "{input_class} resize-none",
                            value: fields.message,
                            oninput: move |evt| form.write().fields.message = evt.value(),
                        }

                        button {
                            r#type: "submit",
                            disabled: status.sending,
                            class: submit_class,
                            style: submit_style,
                            if status.sending {
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }
                    }
                }
            }
        }
    }
}
