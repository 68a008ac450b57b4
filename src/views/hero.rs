use dioxus::prelude::*;

use crate::components::{ GithubIcon, LinkedinIcon, MailIcon, SectionWrapper, Starfield };
use crate::content::{ EMAIL_ADDRESS, GITHUB_URL, LINKEDIN_URL, OWNER_NAME, TAGLINE };
use crate::utils::animation::{ color_cycle, FALLBACK_ACCENT };
use crate::utils::scheduler::use_animation;
use crate::utils::scroll::use_navigator;
use crate::utils::{ use_theme, SectionId };

const PROFILE_PHOTO: Asset = asset!("/assets/images/profile.svg");

#[component]
pub fn Hero() -> Element {
    let theme = use_theme().state();
    let navigator = use_navigator();
    // The hero keeps its layout without the color cycle; it just stops moving.
    let accent = use_animation(color_cycle)
        .map(|accent| *accent.read())
        .unwrap_or(FALLBACK_ACCENT);

    let ring = format!("border-color: {accent};");
    let mail = format!("mailto:{EMAIL_ADDRESS}");

    rsx! {
        SectionWrapper { id: SectionId::Home, class: format!("text-center {}", theme.section_text()),
            div { class: "absolute inset-0 -z-10", style: theme.hero_background(accent) }

            if theme.is_dark {
                Starfield {}
            }

            div { class: "relative z-10 flex flex-col items-center justify-center",
                div {
                    class: "w-64 h-64 rounded-full overflow-hidden border-4 mb-8",
                    style: ring.clone(),
                    img { src: PROFILE_PHOTO, alt: "Profile", class: "object-cover w-full h-full" }
                }

                h1 { class: "text-5xl font-bold mb-4", "Hi, I’m {OWNER_NAME}" }
                p { class: "text-lg mb-8", "{TAGLINE}" }

                button {
                    class: "border px-6 py-2 rounded-full hover:scale-105 transition",
                    style: ring,
                    onclick: move |_| {
                        navigator.scroll_to(SectionId::Contact);
                    },
                    "Contact Me"
                }

                div { class: "mt-12 flex gap-10 text-3xl",
                    a { href: GITHUB_URL, target: "_blank", rel: "noreferrer", "aria-label": "GitHub",
                        GithubIcon {}
                    }
                    a { href: LINKEDIN_URL, target: "_blank", rel: "noreferrer", "aria-label": "LinkedIn",
                        LinkedinIcon {}
                    }
                    a { href: mail, "aria-label": "Email", MailIcon {} }
                }
            }
        }
    }
}
