use dioxus::prelude::*;

use crate::components::{ AnimationFallback, GradientDivider, GradientTitle, SectionWrapper };
use crate::content::{ ABOUT_ME, RESUME_CARDS };
use crate::utils::animation::{ color_cycle, glow_style, title_sweep, Rgb };
use crate::utils::scheduler::use_animation;
use crate::utils::scroll::use_navigator;
use crate::utils::{ use_theme, LayoutVariant, SectionId };

#[component]
fn ResumeCardButton(
    title: &'static str,
    description: &'static str,
    target: SectionId,
    color: ReadOnlySignal<Rgb>
) -> Element {
    let theme = use_theme().state();
    let navigator = use_navigator();
    let surface = if theme.is_dark { "text-white bg-[#020617]/60" } else { "text-[#06071f] bg-gray-100" };

    rsx! {
        button {
            class: "flex flex-col items-center justify-center h-32 w-48 mx-auto p-4 rounded-xl font-semibold text-center transform-gpu transition-all duration-300 ease-in-out hover:-translate-y-1 hover:scale-105 focus:outline-none {surface}",
            style: glow_style(color()),
            onclick: move |_| {
                navigator.scroll_to(target);
            },
            span { class: "text-lg mb-1", "{title}" }
            span { class: format!("text-xs {}", theme.muted_text()), "{description}" }
        }
    }
}

#[component]
pub fn Resume() -> Element {
    let theme = use_theme().state();
    let color = use_animation(color_cycle);
    let sweep = use_animation(title_sweep);

    let (Ok(color), Ok(sweep)) = (color, sweep) else {
        return rsx! {
            AnimationFallback { section: SectionId::Resume, title: "About Me" }
        };
    };

    rsx! {
        SectionWrapper { id: SectionId::Resume, variant: LayoutVariant::Auto, class: theme.section_text(),
            div { class: "max-w-4xl mx-auto px-4 py-10",
                GradientTitle {
                    text: "About Me",
                    position: sweep,
                    class: "text-4xl md:text-5xl font-bold mb-5 text-center",
                }
                GradientDivider { position: sweep }

                p { class: format!("text-lg md:text-xl text-center mb-16 max-w-2xl mx-auto {}", theme.muted_text()),
                    "{ABOUT_ME}"
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for card in RESUME_CARDS.iter() {
                        ResumeCardButton {
                            key: "{card.title}",
                            title: card.title,
                            description: card.description,
                            target: card.target,
                            color,
                        }
                    }
                }
            }
        }
    }
}
