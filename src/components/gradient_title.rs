use dioxus::prelude::*;

use super::SectionWrapper;
use crate::utils::animation::{ gradient_text_style, palette_gradient };
use crate::utils::SectionId;

pub const FALLBACK_STATUS: &str = "Animation unavailable - content loading...";

#[component]
pub fn GradientTitle(
    #[props(into)] text: String,
    position: ReadOnlySignal<f64>,
    #[props(default = "text-4xl md:text-5xl font-bold text-center".to_string(), into)] class: String
) -> Element {
    rsx! {
        h2 { class: "{class}", style: gradient_text_style(position()), "{text}" }
    }
}

#[component]
pub fn GradientDivider(position: ReadOnlySignal<f64>) -> Element {
    let style = format!(
        "background: {}; background-size: 400% 100%; background-position: {:.2}% 50%;",
        palette_gradient(),
        position()
    );

    rsx! {
        div { class: "h-1 w-24 mx-auto mt-2 mb-10", style }
    }
}

/// Plain heading plus a neutral status line, shown when a section's
/// decorative animation could not start.
#[component]
pub fn AnimationFallback(section: SectionId, #[props(into)] title: String) -> Element {
    rsx! {
        SectionWrapper { id: section,
            h2 { class: "text-4xl font-bold text-center", "{title}" }
            p { class: "text-center mt-4", "{FALLBACK_STATUS}" }
        }
    }
}
