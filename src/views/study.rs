use dioxus::prelude::*;

use crate::components::{ AnimationFallback, GradientTitle, SectionWrapper };
use crate::content::STUDIES;
use crate::utils::animation::title_sweep;
use crate::utils::scheduler::use_animation;
use crate::utils::{ use_theme, LayoutVariant, SectionId };

#[component]
pub fn Study() -> Element {
    let theme = use_theme().state();
    let Ok(sweep) = use_animation(title_sweep) else {
        return rsx! {
            AnimationFallback { section: SectionId::Study, title: "Study Path" }
        };
    };

    let border = if theme.is_dark { "border-gray-700" } else { "border-gray-300" };
    let school = if theme.is_dark { "text-gray-400" } else { "text-gray-600" };
    let period = if theme.is_dark { "text-pink-400" } else { "text-pink-600" };

    rsx! {
        SectionWrapper { id: SectionId::Study, variant: LayoutVariant::Full, class: theme.section_text(),
            div { class: "text-center max-w-5xl px-4",
                GradientTitle { text: "Study Path", position: sweep, class: "text-4xl md:text-5xl font-bold mb-8" }

                div { class: "space-y-4",
                    for (index, item) in STUDIES.iter().enumerate() {
                        div { key: "{index}", class: "border rounded-lg p-4 transition-transform hover:scale-[1.02] {border}",
                            h3 { class: "font-bold text-lg", "{item.title}" }
                            p { class: "text-sm {school}", "{item.school}" }
                            span { class: "block mt-1 text-sm {period}", "{item.period}" }
                        }
                    }
                }
            }
        }
    }
}
