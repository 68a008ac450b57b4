use dioxus::prelude::*;

use crate::components::{ AnimationFallback, GradientTitle, SectionWrapper };
use crate::content::{ Project, PROJECTS };
use crate::utils::animation::title_sweep;
use crate::utils::scheduler::use_animation;
use crate::utils::{ use_theme, LayoutVariant, SectionId };

#[component]
fn ProjectCard(project: Project) -> Element {
    let theme = use_theme().state();
    let surface = if theme.is_dark { "bg-[#121826] border-gray-700" } else { "bg-white border-gray-200" };
    let summary = if theme.is_dark { "text-gray-400" } else { "text-gray-600" };

    rsx! {
        div { class: "rounded-xl shadow-md p-4 flex flex-col items-center text-center border transition-all duration-300 hover:scale-105 {surface}",
            div { class: "text-4xl mb-2", "{project.icon}" }
            h3 { class: "text-sm font-semibold mb-1", "{project.title}" }
            p { class: "text-xs mb-3 leading-snug {summary}", "{project.summary}" }
            a {
                href: project.write_up,
                target: "_blank",
                rel: "noopener noreferrer",
                class: "text-xs px-3 py-1.5 rounded-full text-white bg-pink-500 hover:bg-pink-600 transition-transform hover:scale-105",
                "Learn More >"
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let text = use_theme().state().section_text();
    let Ok(sweep) = use_animation(title_sweep) else {
        return rsx! {
            AnimationFallback { section: SectionId::Projects, title: "About My Projects" }
        };
    };

    rsx! {
        SectionWrapper { id: SectionId::Projects, variant: LayoutVariant::Full,
            div { class: "max-w-6xl mx-auto w-full h-full flex flex-col justify-center",
                GradientTitle { text: "About My Projects", position: sweep, class: "text-3xl md:text-4xl font-bold mb-6 text-center" }

                div { class: "grid lg:grid-cols-4 sm:grid-cols-2 grid-cols-1 gap-4 px-4 sm:px-8 {text}",
                    for project in PROJECTS {
                        ProjectCard { key: "{project.id}", project }
                    }
                }
            }
        }
    }
}
