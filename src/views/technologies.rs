use dioxus::prelude::*;

use crate::components::{ AnimationFallback, GradientTitle, SectionWrapper };
use crate::content::{ TechLogo, Technology, TECHNOLOGIES };
use crate::utils::animation::{ color_cycle, glow_style, title_sweep, Rgb };
use crate::utils::scheduler::use_animation;
use crate::utils::{ use_theme, LayoutVariant, SectionId };

const CSS_LOGO: Asset = asset!("/assets/images/css.svg");
const HTML_LOGO: Asset = asset!("/assets/images/html.svg");
const JAVA_LOGO: Asset = asset!("/assets/images/java.svg");
const JAVASCRIPT_LOGO: Asset = asset!("/assets/images/javascript.svg");
const PYTHON_LOGO: Asset = asset!("/assets/images/python.svg");
const REACT_LOGO: Asset = asset!("/assets/images/react.svg");
const NODE_LOGO: Asset = asset!("/assets/images/node.svg");
const DOCKER_LOGO: Asset = asset!("/assets/images/docker.svg");

fn logo_asset(logo: TechLogo) -> Asset {
    match logo {
        TechLogo::Css => CSS_LOGO,
        TechLogo::Html => HTML_LOGO,
        TechLogo::Java => JAVA_LOGO,
        TechLogo::JavaScript => JAVASCRIPT_LOGO,
        TechLogo::Python => PYTHON_LOGO,
        TechLogo::React => REACT_LOGO,
        TechLogo::Node => NODE_LOGO,
        TechLogo::Docker => DOCKER_LOGO,
    }
}

#[component]
fn TechnologyBox(tech: Technology, color: ReadOnlySignal<Rgb>) -> Element {
    let theme = use_theme().state();
    let surface = if theme.is_dark { "bg-[#121826] border-gray-700" } else { "bg-gray-50 border-gray-300" };
    let rate = if theme.is_dark { "text-gray-300" } else { "text-gray-700" };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center p-6 rounded-xl border text-center transition-transform duration-300 ease-in-out hover:scale-105 {surface}",
            style: glow_style(color()),
            img { src: logo_asset(tech.logo), alt: tech.name, class: "w-16 h-16 object-contain mb-4" }
            h3 { class: "font-bold text-lg mb-2", "{tech.name}" }
            p { class: "text-sm font-medium {rate}", "{tech.rate}% proficiency" }
        }
    }
}

#[component]
pub fn Technologies() -> Element {
    let theme = use_theme().state();
    let color = use_animation(color_cycle);
    let sweep = use_animation(title_sweep);

    let (Ok(color), Ok(sweep)) = (color, sweep) else {
        return rsx! {
            AnimationFallback { section: SectionId::Technologies, title: "Technologies" }
        };
    };

    rsx! {
        SectionWrapper { id: SectionId::Technologies, variant: LayoutVariant::Auto, class: theme.section_text(),
            GradientTitle { text: "Technologies", position: sweep, class: "text-4xl md:text-5xl font-bold text-center mb-4" }

            div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-10 max-w-6xl mt-16 mx-auto px-4",
                for tech in TECHNOLOGIES {
                    TechnologyBox { key: "{tech.name}", tech, color }
                }
            }
        }
    }
}
