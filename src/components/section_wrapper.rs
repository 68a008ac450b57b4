use dioxus::prelude::*;

use crate::utils::section::DEFAULT_NAVBAR_HEIGHT;
use crate::utils::{ LayoutVariant, NavbarHeight, SectionId };

/// Container every section renders into: carries the scroll anchor and keeps
/// the heading clear of the fixed navbar.
#[component]
pub fn SectionWrapper(
    id: SectionId,
    #[props(default)] variant: LayoutVariant,
    #[props(default, into)] class: String,
    children: Element
) -> Element {
    let navbar_height = try_use_context::<NavbarHeight>()
        .map(|height| height.get())
        .unwrap_or(DEFAULT_NAVBAR_HEIGHT);
    let layout = variant.class();

    rsx! {
        section {
            id: "{id}",
            class: "{layout} {class}",
            style: variant.style(navbar_height),
            {children}
        }
    }
}
