use dioxus::prelude::*;

use crate::utils::scroll::use_navigator;
use crate::utils::{ use_theme, NavState, SectionId };

/// Slide-in panel for narrow screens. Closes on the ✕ control, a backdrop
/// click, or picking an entry.
#[component]
pub fn MobileMenu(nav: Signal<NavState>) -> Element {
    let mut nav = nav;
    let theme = use_theme().state();
    let navigator = use_navigator();
    let open = nav().menu_open;

    let panel_class = format!(
        "fixed top-0 left-0 h-full w-64 sm:w-72 z-50 transform {} transition-transform duration-300 ease-in-out shadow-lg",
        if open { "translate-x-0" } else { "-translate-x-full" }
    );
    let panel_style = format!(
        "background-color: {}; color: {};",
        theme.menu_panel(),
        theme.text_color()
    );

    rsx! {
        div { class: panel_class, style: panel_style,
            div { class: "p-6 relative",
                button {
                    class: "absolute top-4 right-4",
                    onclick: move |_| nav.write().close_menu(),
                    "✕"
                }

                div { class: "mt-10 space-y-6",
                    for section in SectionId::ALL {
                        button {
                            key: "{section}",
                            class: "block w-full text-left text-lg font-medium hover:text-pink-400 transition-colors",
                            onclick: {
                                let navigator = navigator.clone();
                                move |_| {
                                    navigator.scroll_to(section);
                                }
                            },
                            {section.label()}
                        }
                    }
                }
            }
        }

        if open {
            div {
                class: "fixed inset-0 bg-black/50 backdrop-blur-sm z-40 md:hidden",
                onclick: move |_| nav.write().close_menu(),
            }
        }
    }
}
