use std::rc::Rc;

use dioxus::prelude::*;

use super::MobileMenu;
use crate::components::{ CloseIcon, MenuIcon, MoonIcon, SunIcon };
use crate::routes::Route;
use crate::utils::scroll::{ element_height, is_scrolled, scroll_offset, use_navigator, use_window_listener, BrowserViewport };
use crate::utils::{ use_theme, LogoVariant, NavState, NavbarHeight, Navigator, SectionId };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/images/logo.svg");
const LOGO_WHITE: Asset = asset!("/assets/images/logowhite.svg");

pub const NAVBAR_ID: &str = "navbar";

fn logo_asset(variant: LogoVariant) -> Asset {
    match variant {
        LogoVariant::OnDark => LOGO_WHITE,
        LogoVariant::OnLight => LOGO,
    }
}

fn sync_scroll(mut nav: Signal<NavState>) {
    let offset = scroll_offset();
    if nav.peek().scrolled != is_scrolled(offset) {
        nav.write().on_scroll(offset);
    }
}

fn measure(navbar_height: NavbarHeight) {
    if let Some(height) = element_height(NAVBAR_ID) {
        navbar_height.set(height);
    }
}

#[component]
fn NavButton(section: SectionId, text_color: &'static str) -> Element {
    let navigator = use_navigator();

    rsx! {
        button {
            class: "capitalize text-sm sm:text-base font-medium hover:text-pink-500 transition-transform hover:-translate-y-1",
            style: format!("color: {text_color};"),
            onclick: move |_| {
                navigator.scroll_to(section);
            },
            "{section}"
        }
    }
}

#[component]
fn ThemeToggle(#[props(default)] class: &'static str) -> Element {
    let theme = use_theme();

    rsx! {
        button {
            class,
            "aria-label": "Toggle theme",
            onclick: move |_| theme.toggle(),
            if theme.is_dark() {
                MoonIcon {}
            } else {
                SunIcon {}
            }
        }
    }
}

/// Fixed top bar laid over every route. Owns the scroll/menu state and
/// provides the scroll action to everything rendered below it.
#[component]
pub fn Navbar() -> Element {
    let theme = use_theme();
    let mut nav = use_signal(NavState::default);
    let navigator = use_context_provider(|| Navigator::new(Rc::new(BrowserViewport), nav));
    let navbar_height = use_context::<NavbarHeight>();

    use_window_listener("scroll", move |_| sync_scroll(nav));
    use_window_listener("resize", move |_| measure(navbar_height));

    let state = nav();
    let appearance = theme.state().navbar(state.scrolled);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            id: NAVBAR_ID,
            class: if appearance.shadow {
                "fixed top-0 w-full z-50 transition-all duration-300 shadow-lg"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300"
            },
            style: appearance.style(),
            onmounted: move |_| {
                sync_scroll(nav);
                measure(navbar_height);
            },
            div {
                class: "max-w-7xl mx-auto flex items-center justify-between px-4 sm:px-6 lg:px-8 h-16 sm:h-20",
                img {
                    src: logo_asset(appearance.logo),
                    alt: "Logo",
                    class: "h-8 sm:h-9 object-contain cursor-pointer",
                    onclick: move |_| {
                        navigator.scroll_to(SectionId::Home);
                    },
                }

                div { class: "hidden md:flex items-center space-x-8",
                    for section in SectionId::ALL {
                        NavButton { key: "{section}", section, text_color: appearance.text }
                    }
                    ThemeToggle { class: "ml-2" }
                }

                div { class: "flex md:hidden items-center space-x-4",
                    ThemeToggle {}
                    button {
                        class: "focus:outline-none",
                        "aria-label": "Toggle menu",
                        style: format!("color: {};", appearance.text),
                        onclick: move |_| nav.write().toggle_menu(),
                        if state.menu_open {
                            CloseIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }
                }
            }
        }

        MobileMenu { nav }

        Outlet::<Route> {}
    }
}
