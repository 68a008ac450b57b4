use dioxus::prelude::*;

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";
const MENU_PATH: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";
const GITHUB_PATH: &str = "M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.11.79-.25.79-.56v-2c-3.2.7-3.87-1.37-3.87-1.37-.52-1.33-1.28-1.69-1.28-1.69-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.68 0-1.25.45-2.28 1.18-3.08-.12-.29-.51-1.46.11-3.04 0 0 .97-.31 3.17 1.18a11 11 0 015.77 0c2.2-1.49 3.17-1.18 3.17-1.18.62 1.58.23 2.75.11 3.04.74.8 1.18 1.83 1.18 3.08 0 4.41-2.69 5.38-5.26 5.67.41.36.78 1.06.78 2.14v3.17c0 .31.21.68.8.56A11.51 11.51 0 0023.5 12C23.5 5.65 18.35.5 12 .5z";
const LINKEDIN_PATH: &str = "M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.34V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28zM5.34 7.43a2.07 2.07 0 110-4.13 2.07 2.07 0 010 4.13zM7.12 20.45H3.56V9h3.56v11.45zM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0z";
const MAIL_PATH: &str = "M4 4h16a2 2 0 012 2v12a2 2 0 01-2 2H4a2 2 0 01-2-2V6a2 2 0 012-2zm0 2l8 6 8-6";

#[component]
fn StrokeIcon(outline: &'static str, #[props(default = "h-6 w-6")] class: &'static str) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class,
            fill: "none",
            "viewBox": "0 0 24 24",
            stroke: "currentColor",
            path {
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                "stroke-width": "2",
                d: outline,
            }
        }
    }
}

#[component]
fn FilledIcon(outline: &'static str) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "h-8 w-8",
            fill: "currentColor",
            "viewBox": "0 0 24 24",
            path { d: outline }
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    rsx! { StrokeIcon { outline: SUN_PATH } }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! { StrokeIcon { outline: MOON_PATH } }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! { StrokeIcon { outline: MENU_PATH, class: "h-7 w-7" } }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! { StrokeIcon { outline: CLOSE_PATH, class: "h-7 w-7" } }
}

#[component]
pub fn GithubIcon() -> Element {
    rsx! { FilledIcon { outline: GITHUB_PATH } }
}

#[component]
pub fn LinkedinIcon() -> Element {
    rsx! { FilledIcon { outline: LINKEDIN_PATH } }
}

#[component]
pub fn MailIcon() -> Element {
    rsx! { StrokeIcon { outline: MAIL_PATH, class: "h-8 w-8" } }
}
