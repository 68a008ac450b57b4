use dioxus::prelude::*;
use portfolio::utils::scheduler::SchedulerHandle;
use portfolio::utils::section::use_navbar_height_provider;
use portfolio::utils::{ use_theme_provider, ThemeState };
use portfolio::Route;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {err}").into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Every session starts light; only the toggle changes it.
    let theme = use_theme_provider(ThemeState::default());
    use_navbar_height_provider();
    use_context_provider(SchedulerHandle::default);

    let state = theme.state();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div {
            class: if state.is_dark { "dark min-h-screen transition-colors duration-300" } else { "min-h-screen transition-colors duration-300" },
            style: format!("background-color: {}; color: {};", state.page_background(), state.text_color()),
            Router::<Route> {}
        }
    }
}
