use dioxus::prelude::*;

use super::animation::Rgb;

pub const DARK_BACKGROUND: &str = "#020617";
pub const DARK_BACKGROUND_SCROLLED: &str = "rgba(2, 6, 23, 0.9)";
pub const LIGHT_BACKGROUND: &str = "#ffffff";
pub const DARK_TEXT: &str = "#ffffff";
pub const LIGHT_TEXT: &str = "#06071f";
pub const DARK_PANEL: &str = "#06071f";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoVariant {
    /// White mark, drawn on dark backgrounds.
    OnDark,
    OnLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarAppearance {
    pub background: &'static str,
    pub text: &'static str,
    pub logo: LogoVariant,
    pub shadow: bool,
    pub blur: bool,
}

impl NavbarAppearance {
    pub fn style(&self) -> String {
        format!(
            "background-color: {}; color: {}; backdrop-filter: {};",
            self.background,
            self.text,
            if self.blur { "blur(10px)" } else { "none" }
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    pub fn text_color(self) -> &'static str {
        if self.is_dark { DARK_TEXT } else { LIGHT_TEXT }
    }

    pub fn page_background(self) -> &'static str {
        if self.is_dark { DARK_BACKGROUND } else { LIGHT_BACKGROUND }
    }

    pub fn logo(self) -> LogoVariant {
        if self.is_dark { LogoVariant::OnDark } else { LogoVariant::OnLight }
    }

    /// Light mode keeps a solid white bar regardless of scroll position.
    pub fn navbar(self, scrolled: bool) -> NavbarAppearance {
        let background = match (self.is_dark, scrolled) {
            (true, true) => DARK_BACKGROUND_SCROLLED,
            (true, false) => DARK_BACKGROUND,
            (false, _) => LIGHT_BACKGROUND,
        };

        NavbarAppearance {
            background,
            text: self.text_color(),
            logo: self.logo(),
            shadow: scrolled,
            blur: scrolled,
        }
    }

    pub fn menu_panel(self) -> &'static str {
        if self.is_dark { DARK_PANEL } else { LIGHT_BACKGROUND }
    }

    pub fn hero_background(self, accent: Rgb) -> String {
        format!(
            "background: radial-gradient(125% 125% at 50% 0%, {} 50%, {});",
            self.page_background(),
            accent
        )
    }

    /// Tailwind text class shared by every section body.
    pub fn section_text(self) -> &'static str {
        if self.is_dark { "text-white" } else { "text-[#06071f]" }
    }

    pub fn muted_text(self) -> &'static str {
        if self.is_dark { "text-gray-300" } else { "text-gray-600" }
    }
}

/// Session-wide theme handle shared through context. Reading `is_dark`
/// subscribes the calling component, so a toggle re-renders every reader in
/// the same pass.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    state: Signal<ThemeState>,
}

impl ThemeStore {
    pub fn new(state: Signal<ThemeState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ThemeState {
        *self.state.read()
    }

    pub fn is_dark(&self) -> bool {
        self.state.read().is_dark
    }

    pub fn toggle(&self) {
        let mut state = self.state;
        state.write().toggle();
        log::debug!("Theme toggled, dark mode: {}", state.peek().is_dark);
    }
}

pub fn use_theme_provider(initial: ThemeState) -> ThemeStore {
    let state = use_signal(|| initial);
    use_context_provider(|| ThemeStore::new(state))
}

pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
}
