use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use dioxus::prelude::*;

use crate::error::NavigationError;

/// Used until the navbar has measured itself.
pub const DEFAULT_NAVBAR_HEIGHT: f64 = 72.0;
/// Breathing room between the navbar's bottom edge and a section heading.
pub const TITLE_GAP: f64 = 20.0;
/// Vertical padding of `Auto` sections.
pub const AUTO_SECTION_PADDING: f64 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Resume,
    Technologies,
    Projects,
    Study,
    Contact,
}

impl SectionId {
    /// Canonical navigation order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::Resume,
        SectionId::Technologies,
        SectionId::Projects,
        SectionId::Study,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Resume => "resume",
            Self::Technologies => "technologies",
            Self::Projects => "projects",
            Self::Study => "study",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Resume => "Resume",
            Self::Technologies => "Technologies",
            Self::Projects => "Projects",
            Self::Study => "Study",
            Self::Contact => "Contact",
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| NavigationError::UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutVariant {
    /// Exactly one viewport tall, content centered, overflow clipped.
    #[default]
    Full,
    /// Natural height with fixed vertical padding.
    Auto,
}

impl LayoutVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Full =>
                "relative h-screen overflow-hidden flex flex-col justify-center items-center",
            Self::Auto => "relative overflow-visible flex flex-col items-center",
        }
    }

    /// The reserved top offset tracks the measured navbar height.
    pub fn style(self, navbar_height: f64) -> String {
        let navbar_height = navbar_height.max(0.0);
        match self {
            Self::Full =>
                format!("padding-top: {}px; box-sizing: border-box;", navbar_height + TITLE_GAP),
            Self::Auto =>
                format!(
                    "padding-top: {}px; padding-bottom: {AUTO_SECTION_PADDING}px; box-sizing: border-box;",
                    navbar_height + AUTO_SECTION_PADDING
                ),
        }
    }
}

/// Rendered height of the fixed navbar, published by the navbar and read by
/// every section.
#[derive(Clone, Copy, PartialEq)]
pub struct NavbarHeight(pub Signal<f64>);

impl NavbarHeight {
    pub fn get(&self) -> f64 {
        *self.0.read()
    }

    pub fn set(&self, height: f64) {
        let mut signal = self.0;
        if height > 0.0 && *signal.peek() != height {
            log::debug!("Navbar height measured at {}px", height);
            signal.set(height);
        }
    }
}

pub fn use_navbar_height_provider() -> NavbarHeight {
    let height = use_signal(|| DEFAULT_NAVBAR_HEIGHT);
    use_context_provider(|| NavbarHeight(height))
}
