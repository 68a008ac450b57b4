pub mod animation;
pub mod contact_form;
pub mod scheduler;
pub mod scroll;
pub mod section;
pub mod theme_state;

pub use theme_state::*;
pub use section::{ LayoutVariant, NavbarHeight, SectionId };
pub use scroll::{ Navigator, NavState };
