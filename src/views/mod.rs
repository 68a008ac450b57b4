mod contact;
mod hero;
mod home;
mod mobile_menu;
mod navbar;
mod projects;
mod resume;
mod study;
mod technologies;

pub use contact::{ banner_class, Contact };
pub use hero::Hero;
pub use home::Home;
pub use mobile_menu::MobileMenu;
pub use navbar::{ Navbar, NAVBAR_ID };
pub use projects::Projects;
pub use resume::Resume;
pub use study::Study;
pub use technologies::Technologies;
