mod gradient_title;
mod icons;
mod section_wrapper;
mod starfield;

pub use gradient_title::{ AnimationFallback, GradientDivider, GradientTitle, FALLBACK_STATUS };
pub use icons::{ CloseIcon, GithubIcon, LinkedinIcon, MailIcon, MenuIcon, MoonIcon, SunIcon };
pub use section_wrapper::SectionWrapper;
pub use starfield::{ star_positions, Star, Starfield };
