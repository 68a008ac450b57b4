use dioxus::prelude::*;
use crate::views::{ Home, Navbar };

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
}
