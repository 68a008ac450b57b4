use dioxus::prelude::*;

use super::{ Contact, Hero, Projects, Resume, Study, Technologies };

/// The whole page: every section in navigation order.
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            Hero {}
            Resume {}
            Technologies {}
            Projects {}
            Study {}
            Contact {}
        }
    }
}
