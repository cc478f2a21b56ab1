//! Minimal pages behind the navbar routes. The marketing copy lives elsewhere;
//! these give the header something to sit on and scroll over.

use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero",
                h1 { {t!("page-home-title")} }
                p { {t!("page-home-tagline")} }
            }
        }
    }
}

#[component]
pub fn Demo() -> Element {
    rsx! {
        section { class: "page page-demo",
            h1 { {t!("page-demo-title")} }
            p { {t!("page-demo-intro")} }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            h1 { {t!("page-contact-title")} }
            p { {t!("page-contact-intro")} }
        }
    }
}
