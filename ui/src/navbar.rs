use dioxus::prelude::*;

use crate::core::site::is_active_path;

/// One entry of the primary navigation. Highlighted when `href` is the current route.
#[component]
pub fn NavItem(href: String, current_path: String, children: Element) -> Element {
    let class = if is_active_path(&current_path, &href) {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    };

    rsx! {
        li { class: "navbar__item",
            Link { class: class, to: href, {children} }
        }
    }
}
