//! Reference "Request Demo" dialog shell.
//!
//! Only presentation lives here: a backdrop, a title, an intro line, a
//! contact link and a close control. Every close path calls `on_toggle`;
//! the dialog never changes its own visibility.
//!
//! The panel takes focus when it mounts so Escape reaches its key handler
//! without the user clicking into the dialog first.

use dioxus::prelude::*;

use crate::core::site::DEMO_CONTACT_MAILTO;
use crate::t;

#[component]
pub fn DemoModal(is_open: bool, on_toggle: EventHandler<()>) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div { class: "demo-modal",
            div {
                class: "demo-modal__backdrop",
                aria_hidden: "true",
                onclick: move |_| on_toggle.call(()),
            }
            div {
                class: "demo-modal__panel",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "demo-modal-title",
                tabindex: -1,
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(err) = evt.set_focus(true).await {
                        tracing::debug!("demo modal: could not focus panel ({err:?})");
                    }
                },
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        evt.prevent_default();
                        on_toggle.call(());
                    }
                },
                h2 { id: "demo-modal-title", class: "demo-modal__title", {t!("demo-title")} }
                p { class: "demo-modal__intro", {t!("demo-intro")} }
                a { class: "demo-modal__contact", href: DEMO_CONTACT_MAILTO, {t!("demo-contact")} }
                button {
                    r#type: "button",
                    class: "demo-modal__close",
                    onclick: move |_| on_toggle.call(()),
                    {t!("demo-close")}
                }
            }
        }
    }
}
