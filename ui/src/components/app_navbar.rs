use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::NavItem;
use crate::core::nav_state::NavState;
use crate::core::platform::ViewportBridge;
use crate::core::site::{NavEntry, SocialNetwork, HOME_PATH};
use crate::core::theme::Theme;
use crate::core::viewport::{Subscription, ViewportSignal};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const LOGO: Asset = asset!("/assets/image/smartsalonbot-logo.svg");

/// Platform hooks for the navbar.
///
/// The demo request dialog is owned by the platform: `ui` hands it the
/// current open flag and a toggle callback and renders whatever comes back.
/// Register once before the router renders (e.g. at the top of `App()`):
///
/// ```ignore
/// use ui::components::{register_nav, DemoModal, NavBuilder};
/// fn demo_modal(is_open: bool, on_toggle: EventHandler<()>) -> Element {
///     rsx!( DemoModal { is_open, on_toggle } )
/// }
/// register_nav(NavBuilder { demo_modal });
/// ```
pub struct NavBuilder {
    pub demo_modal: fn(is_open: bool, on_toggle: EventHandler<()>) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("register_nav: builder already registered, keeping the first one");
    }
}

/// Applies a transition and writes back only when something changed, so a
/// stream of scroll events does not re-render the bar on every tick.
fn transition(mut state: Signal<NavState>, apply: impl FnOnce(&mut NavState)) {
    let current = *state.peek();
    let mut next = current;
    apply(&mut next);
    if next != current {
        state.set(next);
    }
}

struct ViewportGuards {
    _scroll: Subscription,
    _resize: Subscription,
    bridge: Option<ViewportBridge>,
}

/// Subscribes `state` to the viewport signals for the lifetime of the calling component.
///
/// Subscribing happens during the first render; the browser bridge is only
/// acquired and seeded once the component has mounted, so the first render
/// always shows the all-false state.
fn use_viewport_tracking(state: Signal<NavState>) {
    let guards: Rc<RefCell<Option<ViewportGuards>>> = use_hook(|| {
        let scroll = ViewportSignal::Scroll
            .subscribe(move |offset| transition(state, |s| s.set_scrolled(offset)));
        let resize = ViewportSignal::Resize
            .subscribe(move |width| transition(state, |s| s.apply_viewport_width(width)));

        Rc::new(RefCell::new(Some(ViewportGuards {
            _scroll: scroll,
            _resize: resize,
            bridge: None,
        })))
    });

    let mounted = guards.clone();
    use_effect(move || {
        let acquired = {
            let mut slot = mounted.borrow_mut();
            let Some(guards) = slot.as_mut() else {
                return;
            };
            if guards.bridge.is_some() {
                return;
            }
            match ViewportBridge::acquire() {
                Ok(bridge) => {
                    guards.bridge = Some(bridge);
                    true
                }
                Err(err) => {
                    tracing::warn!("navbar: viewport tracking unavailable ({err})");
                    false
                }
            }
        };

        // Seed once the mutable borrow is released.
        if acquired {
            if let Some(bridge) = mounted.borrow().as_ref().and_then(|g| g.bridge.as_ref()) {
                bridge.publish_current();
            }
        }
    });

    use_drop(move || {
        guards.borrow_mut().take();
    });
}

/// Fixed site header with desktop and mobile layouts.
///
/// `current_path` is the router's current location; the platform layout
/// passes it down so each `NavItem` can mark itself active.
#[component]
pub fn Navbar(current_path: String) -> Element {
    i18n::init();

    let state = use_signal(NavState::new);
    use_viewport_tracking(state);

    let toggle_menu = use_callback(move |_: ()| transition(state, NavState::toggle_menu));
    let toggle_modal = use_callback(move |_: ()| transition(state, NavState::toggle_modal));

    use_hook(|| {
        if NAV_BUILDER.get().is_none() {
            tracing::warn!("navbar: no NavBuilder registered, demo dialog disabled");
        }
    });

    #[cfg(debug_assertions)]
    tracing::debug!("navbar render path={current_path} state={:?}", state());

    rsx! {
        NavbarView {
            state: state(),
            current_path,
            on_toggle_menu: toggle_menu,
            on_toggle_modal: toggle_modal,
        }
    }
}

/// Stateless markup of the header for a given [`NavState`].
///
/// [`Navbar`] owns the state and the viewport tracking; this only renders it
/// and reports clicks. The registered [`NavBuilder`] supplies the dialog.
#[component]
pub fn NavbarView(
    state: NavState,
    current_path: String,
    on_toggle_menu: EventHandler<()>,
    on_toggle_modal: EventHandler<()>,
) -> Element {
    let theme = Theme::from_scrolled(state.scrolled);

    let demo_modal = NAV_BUILDER
        .get()
        .map(|b| (b.demo_modal)(state.modal_open, on_toggle_modal));

    let desktop_social: Vec<(SocialNetwork, &'static str)> = SocialNetwork::DESKTOP
        .iter()
        .filter_map(|network| network.url().map(|url| (*network, url)))
        .collect();

    let (toggle_icon, toggle_label) = if state.menu_open {
        ("fas fa-times navbar__icon", t!("nav-menu-close"))
    } else {
        ("fas fa-bars navbar__icon", t!("nav-menu-open"))
    };

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav {
            id: "navbar",
            class: theme.root_class(),
            aria_label: t!("nav-primary-label"),

            div { class: "navbar__inner",
                // Brand
                button {
                    r#type: "button",
                    class: theme.brand_class(),
                    onclick: move |_| {
                        navigator().push(HOME_PATH);
                    },
                    img { class: "navbar__logo", src: LOGO, alt: t!("brand-logo-alt") }
                    span { class: "navbar__brand-name", {t!("brand-name")} }
                }

                // Desktop links
                ul { class: theme.links_class(),
                    for entry in NavEntry::ALL {
                        NavItem {
                            key: "{entry.href()}",
                            href: entry.href().to_string(),
                            current_path: current_path.clone(),
                            {entry.label()}
                        }
                    }
                }

                // Desktop social links + call to action
                div { class: "navbar__actions",
                    for (network, url) in desktop_social {
                        a {
                            key: "{url}",
                            class: theme.social_class(),
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: network.label(),
                            i { class: "{network.icon_class()} navbar__icon" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: theme.cta_class(),
                        onclick: move |_| on_toggle_modal.call(()),
                        {t!("nav-request-demo")}
                    }
                }

                // Mobile hamburger
                button {
                    r#type: "button",
                    class: theme.toggle_class(),
                    aria_expanded: "{state.menu_open}",
                    aria_controls: "navbar-panel",
                    aria_label: toggle_label,
                    onclick: move |_| on_toggle_menu.call(()),
                    i { class: toggle_icon }
                }
            }

            // Mobile panel
            if state.menu_open {
                div { id: "navbar-panel", class: "navbar__panel",
                    ul { class: "navbar__panel-links",
                        for entry in NavEntry::ALL {
                            NavItem {
                                key: "{entry.href()}",
                                href: entry.href().to_string(),
                                current_path: current_path.clone(),
                                {entry.label()}
                            }
                        }
                    }
                    div { class: "navbar__panel-actions",
                        // Icon-only placeholders; no profile targets are wired here.
                        for network in SocialNetwork::MOBILE {
                            button {
                                key: "{network.icon_class()}",
                                r#type: "button",
                                class: "navbar__panel-social",
                                aria_label: network.label(),
                                i { class: "{network.icon_class()} navbar__icon" }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "navbar__panel-cta",
                            onclick: move |_| on_toggle_modal.call(()),
                            {t!("nav-request-demo")}
                        }
                    }
                }
            }

            {demo_modal}
        }
    }
}
