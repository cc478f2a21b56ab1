use dioxus::prelude::*;

use ui::components::{register_nav, DemoModal, NavBuilder, Navbar};
use ui::views::{Contact, Demo, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/demo")]
    Demo {},
    #[route("/contact")]
    Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

fn demo_modal(is_open: bool, on_toggle: EventHandler<()>) -> Element {
    rsx!(DemoModal { is_open, on_toggle })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { demo_modal });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the shared `Navbar` fed with the current route path.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navbar { current_path: route.to_string() }
        Outlet::<Route> {}
    }
}
