//! Shared UI crate for the SmartSalonBot site. The navbar and the pieces it
//! depends on live here; platform crates only supply routes and launch.

pub mod core;
pub mod i18n;
pub mod views;

mod navbar;
pub mod components {
    // Site navbar and dialog registry (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::NavBuilder;
    pub use app_navbar::Navbar;
    pub use app_navbar::NavbarView;

    // Reference demo dialog shell (components/demo_modal.rs)
    pub mod demo_modal;
    pub use demo_modal::DemoModal;

    // Leaf nav entry (ui/src/navbar.rs)
    pub use super::navbar::NavItem;
}
