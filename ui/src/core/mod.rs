//! Platform-agnostic pieces of the navbar: state, theming, signals, site constants.

pub mod nav_state;
pub mod platform;
pub mod site;
pub mod theme;
pub mod viewport;
