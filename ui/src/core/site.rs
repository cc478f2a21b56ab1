//! Static site configuration. None of this is configurable at runtime.

/// Viewport width (CSS px) at and above which the desktop layout applies.
pub const BREAKPOINT_PX: f64 = 960.0;

/// Path the brand control navigates to.
pub const HOME_PATH: &str = "/";

/// Contact target offered inside the demo request dialog.
pub const DEMO_CONTACT_MAILTO: &str = "mailto:hello@smartsalonbot.com?subject=Demo%20request";

/// Primary navigation entries shown in both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Home,
    Demo,
    Contact,
}

impl NavEntry {
    pub const ALL: [NavEntry; 3] = [NavEntry::Home, NavEntry::Demo, NavEntry::Contact];

    pub fn href(self) -> &'static str {
        match self {
            NavEntry::Home => HOME_PATH,
            NavEntry::Demo => "/demo",
            NavEntry::Contact => "/contact",
        }
    }

    pub fn label(self) -> String {
        match self {
            NavEntry::Home => crate::t!("nav-home"),
            NavEntry::Demo => crate::t!("nav-demo"),
            NavEntry::Contact => crate::t!("nav-contact"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    YouTube,
    Facebook,
    Twitter,
}

impl SocialNetwork {
    /// Live outbound links in the desktop layout.
    pub const DESKTOP: [SocialNetwork; 3] = [
        SocialNetwork::Instagram,
        SocialNetwork::YouTube,
        SocialNetwork::Facebook,
    ];

    /// Icon-only placeholders in the mobile panel. They carry no link target.
    pub const MOBILE: [SocialNetwork; 3] = [
        SocialNetwork::Twitter,
        SocialNetwork::Facebook,
        SocialNetwork::Instagram,
    ];

    /// Outbound profile URL, if the network has one.
    pub fn url(self) -> Option<&'static str> {
        match self {
            SocialNetwork::Instagram => Some(
                "https://www.instagram.com/smartsalonbot?utm_source=qr&igsh=MzI4dXpzdzVlczE5",
            ),
            SocialNetwork::YouTube => Some("https://www.youtube.com/@smartsalonbot-l7o"),
            SocialNetwork::Facebook => Some("https://www.facebook.com/share/19BjsKic2q/"),
            SocialNetwork::Twitter => None,
        }
    }

    /// Font Awesome brand icon class.
    pub fn icon_class(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "fab fa-instagram",
            SocialNetwork::YouTube => "fab fa-youtube",
            SocialNetwork::Facebook => "fab fa-facebook",
            SocialNetwork::Twitter => "fab fa-twitter",
        }
    }

    pub fn label(self) -> String {
        match self {
            SocialNetwork::Instagram => crate::t!("social-instagram"),
            SocialNetwork::YouTube => crate::t!("social-youtube"),
            SocialNetwork::Facebook => crate::t!("social-facebook"),
            SocialNetwork::Twitter => crate::t!("social-twitter"),
        }
    }
}

/// Exact route match, ignoring one trailing slash on either side.
pub fn is_active_path(current: &str, href: &str) -> bool {
    fn normalize(path: &str) -> &str {
        match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        }
    }
    normalize(current) == normalize(href)
}
