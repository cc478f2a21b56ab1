//! Scroll-dependent theme classes.
//!
//! The page hero sits behind a transparent header, so until the page scrolls
//! the navbar uses light text on no background. Once scrolled, it switches to
//! a white bar with dark text. Every themed element reads its class from here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Transparent,
    Scrolled,
}

impl Theme {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            Theme::Scrolled
        } else {
            Theme::Transparent
        }
    }

    /// Root `nav` element classes.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Transparent => "navbar navbar--transparent",
            Theme::Scrolled => "navbar navbar--scrolled",
        }
    }

    pub fn brand_class(self) -> &'static str {
        match self {
            Theme::Transparent => "navbar__brand navbar__text--light",
            Theme::Scrolled => "navbar__brand navbar__text--dark",
        }
    }

    /// Desktop link list.
    pub fn links_class(self) -> &'static str {
        match self {
            Theme::Transparent => "navbar__links navbar__text--light",
            Theme::Scrolled => "navbar__links navbar__text--dark",
        }
    }

    pub fn social_class(self) -> &'static str {
        match self {
            Theme::Transparent => "navbar__social navbar__text--light",
            Theme::Scrolled => "navbar__social navbar__text--muted",
        }
    }

    /// Desktop "Request Demo" button.
    pub fn cta_class(self) -> &'static str {
        match self {
            Theme::Transparent => "navbar__cta navbar__cta--light",
            Theme::Scrolled => "navbar__cta navbar__cta--gradient",
        }
    }

    pub fn toggle_class(self) -> &'static str {
        match self {
            Theme::Transparent => "navbar__toggle navbar__text--light",
            Theme::Scrolled => "navbar__toggle navbar__text--dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_background_follows_scroll_state() {
        assert_eq!(
            Theme::from_scrolled(true).root_class(),
            "navbar navbar--scrolled"
        );
        assert_eq!(
            Theme::from_scrolled(false).root_class(),
            "navbar navbar--transparent"
        );
    }

    #[test]
    fn every_element_switches_with_the_theme() {
        let pairs = [
            (Theme::Transparent.brand_class(), Theme::Scrolled.brand_class()),
            (Theme::Transparent.links_class(), Theme::Scrolled.links_class()),
            (Theme::Transparent.social_class(), Theme::Scrolled.social_class()),
            (Theme::Transparent.cta_class(), Theme::Scrolled.cta_class()),
            (Theme::Transparent.toggle_class(), Theme::Scrolled.toggle_class()),
        ];
        for (light, dark) in pairs {
            assert_ne!(light, dark);
        }
    }
}
