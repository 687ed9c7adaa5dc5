/// A link in the site navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    /// Whether this link points at `current_path` or one of its children
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path
            || current_path
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "About",
        path: "/about",
        icon: "/header/clipboard.svg",
    },
    NavItem {
        label: "Library",
        path: "/library",
        icon: "/header/book.svg",
    },
    NavItem {
        label: "Blog",
        path: "/blog",
        icon: "/header/bookmark.svg",
    },
];

/// Which of the three navigation layouts to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    Desktop,
    Mobile,
    Footer,
}

/// CSS classes for one navigation layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavClasses {
    pub nav: &'static str,
    pub list: &'static str,
    pub item: &'static str,
    pub link: &'static str,
}

impl NavVariant {
    /// The footer layout wins over the mobile one.
    pub fn from_flags(mobile: bool, footer: bool) -> Self {
        match (mobile, footer) {
            (_, true) => NavVariant::Footer,
            (true, false) => NavVariant::Mobile,
            (false, false) => NavVariant::Desktop,
        }
    }

    pub fn shows_icons(self) -> bool {
        matches!(self, NavVariant::Mobile)
    }

    pub fn classes(self) -> NavClasses {
        match self {
            NavVariant::Desktop => NavClasses {
                nav: "nav",
                list: "nav-list",
                item: "nav-list-item",
                link: "nav-list-item-link",
            },
            NavVariant::Mobile => NavClasses {
                nav: "mobile-nav",
                list: "mobile-nav-list",
                item: "mobile-nav-list-item",
                link: "mobile-nav-list-item-link",
            },
            NavVariant::Footer => NavClasses {
                nav: "footer-nav",
                list: "footer-nav-list",
                item: "footer-nav-list-item",
                link: "footer-nav-list-item-link",
            },
        }
    }
}
