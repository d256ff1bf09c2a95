#![forbid(unsafe_code)]

//! Classification of item links.

use std::fmt;

/// Where activating a link takes the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Smooth-scroll to the element with this id on the current page.
    Section(String),
    /// Scroll to the top of the current page.
    Top,
    /// Ordinary navigation to another URL.
    Page(String),
}

impl NavTarget {
    /// Classify a link: `#id` is a section, `#` or empty is the top, anything
    /// else is a page.
    #[must_use]
    pub fn parse(link: &str) -> Self {
        let link = link.trim();
        match link.strip_prefix('#') {
            Some("") => Self::Top,
            Some(id) => Self::Section(id.to_string()),
            None if link.is_empty() => Self::Top,
            None => Self::Page(link.to_string()),
        }
    }

    /// Whether this target stays on the current page.
    #[must_use]
    pub fn is_in_page(&self) -> bool {
        !matches!(self, Self::Page(_))
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(id) => write!(f, "#{id}"),
            Self::Top => f.write_str("#"),
            Self::Page(url) => f.write_str(url),
        }
    }
}
