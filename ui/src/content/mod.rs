//! Static page content. Views render these arrays as-is.

pub mod about;
pub mod api_docs;
pub mod business;
pub mod features;
pub mod footer;
pub mod home;
pub mod pricing;
pub mod workflow;

/// Icon glyph, title and one-line description shared by most card grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// `★` repeated `rating` times, capped at five.
pub fn star_row(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}
