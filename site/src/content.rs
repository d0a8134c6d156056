//! Literal page content.
//!
//! Everything the page shows is baked in here as ordered static arrays.
//! Components map these into markup in the order given.

use serde::Serialize;

use crate::components::IconName;

/// Brand name shown in the header and the footer.
pub const BRAND: &str = "Bookspace";

/// Header navigation labels (all anchors point at `#`).
pub const NAV_LINKS: [&str; 4] = ["Home", "Library", "Stories", "About"];

/// Footer "Quick Links" labels.
pub const FOOTER_LINKS: [&str; 3] = ["About Us", "Contact", "Privacy Policy"];

/// Year printed in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// One card in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    /// Icon drawn in the card's top band
    pub icon: IconName,
    /// Card heading
    pub title: &'static str,
    /// One-sentence blurb
    pub description: &'static str,
}

/// One quote in the testimonials grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestimonialEntry {
    /// Who said it
    pub name: &'static str,
    /// What they do
    pub role: &'static str,
    /// The quote, without quote marks
    pub content: &'static str,
}

/// The feature grid, in display order.
pub const FEATURES: [FeatureEntry; 4] = [
    FeatureEntry {
        icon: IconName::Book,
        title: "E-books Library",
        description: "Access a vast collection of digital books tailored for students.",
    },
    FeatureEntry {
        icon: IconName::Users,
        title: "Interactive Reading",
        description: "Highlight, take notes, and discuss with other readers.",
    },
    FeatureEntry {
        icon: IconName::FileText,
        title: "Quotes & Stories",
        description: "Get inspired and write your own stories based on your favorite quotes.",
    },
    FeatureEntry {
        icon: IconName::Award,
        title: "Rewards & Competitions",
        description: "Earn points, participate in quizzes, and compete with others.",
    },
];

/// The testimonials grid, in display order.
pub const TESTIMONIALS: [TestimonialEntry; 3] = [
    TestimonialEntry {
        name: "Alex Johnson",
        role: "Student",
        content: "Bookspace has revolutionized the way I read and learn. The interactive features make studying so much more engaging!",
    },
    TestimonialEntry {
        name: "Sarah Lee",
        role: "Teacher",
        content: "As an educator, I find Bookspace to be an invaluable tool for encouraging reading and writing among my students.",
    },
    TestimonialEntry {
        name: "Mike Brown",
        role: "Parent",
        content: "My kids love using Bookspace. It's made reading fun for them, and I can easily track their progress.",
    },
];

/// All literal content in one serializable bundle (used by `bookspace content`).
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    /// See [`BRAND`]
    pub brand: &'static str,
    /// See [`NAV_LINKS`]
    pub nav_links: &'static [&'static str],
    /// See [`FEATURES`]
    pub features: &'static [FeatureEntry],
    /// See [`TESTIMONIALS`]
    pub testimonials: &'static [TestimonialEntry],
    /// See [`FOOTER_LINKS`]
    pub footer_links: &'static [&'static str],
    /// See [`COPYRIGHT_YEAR`]
    pub copyright_year: u16,
}

impl PageContent {
    /// The content this build of the page ships with.
    pub fn current() -> Self {
        Self {
            brand: BRAND,
            nav_links: &NAV_LINKS,
            features: &FEATURES,
            testimonials: &TESTIMONIALS,
            footer_links: &FOOTER_LINKS,
            copyright_year: COPYRIGHT_YEAR,
        }
    }
}
