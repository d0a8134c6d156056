//! # bookspace-site
//!
//! Leptos components for the Bookspace landing page.
//!
//! The same component tree serves two hosts:
//!
//! - **Static HTML** (`ssr`, default) - [`render_page`] turns the page into a
//!   complete document with inline CSS and an optional enhancement script.
//! - **Browser** (`csr`) - the `web` crate mounts [`components::BookspacePage`]
//!   and the header toggle and hero counter run as reactive state.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookspace_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components
//! - [`content`] - literal page content
//! - [`state`] - the menu toggle and the book counter
//! - [`timer`] - repeating timers with scoped release
//! - [`styles`] - CSS constants
//! - [`format`] - number formatting

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod format;
pub mod state;
pub mod styles;
pub mod timer;

use components::BookspaceDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the landing page as a complete HTML document.
///
/// The output shows the initial state of every component: menu closed and the
/// book counter at zero.
///
/// # Example
///
/// ```rust
/// use bookspace_site::{render_page, PageOptions};
///
/// let options = PageOptions {
///     enhance: false,
///     ..Default::default()
/// };
/// let html = render_page(&options);
/// assert!(!html.contains("<script"));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <BookspaceDocument options=options.clone() /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Document-level settings for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Contents of `<title>`
    pub title: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// Include the inline script that animates the static page
    pub enhance: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: content::BRAND.into(),
            lang: "en".into(),
            enhance: true,
        }
    }
}
