//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! BookspaceDocument
//! └── BookspacePage
//!     ├── Header (menu toggle state)
//!     ├── main
//!     │   ├── Hero (book counter state)
//!     │   ├── Features
//!     │   │   └── Feature x4
//!     │   └── Testimonials
//!     │       └── Testimonial x3
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`] for static HTML,
//! or mounted in the browser:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use bookspace_site::components::BookspacePage;
//!
//! leptos::mount::mount_to_body(|| view! { <BookspacePage /> });
//! ```

mod document;
mod feature;
mod footer;
mod header;
mod hero;
mod icons;
mod page;
mod testimonial;

pub use document::BookspaceDocument;
pub use feature::{Feature, Features};
pub use footer::Footer;
pub use header::Header;
pub(crate) use header::MobileNav;
pub use hero::Hero;
pub use icons::*;
pub use page::BookspacePage;
pub use testimonial::{Testimonial, Testimonials};
