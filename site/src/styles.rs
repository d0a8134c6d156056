//! CSS for the landing page.
//!
//! Components only pick semantic class names; this stylesheet owns the
//! palette, the layout grids and the viewport breakpoint that decides which
//! header navigation is visible.
//!
//! # Breakpoints
//!
//! - narrow: below 768px - collapsible nav behind the menu button
//! - wide: 768px and up - horizontal nav; the collapsible nav and the button
//!   are hidden whatever the menu state
//! - large: 1024px and up - the feature grid spreads to four columns

/// Wide-viewport breakpoint, in CSS pixels.
pub const WIDE_BREAKPOINT_PX: u32 = 768;

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --navy: #001F3F;
    --sand: #EAD8B1;
    --amber: #FF9F1C;
    --amber-soft: #F7B267;
    --teal: #2C7873;
    --teal-deep: #1A535C;
    --mist: #A5D8DD;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1200px;
    --ease: 300ms ease;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    line-height: 1.5;
}

a {
    color: inherit;
    text-decoration: none;
}

ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.site-main {
    flex-grow: 1;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Header */

.site-header {
    position: fixed;
    width: 100%;
    z-index: 10;
    padding: 16px;
    background: var(--navy);
    color: var(--sand);
}

.header-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.brand {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
}

.nav-desktop {
    display: none;
}

.nav-desktop-list {
    display: flex;
    gap: 24px;
}

.nav-link {
    transition: color var(--ease);
}

.nav-link:hover {
    color: var(--amber);
}

.menu-toggle {
    display: inline-flex;
    padding: 4px;
    border: 0;
    background: transparent;
    color: var(--sand);
    cursor: pointer;
}

.nav-mobile {
    margin-top: 16px;
}

.nav-mobile-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.nav-mobile-link {
    display: block;
    padding: 8px 16px;
    transition: background var(--ease), color var(--ease);
}

.nav-mobile-link:hover {
    background: var(--amber);
    color: var(--navy);
}

/* Hero */

.hero {
    padding: 160px 0 128px;
    text-align: center;
    background: linear-gradient(to right, var(--navy), var(--teal));
    color: var(--sand);
}

.hero-title {
    margin: 0 0 24px;
    font-size: 3.75rem;
    font-weight: 700;
    animation: fade-in-down 600ms ease-out both;
}

.hero-tagline {
    margin: 0 0 32px;
    font-size: 1.5rem;
    animation: fade-in-up 600ms ease-out both;
}

.btn-primary {
    padding: 12px 32px;
    border: 0;
    border-radius: 9999px;
    background: var(--amber);
    color: var(--navy);
    font-size: 1.125rem;
    font-weight: 600;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    cursor: pointer;
    transition: background var(--ease), transform var(--ease);
}

.btn-primary:hover {
    background: var(--amber-soft);
    transform: scale(1.05);
}

.hero-stat {
    margin: 48px 0 0;
    font-size: 1.25rem;
}

.book-count {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--amber);
}

@keyframes fade-in-down {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

/* Sections */

.section {
    padding: 96px 0;
}

.section-title {
    margin: 0 0 64px;
    font-size: 2.25rem;
    font-weight: 700;
    text-align: center;
}

.features {
    background: var(--teal-deep);
}

.features .section-title {
    color: var(--sand);
}

.feature-grid,
.testimonial-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.feature-card {
    overflow: hidden;
    border-radius: 12px;
    background: var(--teal);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    transition: transform var(--ease);
}

.feature-card:hover {
    transform: scale(1.05);
}

.feature-icon-band {
    display: flex;
    justify-content: center;
    padding: 24px;
    background: linear-gradient(to right, var(--navy), var(--teal));
}

.feature-icon {
    color: var(--amber);
}

.feature-body {
    padding: 24px;
}

.feature-title {
    margin: 0 0 8px;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--sand);
}

.feature-description {
    margin: 0;
    color: var(--mist);
}

.testimonials {
    background: var(--sand);
}

.testimonials .section-title {
    color: var(--navy);
}

.testimonial-card {
    padding: 24px;
    border-radius: 12px;
    background: var(--teal);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    transition: box-shadow var(--ease);
}

.testimonial-card:hover {
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
}

.testimonial-quote {
    margin: 0 0 16px;
    font-style: italic;
    color: var(--mist);
}

.testimonial-author {
    display: flex;
    align-items: center;
}

.avatar {
    width: 48px;
    height: 48px;
    margin-right: 16px;
    border-radius: 9999px;
    background: linear-gradient(to right, var(--navy), var(--amber));
}

.testimonial-name {
    margin: 0;
    font-weight: 600;
    color: var(--sand);
}

.testimonial-role {
    margin: 0;
    color: var(--mist);
}

/* Footer */

.site-footer {
    padding: 48px 0;
    background: var(--navy);
    color: var(--sand);
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
    margin-bottom: 32px;
}

.footer-heading {
    margin: 0 0 16px;
    font-size: 1.25rem;
    font-weight: 600;
}

.footer-links li {
    display: flex;
    align-items: center;
    margin-bottom: 8px;
}

.footer-chevron {
    margin-right: 8px;
    color: var(--amber);
}

.footer-link:hover {
    color: var(--amber);
}

.social-links {
    display: flex;
    gap: 16px;
}

.newsletter-form {
    display: flex;
}

.newsletter-input {
    width: 100%;
    padding: 8px 16px;
    border: 0;
    border-radius: 6px 0 0 6px;
    background: var(--teal-deep);
    color: var(--sand);
}

.newsletter-input:focus {
    outline: 2px solid var(--amber);
}

.newsletter-submit {
    padding: 8px 16px;
    border: 0;
    border-radius: 0 6px 6px 0;
    background: var(--amber);
    color: var(--navy);
    cursor: pointer;
    transition: background var(--ease);
}

.newsletter-submit:hover {
    background: var(--amber-soft);
}

.copyright {
    padding-top: 32px;
    text-align: center;
    border-top: 1px solid rgba(234, 216, 177, 0.2);
}

.copyright p {
    margin: 0;
}

/* Wide viewports: the horizontal nav wins, menu state is ignored */

@media (min-width: 768px) {
    .nav-desktop {
        display: block;
    }

    .menu-toggle,
    .nav-mobile {
        display: none !important;
    }

    .feature-grid,
    .testimonial-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .footer-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

@media (min-width: 1024px) {
    .feature-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .testimonial-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_breakpoint_hides_collapsible_nav() {
        let media = format!("@media (min-width: {}px)", WIDE_BREAKPOINT_PX);
        let wide = SITE_CSS.split(&media).nth(1).expect("wide media query present");
        let wide = wide.split("@media").next().unwrap_or_default();

        assert!(wide.contains(".nav-mobile"));
        assert!(wide.contains(".menu-toggle"));
        assert!(wide.contains("display: none !important"));
        assert!(wide.contains(".nav-desktop"));
    }

    #[test]
    fn narrow_default_hides_desktop_nav() {
        let narrow = SITE_CSS.split("@media").next().unwrap_or_default();
        assert!(narrow.contains(".nav-desktop {\n    display: none;"));
    }
}
