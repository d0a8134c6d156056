//! Footer: quick links, social column and the newsletter form stub.

use leptos::prelude::*;

use super::{Icon, IconName};
use crate::content::{BRAND, COPYRIGHT_YEAR, FOOTER_LINKS};

/// Site footer with quick links, the newsletter form and the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-heading">"Quick Links"</h3>
                        <ul class="footer-links">
                            {FOOTER_LINKS.iter().map(|label| view! {
                                <li>
                                    <Icon
                                        name=IconName::ChevronRight
                                        size="16"
                                        class="footer-chevron"
                                    />
                                    <a href="#" class="footer-link">{*label}</a>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer-heading">"Follow Us"</h3>
                        <div class="social-links"></div>
                    </div>
                    <div>
                        <h3 class="footer-heading">"Newsletter"</h3>
                        <NewsletterForm />
                    </div>
                </div>
                <div class="copyright">
                    <p>{format!("\u{a9} {COPYRIGHT_YEAR} {BRAND}. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}

/// Email field and submit button. No submission handler is attached.
#[component]
fn NewsletterForm() -> impl IntoView {
    view! {
        <form class="newsletter-form">
            <input
                type="email"
                name="email"
                placeholder="Your email"
                aria-label="Your email"
                class="newsletter-input"
            />
            <button type="submit" class="newsletter-submit">"Subscribe"</button>
        </form>
    }
}
