//! Root document component - the complete HTML page
//!
//! Wraps [`BookspacePage`] with head metadata and the inline stylesheet. When
//! enhancement is on, a small script drives the menu toggle and the counter
//! in the static page, reading its timing from the Hero's `data-*` attributes.

use super::{BookspacePage, Icon, IconName, MobileNav};
use crate::PageOptions;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn BookspaceDocument(
    /// Title, language and whether to inline the enhancement script
    options: PageOptions,
) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        enhance,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <BookspacePage />
                {enhance.then(|| view! { <EnhanceScripts /> })}
            </body>
        </html>
    }
}

/// Inert markup the enhancement script clones, plus the script itself
#[component]
fn EnhanceScripts() -> impl IntoView {
    view! {
        <template id="bookspace-templates">
            <MobileNav />
            <span data-icon="menu"><Icon name=IconName::Menu color="#EAD8B1" /></span>
            <span data-icon="close"><Icon name=IconName::Close color="#EAD8B1" /></span>
        </template>
        <script>{ENHANCE_SCRIPT}</script>
    }
}

/// Static-page behavior: menu toggle and counter animation
const ENHANCE_SCRIPT: &str = r#"
(() => {
  const templates = document.getElementById('bookspace-templates');

  // 1. Menu toggle - the collapsible nav exists only while open
  const header = document.querySelector('.site-header');
  const toggle = document.querySelector('[data-role="menu-toggle"]');
  if (templates && header && toggle) {
    let open = false;
    const icon = (name) =>
      templates.content.querySelector('[data-icon="' + name + '"] svg').cloneNode(true);

    toggle.addEventListener('click', () => {
      open = !open;
      toggle.setAttribute('aria-expanded', String(open));
      toggle.setAttribute('aria-label', open ? 'Close menu' : 'Open menu');
      toggle.replaceChildren(icon(open ? 'close' : 'menu'));

      const current = header.querySelector('.nav-mobile');
      if (open) {
        header.appendChild(templates.content.querySelector('.nav-mobile').cloneNode(true));
      } else if (current) {
        current.remove();
      }
    });
  }

  // 2. Book counter - +step every interval until the cap, then inert
  const hero = document.querySelector('[data-role="hero"]');
  const count = document.querySelector('[data-role="book-count"]');
  if (hero && count) {
    const cap = Number(hero.dataset.cap);
    const step = Number(hero.dataset.step);
    const every = Number(hero.dataset.intervalMs);
    const format = new Intl.NumberFormat('en-US');
    let books = 0;

    setInterval(() => {
      if (cap > books) {
        books = Math.min(books + step, cap);
        count.textContent = format.format(books) + '+';
      }
    }, every);
  }
})();
"#;
