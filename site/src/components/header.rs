//! Fixed top bar with brand, horizontal nav and the mobile menu toggle.
//!
//! Which nav is visible on a given viewport is a CSS decision (see
//! [`crate::styles`]). The component only decides whether the collapsible nav
//! exists in the tree at all, and that follows the menu state.

use leptos::prelude::*;

use super::{Icon, IconName};
use crate::content::{BRAND, NAV_LINKS};
use crate::state::MenuToggle;

const MOBILE_NAV_ID: &str = "mobile-nav";

/// Top bar: brand, desktop nav, and the menu button that opens the mobile nav.
#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MenuToggle::default());
    view! { <HeaderBar menu=menu /> }
}

/// Header body driven by an externally owned menu signal.
#[component]
pub(crate) fn HeaderBar(menu: RwSignal<MenuToggle>) -> impl IntoView {
    let icon = move || {
        if menu.get().is_open() {
            IconName::Close
        } else {
            IconName::Menu
        }
    };

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <h1 class="brand">{BRAND}</h1>
                <nav class="nav-desktop">
                    <ul class="nav-desktop-list">
                        {NAV_LINKS.iter().map(|label| view! {
                            <li><a href="#" class="nav-link">{*label}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </nav>
                <button
                    type="button"
                    class="menu-toggle"
                    data-role="menu-toggle"
                    aria-controls=MOBILE_NAV_ID
                    aria-expanded=move || menu.get().is_open().to_string()
                    aria-label=move || icon().label()
                    on:click=move |_| menu.update(MenuToggle::toggle)
                >
                    {move || view! { <Icon name=icon() color="#EAD8B1" /> }}
                </button>
            </div>
            <Show when=move || menu.get().is_open()>
                <MobileNav />
            </Show>
        </header>
    }
}

/// Collapsible vertical nav for narrow viewports.
#[component]
pub(crate) fn MobileNav() -> impl IntoView {
    view! {
        <nav id=MOBILE_NAV_ID class="nav-mobile">
            <ul class="nav-mobile-list">
                {NAV_LINKS.iter().map(|label| view! {
                    <li><a href="#" class="nav-mobile-link">{*label}</a></li>
                }).collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
