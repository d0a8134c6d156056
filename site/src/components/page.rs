//! Top-level page layout.

use leptos::prelude::*;

use super::{Features, Footer, Header, Hero, Testimonials};

/// The whole landing page: header, main sections, footer.
#[component]
pub fn BookspacePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <main class="site-main">
                <Hero />
                <Features />
                <Testimonials />
            </main>
            <Footer />
        </div>
    }
}
