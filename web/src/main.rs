// Bookspace landing page - browser entry point (build with `trunk serve`)

use bookspace_site::components::BookspacePage;
use bookspace_site::styles::SITE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <BookspacePage />
    }
}
