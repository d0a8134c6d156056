//! Feature card and the feature grid.

use leptos::prelude::*;

use super::{Icon, IconName};
use crate::content::FEATURES;

/// One feature: icon band on top, title and description below.
#[component]
pub fn Feature(
    /// Icon for the top band
    icon: IconName,
    /// Card heading
    title: &'static str,
    /// Card body text
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon-band">
                <Icon name=icon size="48" class="feature-icon" />
            </div>
            <div class="feature-body">
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
            </div>
        </div>
    }
}

/// "Our Features" section with every entry of [`FEATURES`].
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section features">
            <div class="container">
                <h2 class="section-title">"Our Features"</h2>
                <div class="feature-grid">
                    {FEATURES.iter().map(|entry| view! {
                        <Feature
                            icon=entry.icon
                            title=entry.title
                            description=entry.description
                        />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
