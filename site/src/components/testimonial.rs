//! Testimonial card and the testimonials grid.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;

/// One quote card: the quote in typographic quotes, then avatar, name and role.
#[component]
pub fn Testimonial(
    /// Author's name
    name: &'static str,
    /// Author's role
    role: &'static str,
    /// Quote text, without quote marks
    content: &'static str,
) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <p class="testimonial-quote">{format!("\u{201c}{content}\u{201d}")}</p>
            <div class="testimonial-author">
                <div class="avatar"></div>
                <div>
                    <h4 class="testimonial-name">{name}</h4>
                    <p class="testimonial-role">{role}</p>
                </div>
            </div>
        </div>
    }
}

/// "What Our Users Say" section with every entry of [`TESTIMONIALS`].
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <h2 class="section-title">"What Our Users Say"</h2>
                <div class="testimonial-grid">
                    {TESTIMONIALS.iter().map(|entry| view! {
                        <Testimonial name=entry.name role=entry.role content=entry.content />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_three_cards_in_order() {
        let html = view! { <Testimonials /> }.to_html();

        assert_eq!(html.matches("class=\"testimonial-card\"").count(), 3);
        let alex = html.find("Alex Johnson").expect("Alex rendered");
        let sarah = html.find("Sarah Lee").expect("Sarah rendered");
        let mike = html.find("Mike Brown").expect("Mike rendered");
        assert!(alex < sarah && sarah < mike);
    }

    #[test]
    fn card_shows_name_role_and_quote() {
        let html = view! {
            <Testimonial name="Ada" role="Librarian" content="Shelves never looked better" />
        }
        .to_html();

        assert!(html.contains("Ada"));
        assert!(html.contains("Librarian"));
        assert!(html.contains("Shelves never looked better"));
    }
}
