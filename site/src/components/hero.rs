//! Welcome banner with the live book counter.

use leptos::prelude::*;

use crate::format::format_count;
use crate::state::BookCounter;
use crate::timer::{CounterAnimation, IntervalScheduler, Scheduler};

/// Welcome banner. Its book counter runs up to [`BookCounter::CAP`] once mounted.
#[component]
pub fn Hero() -> impl IntoView {
    let books = RwSignal::new(BookCounter::new());

    // Effects only run in the browser; a server render shows the initial count.
    Effect::new(move |_| animate_books(&IntervalScheduler, books));

    // Timing for the static-page script
    let cap = BookCounter::CAP.to_string();
    let step = BookCounter::STEP.to_string();
    let interval_ms = BookCounter::INTERVAL.as_millis().to_string();

    view! {
        <section
            class="hero"
            data-role="hero"
            data-cap=cap
            data-step=step
            data-interval-ms=interval_ms
        >
            <div class="container">
                <h2 class="hero-title">"Welcome to Bookspace"</h2>
                <p class="hero-tagline">"Discover, Read, and Create Stories"</p>
                <button type="button" class="btn-primary">"Get Started"</button>
                <p class="hero-stat">
                    "Join our community of "
                    <span class="book-count" data-role="book-count">
                        {move || format!("{}+", format_count(books.get().value()))}
                    </span>
                    " books"
                </p>
            </div>
        </section>
    }
}

/// Start the counter animation in the current reactive scope.
///
/// The animation is parked in the scope's arena, so cleaning up the scope
/// drops it and cancels the timer.
pub(crate) fn animate_books<S>(scheduler: &S, books: RwSignal<BookCounter>)
where
    S: Scheduler,
    S::Handle: 'static,
{
    match CounterAnimation::start(scheduler, books) {
        Ok(animation) => {
            StoredValue::new_local(animation);
        }
        Err(err) => leptos::logging::warn!("[bookspace] book counter not started: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::timer::manual::ManualScheduler;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn server_render_shows_initial_count_and_timing_data() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Hero /> }.to_html());

        assert!(html.contains("Welcome to Bookspace"));
        assert!(html.contains("0+"));
        assert!(html.contains("data-cap=\"10000\""));
        assert!(html.contains("data-step=\"100\""));
        assert!(html.contains("data-interval-ms=\"20\""));
    }

    #[test]
    fn scope_cleanup_cancels_the_counter_timer() {
        let scheduler = ManualScheduler::new();
        let root = Owner::new();
        let books = root.with(|| RwSignal::new(BookCounter::new()));

        let hero = root.with(Owner::new);
        hero.with(|| animate_books(&scheduler, books));
        assert_eq!(scheduler.active_timers(), 1);

        scheduler.advance(Duration::from_millis(200));
        assert_eq!(books.get_untracked().value(), 1_000);

        hero.cleanup();
        assert_eq!(scheduler.cancellations(), 1);
        assert_eq!(scheduler.active_timers(), 0);

        assert_eq!(scheduler.advance(Duration::from_millis(1_000)), 0);
        assert_eq!(books.get_untracked().value(), 1_000);
        assert_eq!(scheduler.cancellations(), 1);
    }

    #[test]
    fn zero_ticks_leave_the_counter_at_zero() {
        let scheduler = ManualScheduler::new();
        let owner = Owner::new();
        let books = owner.with(|| {
            let books = RwSignal::new(BookCounter::new());
            animate_books(&scheduler, books);
            books
        });

        assert_eq!(scheduler.advance(Duration::from_millis(19)), 0);
        assert_eq!(books.get_untracked().value(), 0);
        assert_eq!(scheduler.cancellations(), 0);
    }
}
