//! Subcommand implementations.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use bookspace_site::content::PageContent;
use bookspace_site::format::format_count;
use bookspace_site::render_page;
use bookspace_site::state::BookCounter;
use bookspace_site::timer::CounterAnimation;
use bookspace_site::timer::manual::ManualScheduler;
use tracing::{debug, info};

use crate::args::{CounterArgs, RenderArgs};
use crate::config::SiteConfig;

/// Render the page and write it to disk. Relative paths resolve against `cwd`.
pub fn render(args: &RenderArgs, cwd: &Path) -> Result<PathBuf> {
    let config_path = args.config.as_ref().map(|path| cwd.join(path));
    let config = SiteConfig::load(config_path.as_deref(), cwd).context("loading site config")?;
    debug!(?config, "resolved config");

    let options = config.page_options(args);
    let out = cwd.join(config.out_path(args));
    debug!(?options, out = %out.display(), "rendering page");

    let html = render_page(&options);

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&out, &html).with_context(|| format!("writing {}", out.display()))?;

    info!(path = %out.display(), bytes = html.len(), "page written");
    Ok(out)
}

/// Run the real hero animation on simulated time and report the count.
pub fn counter(args: &CounterArgs, out: &mut impl Write) -> Result<u32> {
    if args.sample == Some(0) {
        bail!("--sample must be greater than zero");
    }

    let scheduler = ManualScheduler::new();
    let books = Rc::new(RefCell::new(BookCounter::new()));
    let animation = CounterAnimation::start(&scheduler, Rc::clone(&books))
        .context("starting the counter animation")?;

    // Ticks past the settle time cannot move the count, so simulated time
    // stops there.
    let total = Duration::from_millis(args.ms);
    let settle_at = |elapsed: Duration| {
        let target = elapsed.min(BookCounter::SETTLE_TIME);
        if target > scheduler.now() {
            scheduler.advance(target - scheduler.now());
        }
    };
    if let Some(sample) = args.sample {
        let step = Duration::from_millis(sample);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            elapsed += step.min(total - elapsed);
            settle_at(elapsed);
            let ms = elapsed.as_millis();
            writeln!(out, "{ms}ms\t{}+", format_count(books.borrow().value()))?;
        }
    } else {
        settle_at(total);
    }

    let value = books.borrow().value();
    animation.stop();
    debug!(
        simulated_ms = args.ms,
        cancellations = scheduler.cancellations(),
        "animation torn down"
    );

    if args.sample.is_none() {
        writeln!(out, "{}+", format_count(value))?;
    }
    Ok(value)
}

/// Dump the literal page content as pretty JSON.
pub fn content(out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&PageContent::current())
        .context("serializing page content")?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_counter(ms: u64, sample: Option<u64>) -> (u32, String) {
        let mut buf = Vec::new();
        let value = counter(&CounterArgs { ms, sample }, &mut buf).expect("counter runs");
        (value, String::from_utf8(buf).expect("utf8 output"))
    }

    #[test]
    fn counter_hits_cap_at_two_seconds() {
        let (value, out) = run_counter(2000, None);
        assert_eq!(value, 10_000);
        assert_eq!(out, "10,000+\n");
    }

    #[test]
    fn counter_stays_at_cap_afterwards() {
        let (value, _) = run_counter(3000, None);
        assert_eq!(value, 10_000);
    }

    #[test]
    fn counter_partial_progress() {
        let (value, out) = run_counter(250, None);
        assert_eq!(value, 1_200);
        assert_eq!(out, "1,200+\n");
    }

    #[test]
    fn counter_samples_trajectory() {
        let (value, out) = run_counter(100, Some(40));
        assert_eq!(value, 500);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["40ms\t200+", "80ms\t400+", "100ms\t500+"]);
    }

    #[test]
    fn counter_settles_without_walking_huge_durations() {
        let (value, out) = run_counter(u64::MAX, None);
        assert_eq!(value, 10_000);
        assert_eq!(out, "10,000+\n");
    }

    #[test]
    fn counter_samples_past_the_cap() {
        let (value, out) = run_counter(86_400_000, Some(43_200_000));
        assert_eq!(value, 10_000);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["43200000ms\t10,000+", "86400000ms\t10,000+"]);
    }

    #[test]
    fn counter_rejects_zero_sample() {
        let mut buf = Vec::new();
        let err = counter(&CounterArgs { ms: 100, sample: Some(0) }, &mut buf)
            .expect_err("zero sample");
        assert!(err.to_string().contains("--sample"));
    }

    #[test]
    fn render_writes_into_nested_directory() {
        let temp = TempDir::new().expect("temp dir");
        let args = RenderArgs {
            out: Some(PathBuf::from("public/site/index.html")),
            ..Default::default()
        };

        let path = render(&args, temp.path()).expect("render");
        assert_eq!(path, temp.path().join("public/site/index.html"));
        let html = std::fs::read_to_string(path).expect("read page");
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn content_is_valid_json() {
        let mut buf = Vec::new();
        content(&mut buf).expect("content");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value["features"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["testimonials"][0]["name"], "Alex Johnson");
    }
}
