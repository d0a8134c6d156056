//! Configuration file support for bookspace.
//!
//! Loads an optional `bookspace.toml`. Command-line flags override it.

use std::path::{Path, PathBuf};

use bookspace_site::PageOptions;
use serde::Deserialize;
use thiserror::Error;

use crate::args::RenderArgs;

pub const DEFAULT_CONFIG_FILE: &str = "bookspace.toml";
pub const DEFAULT_OUT: &str = "dist/index.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document title
    pub title: Option<String>,
    /// `lang` attribute of `<html>`
    pub lang: Option<String>,
    /// Include the inline enhancement script
    pub enhance: Option<bool>,
    /// Where `render` writes the page
    pub out: Option<PathBuf>,
}

impl SiteConfig {
    /// Load `explicit` if given; otherwise `bookspace.toml` in `dir` when it
    /// exists, or the defaults when it doesn't.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = dir.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Page options after applying command-line overrides.
    pub fn page_options(&self, args: &RenderArgs) -> PageOptions {
        let defaults = PageOptions::default();
        PageOptions {
            title: args
                .title
                .clone()
                .or_else(|| self.title.clone())
                .unwrap_or(defaults.title),
            lang: args
                .lang
                .clone()
                .or_else(|| self.lang.clone())
                .unwrap_or(defaults.lang),
            enhance: !args.no_script && self.enhance.unwrap_or(defaults.enhance),
        }
    }

    /// Output path after applying the `--out` override.
    pub fn out_path(&self, args: &RenderArgs) -> PathBuf {
        args.out
            .clone()
            .or_else(|| self.out.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(None, temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.page_options(&RenderArgs::default()), PageOptions::default());
        assert_eq!(config.out_path(&RenderArgs::default()), PathBuf::from(DEFAULT_OUT));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("nope.toml");
        let err = SiteConfig::load(Some(&missing), temp.path()).expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"
title = "Bookspace for Schools"
lang = "en-GB"
enhance = false
out = "public/index.html"
"#,
        )
        .expect("write config");

        let config = SiteConfig::load(None, temp.path()).expect("valid config");
        let options = config.page_options(&RenderArgs::default());
        assert_eq!(options.title, "Bookspace for Schools");
        assert_eq!(options.lang, "en-GB");
        assert!(!options.enhance);
        assert_eq!(
            config.out_path(&RenderArgs::default()),
            PathBuf::from("public/index.html")
        );
    }

    #[test]
    fn test_flags_override_file() {
        let config = SiteConfig {
            title: Some("From file".into()),
            enhance: Some(true),
            out: Some(PathBuf::from("file.html")),
            ..Default::default()
        };
        let args = RenderArgs {
            title: Some("From flag".into()),
            no_script: true,
            out: Some(PathBuf::from("flag.html")),
            ..Default::default()
        };

        let options = config.page_options(&args);
        assert_eq!(options.title, "From flag");
        assert!(!options.enhance);
        assert_eq!(options.lang, "en");
        assert_eq!(config.out_path(&args), PathBuf::from("flag.html"));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "colour = \"navy\"\n").expect("write config");

        let err = SiteConfig::load(Some(&path), temp.path()).expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
