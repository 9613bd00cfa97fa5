//! Site configuration loading and validation for static blog generators.
//!
//! Parses a `site.toml` (or `site.json`) record, validates it in a single
//! pass that reports every violation at once, and exposes the result as a
//! process-wide read-only handle.
//!
//! # Example
//!
//! ```no_run
//! let config = siteconf::load("site.toml")?;
//! println!("building \"{}\" by {}", config.title, config.author);
//!
//! // Anywhere else in the process, after load:
//! let config = siteconf::cfg()?;
//! assert!(config.posts_per_page > 0);
//! # Ok::<(), siteconf::ConfigError>(())
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, SiteConfig, SocialLinks, cfg,
    init_config, is_loaded, load, load_default,
};
