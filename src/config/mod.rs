//! Site configuration management for `site.toml` / `site.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── raw        # Lenient first-stage record (collect-all validation)
//! ├── social     # SocialLinks sub-record
//! ├── types/     # Utility types
//! │   ├── error  # ConfigError, ConfigDiagnostics
//! │   ├── field  # FieldPath
//! │   └── handle # Global config handle
//! ├── util       # File discovery and format detection
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Fields
//!
//! | Field              | Required | Purpose                              |
//! |--------------------|----------|--------------------------------------|
//! | `title`            | yes      | Site title                           |
//! | `author`           | yes      | Author name                          |
//! | `description`      | no       | Site description                     |
//! | `primaryColor`     | yes      | Theme color, `#RRGGBB`               |
//! | `showHeaderImage`  | no       | Render a header image                |
//! | `showShareButtons` | no       | Render share buttons on posts        |
//! | `postsPerPage`     | yes      | Pagination size, positive integer    |
//! | `social`           | no       | Outbound profile URLs                |

pub mod raw;
pub mod social;
pub mod types;
mod util;

pub use social::SocialLinks;
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, is_loaded,
};

use raw::RawSiteConfig;
use util::{ConfigFormat, find_config_file};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

// ============================================================================
// root configuration
// ============================================================================

/// The validated, immutable configuration record for a site build.
///
/// Field names follow the external camelCase contract on the wire
/// (`primaryColor`, `postsPerPage`, ...); construct through [`load`] or
/// [`SiteConfig::from_str`] so validation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Site description.
    pub description: String,

    /// Theme color in `#RRGGBB` form.
    pub primary_color: String,

    /// Whether the rendered site shows a header image.
    pub show_header_image: bool,

    /// Whether posts show share buttons.
    pub show_share_buttons: bool,

    /// Posts per index page, always positive after validation.
    pub posts_per_page: usize,

    /// Outbound profile URLs.
    pub social: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            primary_color: String::new(),
            show_header_image: false,
            show_share_buttons: false,
            posts_per_page: 0,
            social: SocialLinks::default(),
        }
    }
}

/// Field paths for [`SiteConfig`] diagnostics.
pub struct SiteConfigFields {
    pub title: FieldPath,
    pub author: FieldPath,
    pub description: FieldPath,
    pub primary_color: FieldPath,
    pub show_header_image: FieldPath,
    pub show_share_buttons: FieldPath,
    pub posts_per_page: FieldPath,
    pub social: FieldPath,
}

impl SiteConfig {
    /// External field names, for diagnostics that cite the record as written.
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        title: FieldPath::new("title"),
        author: FieldPath::new("author"),
        description: FieldPath::new("description"),
        primary_color: FieldPath::new("primaryColor"),
        show_header_image: FieldPath::new("showHeaderImage"),
        show_share_buttons: FieldPath::new("showShareButtons"),
        posts_per_page: FieldPath::new("postsPerPage"),
        social: FieldPath::new("social"),
    };

    /// Parse and validate a TOML configuration record.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (raw, ignored) = Self::parse_with_ignored(content)?;
        Self::warn_unknown_fields(&ignored);
        raw.validate().map_err(ConfigError::Validation)
    }

    /// Parse and validate a JSON configuration record.
    ///
    /// The schema predates this crate as a JavaScript object literal, so
    /// JSON input is kept as a first-class source.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let raw: RawSiteConfig =
            serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;
        Self::warn_unknown_fields(&ignored);
        raw.validate().map_err(ConfigError::Validation)
    }

    /// Load and validate a configuration file, dispatching on extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        match ConfigFormat::from_path(path) {
            ConfigFormat::Json => Self::from_json_str(&content),
            ConfigFormat::Toml => Self::from_str(&content),
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(RawSiteConfig, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let raw = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((raw, ignored))
    }

    /// Warn about unknown fields; the record still loads without them.
    fn warn_unknown_fields(fields: &[String]) {
        if fields.is_empty() {
            return;
        }
        log!("warning"; "ignoring unknown config fields:");
        for field in fields {
            eprintln!("- {field}");
        }
    }
}

// ============================================================================
// store operations
// ============================================================================

/// Load, validate, and install the configuration from a file.
///
/// After this succeeds every caller in the process can read the record
/// through [`cfg`].
pub fn load(path: impl AsRef<Path>) -> Result<Arc<SiteConfig>, ConfigError> {
    let config = SiteConfig::from_path(path.as_ref())?;
    Ok(init_config(config))
}

/// Load the configuration by searching upward from the current directory.
///
/// Looks for `site.toml` first, then `site.json`, in each directory from
/// cwd to the filesystem root.
pub fn load_default() -> Result<Arc<SiteConfig>, ConfigError> {
    let path = discover().ok_or(ConfigError::NotFound)?;
    load(path)
}

/// Find the nearest config file above the current directory, if any.
pub fn discover() -> Option<PathBuf> {
    find_config_file(&["site.toml", "site.json"])
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r##"
title = "Soggy Newspaper"
author = "Nicholas Lane"
primaryColor = "#3498db"
postsPerPage = 5
"##;

    #[test]
    fn test_valid_record_with_defaults() {
        let config = SiteConfig::from_str(VALID).unwrap();
        assert_eq!(config.title, "Soggy Newspaper");
        assert_eq!(config.author, "Nicholas Lane");
        assert_eq!(config.primary_color, "#3498db");
        assert_eq!(config.posts_per_page, 5);

        // Unset optionals take documented defaults
        assert_eq!(config.description, "");
        assert!(!config.show_header_image);
        assert!(!config.show_share_buttons);
        assert_eq!(config.social, SocialLinks::default());
    }

    #[test]
    fn test_full_record() {
        let content = r##"
title = "Soggy Newspaper"
author = "Nicholas Lane"
description = "Repository of neat things I learn"
primaryColor = "#3498db"
showHeaderImage = true
showShareButtons = true
postsPerPage = 5

[social]
website = "https://soggy.space"
github = "https://github.com/soggiest"
twitter = "https://twitter.com/apinick"
"##;
        let config = SiteConfig::from_str(content).unwrap();
        assert_eq!(config.description, "Repository of neat things I learn");
        assert!(config.show_header_image);
        assert!(config.show_share_buttons);
        assert_eq!(config.social.website.as_deref(), Some("https://soggy.space"));
        assert_eq!(
            config.social.github.as_deref(),
            Some("https://github.com/soggiest")
        );
        assert_eq!(
            config.social.twitter.as_deref(),
            Some("https://twitter.com/apinick")
        );
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[social\nwebsite = \"https://a.com\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_color_is_validation_error() {
        let content = r##"
title = "X"
author = "Y"
primaryColor = "blue"
postsPerPage = 5
"##;
        let err = SiteConfig::from_str(content).unwrap_err();
        let ConfigError::Validation(diag) = err else {
            panic!("expected validation error");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.primary_color);
    }

    #[test]
    fn test_mistyped_social_is_validation_error() {
        let content = r##"
title = "X"
author = "Y"
primaryColor = "nope"
postsPerPage = 5
social = "not a table"
"##;
        let err = SiteConfig::from_str(content).unwrap_err();
        let ConfigError::Validation(diag) = err else {
            panic!("expected validation error");
        };
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.primary_color);
        assert_eq!(diag.errors()[1].field, SiteConfig::FIELDS.social);
    }

    #[test]
    fn test_from_json_str() {
        let content = r##"{
  "title": "Soggy Newspaper",
  "author": "Nicholas Lane",
  "primaryColor": "#3498db",
  "postsPerPage": 5,
  "social": { "github": "https://github.com/soggiest" }
}"##;
        let config = SiteConfig::from_json_str(content).unwrap();
        assert_eq!(config.title, "Soggy Newspaper");
        assert_eq!(
            config.social.github.as_deref(),
            Some("https://github.com/soggiest")
        );
    }

    #[test]
    fn test_from_json_str_syntax_error() {
        let result = SiteConfig::from_json_str("{ \"title\": ");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = r##"
title = "Soggy Newspaper"
author = "Nicholas Lane"
primaryColor = "#3498db"
postsPerPage = 5
fancy_mode = true
"##;
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(ignored, vec!["fancy_mode".to_string()]);

        // Unknown fields warn but do not fail the load
        assert!(SiteConfig::from_str(content).is_ok());
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(VALID).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("site.toml");
        fs::write(&toml_path, VALID).unwrap();
        let config = SiteConfig::from_path(&toml_path).unwrap();
        assert_eq!(config.posts_per_page, 5);

        let json_path = dir.path().join("site.json");
        fs::write(
            &json_path,
            r##"{"title":"T","author":"A","primaryColor":"#ffffff","postsPerPage":3}"##,
        )
        .unwrap();
        let config = SiteConfig::from_path(&json_path).unwrap();
        assert_eq!(config.posts_per_page, 3);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/site.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    // Single test exercising the process-global store: the not-loaded and
    // loaded states must be observed in order, and tests run in parallel.
    #[test]
    fn test_store_lifecycle() {
        assert!(!is_loaded());
        assert!(matches!(cfg(), Err(ConfigError::NotLoaded)));

        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content").join("posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), VALID).unwrap();

        let installed = load(dir.path().join("site.toml")).unwrap();
        assert_eq!(installed.title, "Soggy Newspaper");
        assert!(is_loaded());

        // Every read returns the identical record
        let first = cfg().unwrap();
        let second = cfg().unwrap();
        assert!(Arc::ptr_eq(&installed, &first));
        assert!(Arc::ptr_eq(&first, &second));

        // discover/load_default search upward from cwd
        std::env::set_current_dir(&nested).unwrap();
        let found = discover().expect("config file above cwd");
        assert!(found.ends_with("site.toml"));
        let via_default = load_default().unwrap();
        assert_eq!(via_default.posts_per_page, 5);
    }

    #[test]
    fn test_serialize_preserves_external_names() {
        let config = SiteConfig::from_str(VALID).unwrap();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("primaryColor"));
        assert!(toml.contains("postsPerPage"));
        assert!(toml.contains("showHeaderImage"));
        assert!(!toml.contains("primary_color"));

        // Round-trip through the external representation
        let back: SiteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back, config);
    }
}
