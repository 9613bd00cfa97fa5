//! Lenient first-stage parse of a configuration record.
//!
//! Every field is captured as a raw value so one validation pass can
//! report all violations at once, instead of the deserializer bailing on
//! the first type mismatch. [`RawSiteConfig::validate`] converts into the
//! typed [`SiteConfig`] only when the record is fully clean.

use crate::config::social::RawSocialLinks;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::SiteConfig;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Unvalidated configuration record as read from disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSiteConfig {
    title: Option<toml::Value>,
    author: Option<toml::Value>,
    description: Option<toml::Value>,
    primary_color: Option<toml::Value>,
    show_header_image: Option<toml::Value>,
    show_share_buttons: Option<toml::Value>,
    posts_per_page: Option<toml::Value>,
    social: Option<toml::Value>,
}

impl RawSiteConfig {
    /// Validate every field and build the typed record.
    ///
    /// Collects all violations; returns the full diagnostic list if any
    /// field is missing, mistyped, or malformed.
    pub fn validate(self) -> Result<SiteConfig, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        const FIELDS: super::SiteConfigFields = SiteConfig::FIELDS;

        let title = require_string(FIELDS.title, self.title, &mut diag);
        let author = require_string(FIELDS.author, self.author, &mut diag);
        let description = optional_string(FIELDS.description, self.description, &mut diag);

        let primary_color = require_string(FIELDS.primary_color, self.primary_color, &mut diag);
        if let Some(color) = &primary_color
            && !RE_HEX_COLOR.is_match(color)
        {
            diag.error_with_hint(
                FIELDS.primary_color,
                format!("`{color}` is not a hex color"),
                "use the form #RRGGBB, e.g. #3498db",
            );
        }

        let show_header_image =
            optional_bool(FIELDS.show_header_image, self.show_header_image, &mut diag);
        let show_share_buttons =
            optional_bool(FIELDS.show_share_buttons, self.show_share_buttons, &mut diag);
        let posts_per_page = require_page_size(FIELDS.posts_per_page, self.posts_per_page, &mut diag);

        let social = self
            .social
            .map(|value| RawSocialLinks::from_value(FIELDS.social, value, &mut diag))
            .unwrap_or_default()
            .validate(&mut diag);

        diag.into_result()?;

        // All required fields are Some past this point
        Ok(SiteConfig {
            title: title.unwrap_or_default(),
            author: author.unwrap_or_default(),
            description,
            primary_color: primary_color.unwrap_or_default(),
            show_header_image,
            show_share_buttons,
            posts_per_page: posts_per_page.unwrap_or_default(),
            social,
        })
    }
}

// ============================================================================
// field extraction
// ============================================================================

/// Extract a required, non-empty string field.
fn require_string(
    field: FieldPath,
    value: Option<toml::Value>,
    diag: &mut ConfigDiagnostics,
) -> Option<String> {
    match value {
        None => {
            diag.error(field, "missing required field");
            None
        }
        Some(toml::Value::String(s)) if s.is_empty() => {
            diag.error(field, "must not be empty");
            None
        }
        Some(toml::Value::String(s)) => Some(s),
        Some(other) => {
            diag.error(field, format!("expected a string, found {}", other.type_str()));
            None
        }
    }
}

/// Extract an optional string field, defaulting to empty.
fn optional_string(
    field: FieldPath,
    value: Option<toml::Value>,
    diag: &mut ConfigDiagnostics,
) -> String {
    match value {
        None => String::new(),
        Some(toml::Value::String(s)) => s,
        Some(other) => {
            diag.error(field, format!("expected a string, found {}", other.type_str()));
            String::new()
        }
    }
}

/// Extract an optional boolean field, defaulting to `false`.
fn optional_bool(
    field: FieldPath,
    value: Option<toml::Value>,
    diag: &mut ConfigDiagnostics,
) -> bool {
    match value {
        None => false,
        Some(toml::Value::Boolean(b)) => b,
        Some(other) => {
            diag.error(
                field,
                format!("expected a boolean, found {}", other.type_str()),
            );
            false
        }
    }
}

/// Extract a required positive-integer field.
fn require_page_size(
    field: FieldPath,
    value: Option<toml::Value>,
    diag: &mut ConfigDiagnostics,
) -> Option<usize> {
    match value {
        None => {
            diag.error(field, "missing required field");
            None
        }
        Some(toml::Value::Integer(n)) => match usize::try_from(n) {
            Ok(n) if n > 0 => Some(n),
            _ => {
                diag.error(field, format!("must be a positive integer, found {n}"));
                None
            }
        },
        Some(other) => {
            diag.error(
                field,
                format!("expected a positive integer, found {}", other.type_str()),
            );
            None
        }
    }
}

// ============================================================================
// tests
// ============================================================================
