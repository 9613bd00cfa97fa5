//! `social` sub-record: outbound profile URLs.
//!
//! All links are optional; present links must be absolute http(s) URLs.
//!
//! # Example
//!
//! ```toml
//! [social]
//! website = "https://soggy.space"
//! github = "https://github.com/soggiest"
//! twitter = "https://twitter.com/apinick"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Optional outbound profile URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// Personal website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// GitHub profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Twitter profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Field paths for [`SocialLinks`] diagnostics.
pub struct SocialLinksFields {
    pub website: FieldPath,
    pub github: FieldPath,
    pub twitter: FieldPath,
}

impl SocialLinks {
    pub const FIELDS: SocialLinksFields = SocialLinksFields {
        website: FieldPath::new("social.website"),
        github: FieldPath::new("social.github"),
        twitter: FieldPath::new("social.twitter"),
    };
}

/// Unvalidated `social` table as read from disk.
#[derive(Debug, Default)]
pub struct RawSocialLinks {
    website: Option<toml::Value>,
    github: Option<toml::Value>,
    twitter: Option<toml::Value>,
}

impl RawSocialLinks {
    /// Extract the raw `social` table, recording a diagnostic if the value
    /// is not a table. Unknown keys warn, like unknown top-level fields.
    pub fn from_value(
        field: FieldPath,
        value: toml::Value,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        match value {
            toml::Value::Table(mut table) => {
                let raw = Self {
                    website: table.remove("website"),
                    github: table.remove("github"),
                    twitter: table.remove("twitter"),
                };
                for key in table.keys() {
                    crate::log!("warning"; "ignoring unknown config field: {}.{key}", field.as_str());
                }
                raw
            }
            other => {
                diag.error(field, format!("expected a table, found {}", other.type_str()));
                Self::default()
            }
        }
    }

    /// Validate every link, collecting diagnostics for malformed ones.
    pub fn validate(self, diag: &mut ConfigDiagnostics) -> SocialLinks {
        SocialLinks {
            website: optional_url(SocialLinks::FIELDS.website, self.website, diag),
            github: optional_url(SocialLinks::FIELDS.github, self.github, diag),
            twitter: optional_url(SocialLinks::FIELDS.twitter, self.twitter, diag),
        }
    }
}

/// Extract an optional URL field.
///
/// # Checks
/// - Must be a string
/// - Must parse as an absolute URL with scheme http or https
/// - Must have a valid host
fn optional_url(
    field: FieldPath,
    value: Option<toml::Value>,
    diag: &mut ConfigDiagnostics,
) -> Option<String> {
    let link = match value {
        None => return None,
        Some(toml::Value::String(s)) => s,
        Some(other) => {
            diag.error(field, format!("expected a string, found {}", other.type_str()));
            return None;
        }
    };

    match url::Url::parse(&link) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
                return None;
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
                return None;
            }
            Some(link)
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
            None
        }
    }
}

// ============================================================================
// tests
// ============================================================================
