//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// On-disk representation of the configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything that is not `.json`
    /// is read as TOML, the native format.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Find a config file by searching upward from the current directory.
///
/// Checks each candidate name in order within a directory before moving to
/// the parent, so `site.toml` wins over `site.json` when both exist.
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/site.toml       ← found!
/// ```
pub fn find_config_file(names: &[&str]) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    let mut current = cwd.as_path();
    loop {
        for name in names {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("site.toml")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("/etc/blog/site.json")),
            ConfigFormat::Json
        );
        // No extension falls back to TOML
        assert_eq!(
            ConfigFormat::from_path(Path::new("siteconfig")),
            ConfigFormat::Toml
        );
        // Unknown extensions too
        assert_eq!(
            ConfigFormat::from_path(Path::new("site.yaml")),
            ConfigFormat::Toml
        );
    }
}
