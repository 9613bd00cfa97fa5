//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The record is stored exactly once
//! at process start and shared read-only afterwards, so readers never
//! contend on a lock.

use crate::config::SiteConfig;
use crate::config::types::ConfigError;
use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Global config storage. Empty until the first successful load.
static CONFIG: ArcSwapOption<SiteConfig> = ArcSwapOption::const_empty();

/// Store the validated config as the process-wide instance.
///
/// Returns the shared handle. Callers that prefer dependency injection can
/// keep the returned `Arc` and never touch the global again.
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Some(Arc::clone(&arc)));
    arc
}

/// Get the process-wide config.
///
/// Fails with [`ConfigError::NotLoaded`] if called before a successful
/// load, which indicates a caller-ordering bug rather than bad input.
#[inline]
pub fn cfg() -> Result<Arc<SiteConfig>, ConfigError> {
    CONFIG.load_full().ok_or(ConfigError::NotLoaded)
}

/// Whether a config has been installed.
#[inline]
pub fn is_loaded() -> bool {
    CONFIG.load().is_some()
}

// The store is process-global, so its lifecycle is covered by the single
// ordered test in `config::tests::test_store_lifecycle`.
