use crate::errors::ConfigError;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "data/hotels.json";
pub const PAGE_SIZE: usize = 9;
pub const IMAGE_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Everything the page needs that isn't baked into the label tables.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub catalog_url: String,
    /// Relative previews are resolved against this.
    pub image_base: String,
    pub page_size: usize,
    pub image_timeout: Duration,
    pub scroll_debounce: Duration,
    /// Shown on cards whose listing has no rating.
    pub display_rating_default: f64,
    /// Used by sort/filter comparisons for listings without a rating.
    /// Kept apart from the display default on purpose.
    pub filter_rating_default: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            image_base: "/".to_string(),
            page_size: PAGE_SIZE,
            image_timeout: IMAGE_TIMEOUT,
            scroll_debounce: SCROLL_DEBOUNCE,
            display_rating_default: 6.0,
            filter_rating_default: 0.0,
        }
    }
}

impl PageConfig {
    /// Defaults overlaid with `HOTELS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("HOTELS_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Some(base) = lookup("HOTELS_IMAGE_BASE") {
            config.image_base = base;
        }
        if let Some(raw) = lookup("HOTELS_PAGE_SIZE") {
            config.page_size = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("HOTELS_PAGE_SIZE", "a positive integer", raw)),
            };
        }
        if let Some(raw) = lookup("HOTELS_IMAGE_TIMEOUT_MS") {
            config.image_timeout = parse_millis("HOTELS_IMAGE_TIMEOUT_MS", raw)?;
        }
        if let Some(raw) = lookup("HOTELS_SCROLL_DEBOUNCE_MS") {
            config.scroll_debounce = parse_millis("HOTELS_SCROLL_DEBOUNCE_MS", raw)?;
        }

        Ok(config)
    }
}

fn parse_millis(var: &'static str, raw: String) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| invalid(var, "a number of milliseconds", raw))
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value,
    }
}
