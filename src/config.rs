use std::sync::LazyLock;
use std::time::Duration;

use serde::Deserialize;

use crate::content::ContentAssets;

static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::load);

/// Tunables for the page's scroll, drag and carousel behaviour.
///
/// Defaults are overlaid with the embedded `site.json`. One value is provided
/// through context at the composition root; every state machine copies the
/// numbers it needs when it is constructed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header, subtracted from scroll-to-section targets.
    pub header_offset: f64,
    /// Added to `scrollY` before classifying the active section.
    pub section_probe: f64,
    /// Header switches to the opaque style past this `scrollY`.
    pub header_solid_after: f64,
    pub carousel_interval_ms: u64,
    pub swipe_threshold: f64,
    pub arrow_tolerance: f64,
    pub drag_multiplier: f64,
    /// Fraction of the visible width moved by one arrow click.
    pub scroll_step_ratio: f64,
    pub narrow_breakpoint: u32,
    pub tags_narrow: usize,
    pub tags_wide: usize,
    pub reveal_stagger_ms: u64,
    pub placeholder_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            section_probe: 100.0,
            header_solid_after: 50.0,
            carousel_interval_ms: 5_000,
            swipe_threshold: 50.0,
            arrow_tolerance: 10.0,
            drag_multiplier: 2.0,
            scroll_step_ratio: 0.8,
            narrow_breakpoint: 768,
            tags_narrow: 2,
            tags_wide: 4,
            reveal_stagger_ms: 100,
            placeholder_image: "/placeholder.svg".to_string(),
        }
    }
}

/// Process-wide configuration, read once.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

impl SiteConfig {
    pub const FILE: &'static str = "site.json";

    /// Keys missing from `json` keep their default.
    pub fn from_json(json: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(json)
    }

    /// Reads the embedded overrides. A missing file means defaults; a broken
    /// one is logged and ignored so the page still renders.
    pub fn load() -> Self {
        let Some(file) = ContentAssets::get(Self::FILE) else {
            return Self::default();
        };
        Self::from_json(&file.data).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {e}", Self::FILE);
            Self::default()
        })
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.narrow_breakpoint)
    }

    pub fn tag_cap(&self, narrow: bool) -> usize {
        if narrow {
            self.tags_narrow
        } else {
            self.tags_wide
        }
    }

    /// Delay before the `index`-th item of a staggered reveal starts.
    pub fn stagger(&self, index: usize) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms * index as u64)
    }

    /// Returns `image` unless it is absent or blank, otherwise the placeholder.
    pub fn image_or_placeholder<'a>(&'a self, image: Option<&'a str>) -> &'a str {
        match image {
            Some(path) if !path.trim().is_empty() => path,
            _ => &self.placeholder_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.section_probe, 100.0);
        assert_eq!(config.carousel_interval(), Duration::from_secs(5));
        assert_eq!(config.narrow_media_query(), "(max-width: 768px)");
        assert_eq!(config.tag_cap(true), 2);
        assert_eq!(config.tag_cap(false), 4);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config =
            SiteConfig::from_json(br#"{"swipe_threshold": 80.0}"#).expect("config should parse");
        assert_eq!(config.swipe_threshold, 80.0);
        assert_eq!(config.drag_multiplier, 2.0);
    }

    #[test]
    fn test_broken_config_is_an_error() {
        assert!(SiteConfig::from_json(b"{ not json").is_err());
        assert!(SiteConfig::from_json(br#"{"swipe_threshold": "far"}"#).is_err());
    }

    #[test]
    fn test_embedded_config_loads() {
        assert!(ContentAssets::get(SiteConfig::FILE).is_some());
        let config = site_config();
        assert_eq!(config.carousel_interval(), Duration::from_secs(5));
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.placeholder_image, "/placeholder.svg");
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let config = SiteConfig::default();
        assert_eq!(config.image_or_placeholder(None), "/placeholder.svg");
        assert_eq!(config.image_or_placeholder(Some("  ")), "/placeholder.svg");
        assert_eq!(
            config.image_or_placeholder(Some("/images/a.png")),
            "/images/a.png"
        );
    }

    #[test]
    fn test_stagger_grows_with_index() {
        let config = SiteConfig::default();
        assert_eq!(config.stagger(0), Duration::ZERO);
        assert_eq!(config.stagger(3), Duration::from_millis(300));
    }
}
