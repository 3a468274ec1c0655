use serde::{Deserialize, Serialize};

/// Glyphs used across the page, rendered as icon-font classes.
///
/// Content tags deserialise leniently: an unknown tag becomes the default
/// glyph instead of failing the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Icon {
    Target,
    #[default]
    Trending,
    Users,
    Award,
    BarChart,
    Megaphone,
    Zap,
    Globe,
    Calendar,
    Briefcase,
    Phone,
    Mail,
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    ArrowRight,
    ExternalLink,
    Menu,
    Close,
}

impl From<String> for Icon {
    fn from(tag: String) -> Self {
        Icon::from_tag(&tag).unwrap_or_else(|| {
            log::warn!("unknown icon tag {tag:?}, using the default glyph");
            Icon::default()
        })
    }
}

impl Icon {
    /// Exact kebab-case tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let icon = match tag {
            "target" => Icon::Target,
            "trending" => Icon::Trending,
            "users" => Icon::Users,
            "award" => Icon::Award,
            "bar-chart" => Icon::BarChart,
            "megaphone" => Icon::Megaphone,
            "zap" => Icon::Zap,
            "globe" => Icon::Globe,
            "calendar" => Icon::Calendar,
            "briefcase" => Icon::Briefcase,
            "phone" => Icon::Phone,
            "mail" => Icon::Mail,
            "chevron-left" => Icon::ChevronLeft,
            "chevron-right" => Icon::ChevronRight,
            "chevron-down" => Icon::ChevronDown,
            "arrow-right" => Icon::ArrowRight,
            "external-link" => Icon::ExternalLink,
            "menu" => Icon::Menu,
            "close" => Icon::Close,
            _ => return None,
        };
        Some(icon)
    }

    pub fn class(self) -> &'static str {
        match self {
            Icon::Target => "icon-target",
            Icon::Trending => "icon-trending-up",
            Icon::Users => "icon-users",
            Icon::Award => "icon-award",
            Icon::BarChart => "icon-bar-chart",
            Icon::Megaphone => "icon-megaphone",
            Icon::Zap => "icon-zap",
            Icon::Globe => "icon-globe",
            Icon::Calendar => "icon-calendar",
            Icon::Briefcase => "icon-briefcase",
            Icon::Phone => "icon-phone",
            Icon::Mail => "icon-mail",
            Icon::ChevronLeft => "icon-chevron-left",
            Icon::ChevronRight => "icon-chevron-right",
            Icon::ChevronDown => "icon-chevron-down",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::ExternalLink => "icon-external-link",
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-x",
        }
    }
}

/// Closed set of key-metric icon tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricIcon {
    Target,
    Trending,
    Users,
    Award,
}

impl MetricIcon {
    /// Unknown or missing tags fall back to `Trending`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("target") => MetricIcon::Target,
            Some("trending") => MetricIcon::Trending,
            Some("users") => MetricIcon::Users,
            Some("award") => MetricIcon::Award,
            _ => MetricIcon::Trending,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            MetricIcon::Target => Icon::Target,
            MetricIcon::Trending => Icon::Trending,
            MetricIcon::Users => Icon::Users,
            MetricIcon::Award => Icon::Award,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_tags_map_to_icons() {
        assert_eq!(MetricIcon::from_tag(Some("target")), MetricIcon::Target);
        assert_eq!(MetricIcon::from_tag(Some("users")), MetricIcon::Users);
        assert_eq!(MetricIcon::from_tag(Some("award")).icon(), Icon::Award);
    }

    #[test]
    fn test_unknown_metric_tag_falls_back() {
        assert_eq!(MetricIcon::from_tag(None), MetricIcon::Trending);
        assert_eq!(MetricIcon::from_tag(Some("rocket")), MetricIcon::Trending);
        assert_eq!(MetricIcon::from_tag(Some("Target")), MetricIcon::Trending);
    }

    #[test]
    fn test_icon_tags_deserialize_kebab_case() {
        let icon: Icon = serde_json::from_str("\"bar-chart\"").expect("tag should parse");
        assert_eq!(icon, Icon::BarChart);
        assert_eq!(icon.class(), "icon-bar-chart");
    }

    #[test]
    fn test_serialized_tags_read_back() {
        for icon in [
            Icon::Target,
            Icon::BarChart,
            Icon::ChevronLeft,
            Icon::ExternalLink,
            Icon::Close,
        ] {
            let tag = serde_json::to_string(&icon).expect("icon should serialize");
            let back: Icon = serde_json::from_str(&tag).expect("tag should parse");
            assert_eq!(back, icon);
        }
    }

    #[test]
    fn test_unknown_icon_tag_uses_default_glyph() {
        let icon: Icon = serde_json::from_str("\"rocket\"").expect("unknown tag should parse");
        assert_eq!(icon, Icon::default());
        assert_eq!(Icon::from_tag("rocket"), None);
        assert_eq!(Icon::from_tag("BarChart"), None);
    }
}
