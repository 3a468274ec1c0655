use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// A run of biography text, optionally emphasised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub strong: bool,
}

pub type Paragraph = Vec<TextRun>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub page_title: String,
    pub page_description: String,
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub biography: Vec<Paragraph>,
    pub hero_video: Option<String>,
    pub hero_poster: Option<String>,
    pub divider_video: Option<String>,
    pub divider_title: String,
    pub divider_lines: Vec<TextRun>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSkill {
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: String,
    pub percentage: i32,
    pub description: Option<String>,
    #[serde(default)]
    pub sub_skills: Vec<SubSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Icon,
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    pub default_category: String,
    pub categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    pub fn category(&self, id: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub details: Vec<String>,
    pub icon: Option<String>,
}

impl Achievement {
    /// Glyph for the title row; missing or unknown tags draw the award.
    pub fn icon(&self) -> Icon {
        self.icon
            .as_deref()
            .and_then(Icon::from_tag)
            .unwrap_or(Icon::Award)
    }
}

/// `value` is a pre-formatted display string and is never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub period: String,
    pub team_size: Option<String>,
    pub description: String,
    pub accounts: Option<String>,
    pub models: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub value: u32,
    pub label: String,
    #[serde(default)]
    pub icon: Icon,
    /// Cursor text reported while the tile is hovered.
    #[serde(default)]
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkHistory {
    pub summary: Vec<SummaryStat>,
    pub experiences: Vec<WorkExperience>,
}

impl WorkHistory {
    pub fn current(&self) -> Option<&WorkExperience> {
        self.experiences.iter().find(|e| e.current)
    }

    pub fn get(&self, id: u32) -> Option<&WorkExperience> {
        self.experiences.iter().find(|e| e.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub stats: [Stat; 3],
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Honour {
    pub date: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub score: Option<String>,
    pub courses: Vec<String>,
    #[serde(default)]
    pub honours: Vec<Honour>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_with_unknown_or_missing_icon_parses() {
        let stat: Stat = serde_json::from_str(r#"{"label": "ROI", "value": "3x", "icon": "rocket"}"#)
            .expect("unknown tag should not fail the stat");
        assert_eq!(stat.icon, Icon::default());
        let stat: Stat = serde_json::from_str(r#"{"label": "ROI", "value": "3x"}"#)
            .expect("missing tag should not fail the stat");
        assert_eq!(stat.icon, Icon::default());
    }

    #[test]
    fn test_project_with_unknown_stat_icon_parses() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 9,
                "title": "t",
                "description": "d",
                "image": null,
                "stats": [
                    {"label": "a", "value": "1", "icon": "rocket"},
                    {"label": "b", "value": "2", "icon": "award"},
                    {"label": "c", "value": "3"}
                ],
                "tags": []
            }"#,
        )
        .expect("project should parse");
        assert_eq!(project.stats[0].icon, Icon::default());
        assert_eq!(project.stats[1].icon, Icon::Award);
        assert_eq!(project.stats[2].icon, Icon::default());
    }

    #[test]
    fn test_skill_category_with_unknown_icon_parses() {
        let category: SkillCategory =
            serde_json::from_str(r#"{"id": "x", "name": "X", "icon": "rocket", "skills": []}"#)
                .expect("category should parse");
        assert_eq!(category.icon, Icon::default());
        let category: SkillCategory =
            serde_json::from_str(r#"{"id": "x", "name": "X", "skills": []}"#)
                .expect("category without icon should parse");
        assert_eq!(category.icon, Icon::default());
    }

    #[test]
    fn test_summary_stat_with_unknown_icon_parses() {
        let stat: SummaryStat =
            serde_json::from_str(r#"{"value": 15, "label": "主导项目", "icon": "trophy"}"#)
                .expect("summary should parse");
        assert_eq!(stat.icon, Icon::default());
        assert_eq!(stat.hover_text, "");
    }

    #[test]
    fn test_achievement_icon_falls_back_to_award() {
        let mut achievement = Achievement {
            title: "t".to_string(),
            details: vec![],
            icon: None,
        };
        assert_eq!(achievement.icon(), Icon::Award);
        achievement.icon = Some("rocket".to_string());
        assert_eq!(achievement.icon(), Icon::Award);
        achievement.icon = Some("target".to_string());
        assert_eq!(achievement.icon(), Icon::Target);
    }
}
