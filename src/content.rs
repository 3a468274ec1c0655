mod icon;
mod model;

pub use icon::{Icon, MetricIcon};
pub use model::*;

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use thiserror::Error;

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(|| {
    let content = SiteContent::load()?;
    for warning in content.warnings() {
        log::warn!("{warning}");
    }
    Ok(content)
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: &'static str, message: String },
    #[error("duplicate work experience id {0}")]
    DuplicateExperienceId(u32),
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
    #[error("default skill category not found: {0}")]
    UnknownSkillCategory(String),
}

/// Suspicious but renderable content. Values are shown as written.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentWarning {
    PercentageOutOfRange { skill: String, value: i32 },
    LevelOutOfRange { skill: String, value: i32 },
    CurrentExperienceCount(usize),
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::PercentageOutOfRange { skill, value } => {
                write!(f, "skill '{skill}' has percentage {value} outside 0-100")
            }
            ContentWarning::LevelOutOfRange { skill, value } => {
                write!(f, "sub-skill '{skill}' has level {value} outside 0-100")
            }
            ContentWarning::CurrentExperienceCount(n) => {
                write!(f, "expected exactly one current experience, found {n}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: SkillTaxonomy,
    pub history: WorkHistory,
    pub projects: Vec<Project>,
    pub education: Education,
}

/// Content parsed from the embedded documents, once per process.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

fn read_json<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let asset = ContentAssets::get(file).ok_or(ContentError::Missing(file))?;
    serde_json::from_slice(&asset.data).map_err(|e| ContentError::Parse {
        file,
        message: e.to_string(),
    })
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            profile: read_json("profile.json")?,
            skills: read_json("skills.json")?,
            history: read_json("experience.json")?,
            projects: read_json("projects.json")?,
            education: read_json("education.json")?,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for exp in &self.history.experiences {
            if !seen.insert(exp.id) {
                return Err(ContentError::DuplicateExperienceId(exp.id));
            }
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        if self.skills.category(&self.skills.default_category).is_none() {
            return Err(ContentError::UnknownSkillCategory(
                self.skills.default_category.clone(),
            ));
        }
        Ok(())
    }

    pub fn warnings(&self) -> Vec<ContentWarning> {
        let out_of_range = |v: i32| !(0..=100).contains(&v);
        let mut warnings = Vec::new();
        for entry in self.skills.categories.iter().flat_map(|c| &c.skills) {
            if out_of_range(entry.percentage) {
                warnings.push(ContentWarning::PercentageOutOfRange {
                    skill: entry.skill.clone(),
                    value: entry.percentage,
                });
            }
            for sub in entry.sub_skills.iter().filter(|s| out_of_range(s.level)) {
                warnings.push(ContentWarning::LevelOutOfRange {
                    skill: sub.name.clone(),
                    value: sub.level,
                });
            }
        }
        let current = self
            .history
            .experiences
            .iter()
            .filter(|e| e.current)
            .count();
        if current != 1 {
            warnings.push(ContentWarning::CurrentExperienceCount(current));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> SiteContent {
        SiteContent::load().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = loaded();
        assert_eq!(content.history.experiences.len(), 4);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.categories.len(), 4);
        assert!(content.warnings().is_empty());
    }

    #[test]
    fn test_single_current_experience() {
        let content = loaded();
        let current = content.history.current().expect("one role is current");
        assert_eq!(current.id, 1);
        assert!(current.team_size.is_some());
    }

    #[test]
    fn test_optional_fields_are_absent_not_errors() {
        let content = loaded();
        let earliest = content.history.get(4).expect("experience 4 exists");
        assert!(earliest.key_metrics.is_empty());
        assert!(earliest.accounts.is_none());
        assert!(earliest.team_size.is_none());

        let native = content
            .skills
            .category("language")
            .and_then(|c| c.skills.first())
            .expect("language category has skills");
        assert!(native.sub_skills.is_empty());
    }

    #[test]
    fn test_default_category_exists() {
        let content = loaded();
        assert!(content.skills.category(&content.skills.default_category).is_some());
    }

    #[test]
    fn test_duplicate_experience_id_is_rejected() {
        let mut content = loaded();
        let dup = content.history.experiences[0].clone();
        content.history.experiences.push(dup);
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateExperienceId(1))
        );
    }

    #[test]
    fn test_unknown_default_category_is_rejected() {
        let mut content = loaded();
        content.skills.default_category = "cooking".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnknownSkillCategory(_))
        ));
    }

    #[test]
    fn test_out_of_range_values_warn_but_are_kept() {
        let mut content = loaded();
        content.skills.categories[0].skills[0].percentage = 120;
        content.history.experiences[1].current = true;
        let warnings = content.warnings();
        assert!(warnings.contains(&ContentWarning::PercentageOutOfRange {
            skill: content.skills.categories[0].skills[0].skill.clone(),
            value: 120,
        }));
        assert!(warnings.contains(&ContentWarning::CurrentExperienceCount(2)));
        assert_eq!(content.skills.categories[0].skills[0].percentage, 120);
    }

    #[test]
    fn test_project_requires_three_stats() {
        let json = r#"{
            "id": 9, "title": "t", "description": "d", "image": null,
            "stats": [{"label": "a", "value": "1", "icon": "award"}],
            "tags": []
        }"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }
}
