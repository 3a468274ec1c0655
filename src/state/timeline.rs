use crate::content::WorkExperience;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Overview,
    Achievements,
    Skills,
}

impl DetailTab {
    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "工作概览",
            DetailTab::Achievements => "主要成就",
            DetailTab::Skills => "核心技能",
        }
    }
}

/// Tabs the entry has data for. Overview is always present.
pub fn available_tabs(experience: &WorkExperience) -> Vec<DetailTab> {
    let mut tabs = vec![DetailTab::Overview];
    if !experience.achievements.is_empty() {
        tabs.push(DetailTab::Achievements);
    }
    if !experience.skills.is_empty() {
        tabs.push(DetailTab::Skills);
    }
    tabs
}

/// Local state of one timeline card. Expansion is owned by the page and
/// mirrored here; the active tab is the card's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    expanded: bool,
    tab: DetailTab,
}

impl CardState {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            tab: DetailTab::Overview,
        }
    }

    /// Mirrors the parent's flag; every fresh expansion opens on the overview.
    pub fn sync_expanded(&mut self, expanded: bool) {
        if expanded && !self.expanded {
            self.tab = DetailTab::Overview;
        }
        self.expanded = expanded;
    }

    /// Switches tab if the card is expanded and the entry has that tab.
    pub fn select(&mut self, experience: &WorkExperience, tab: DetailTab) -> bool {
        if !self.expanded || !available_tabs(experience).contains(&tab) {
            return false;
        }
        self.tab = tab;
        true
    }

    /// The tab whose content is rendered, `None` while collapsed.
    pub fn visible_tab(&self) -> Option<DetailTab> {
        self.expanded.then_some(self.tab)
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Achievement, WorkExperience};

    fn experience(achievements: bool, skills: bool) -> WorkExperience {
        WorkExperience {
            id: 7,
            company: "Company".to_string(),
            position: "Position".to_string(),
            period: "2020 - 2021".to_string(),
            team_size: None,
            description: "描述".to_string(),
            accounts: None,
            models: None,
            image: None,
            current: false,
            achievements: if achievements {
                vec![Achievement {
                    title: "成就".to_string(),
                    details: vec!["目标：达成".to_string()],
                    icon: None,
                }]
            } else {
                Vec::new()
            },
            key_metrics: Vec::new(),
            skills: if skills {
                vec!["直播".to_string()]
            } else {
                Vec::new()
            },
        }
    }

    #[test]
    fn test_tabs_follow_available_data() {
        assert_eq!(
            available_tabs(&experience(true, true)),
            vec![
                DetailTab::Overview,
                DetailTab::Achievements,
                DetailTab::Skills
            ]
        );
        assert_eq!(
            available_tabs(&experience(false, true)),
            vec![DetailTab::Overview, DetailTab::Skills]
        );
        assert_eq!(
            available_tabs(&experience(false, false)),
            vec![DetailTab::Overview]
        );
    }

    #[test]
    fn test_absent_tab_cannot_be_selected() {
        let exp = experience(false, true);
        let mut card = CardState::new(true);
        assert!(!card.select(&exp, DetailTab::Achievements));
        assert_eq!(card.visible_tab(), Some(DetailTab::Overview));
        assert!(card.select(&exp, DetailTab::Skills));
        assert_eq!(card.visible_tab(), Some(DetailTab::Skills));
    }

    #[test]
    fn test_collapsed_card_shows_nothing() {
        let exp = experience(true, true);
        let mut card = CardState::new(false);
        assert_eq!(card.visible_tab(), None);
        assert!(!card.select(&exp, DetailTab::Skills));
    }

    #[test]
    fn test_reexpanding_resets_to_overview() {
        let exp = experience(true, true);
        let mut card = CardState::new(true);
        card.select(&exp, DetailTab::Achievements);
        card.sync_expanded(true);
        assert_eq!(card.visible_tab(), Some(DetailTab::Achievements));
        card.sync_expanded(false);
        assert!(!card.expanded());
        card.sync_expanded(true);
        assert_eq!(card.visible_tab(), Some(DetailTab::Overview));
    }
}
