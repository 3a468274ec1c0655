use crate::config::SiteConfig;
use crate::content::SiteContent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    /// Element id of the section, also its fragment link.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "首页",
            Section::About => "关于我",
            Section::Experience => "工作经历",
            Section::Education => "教育背景",
            Section::Contact => "联系方式",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRange {
    pub section: Section,
    pub start: f64,
    pub end: f64,
}

/// Measured vertical extent of each section, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    ranges: Vec<SectionRange>,
}

impl SectionMap {
    pub fn new(ranges: Vec<SectionRange>) -> Self {
        Self { ranges }
    }

    /// Builds ranges from `(section, offset_top, offset_height)` measurements.
    pub fn from_offsets(offsets: impl IntoIterator<Item = (Section, f64, f64)>) -> Self {
        Self::new(
            offsets
                .into_iter()
                .map(|(section, top, height)| SectionRange {
                    section,
                    start: top,
                    end: top + height,
                })
                .collect(),
        )
    }

    /// First range containing `probe` wins. Probes above every range map to
    /// the first section, probes past every range fall through to the last.
    pub fn classify(&self, probe: f64) -> Section {
        let (Some(first), Some(last)) = (self.ranges.first(), self.ranges.last()) else {
            return Section::default();
        };
        if let Some(range) = self
            .ranges
            .iter()
            .find(|r| r.start <= probe && probe < r.end)
        {
            return range.section;
        }
        if probe < first.start {
            first.section
        } else {
            last.section
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Default,
    Link,
}

/// What the cursor overlay should draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorState {
    pub mode: CursorMode,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled { scroll_y: f64, layout: SectionMap },
    ToggleMobileMenu,
    NavigateTo(Section),
    HoverEnter(String),
    HoverLeave,
    SelectSkillCategory(String),
    ToggleExperience(u32),
}

/// Every piece of page-level UI state, changed only through [`PageState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub active_section: Section,
    pub mobile_menu_open: bool,
    pub cursor: CursorState,
    pub active_skill_category: String,
    pub expanded_experience: Option<u32>,
    pub scroll_y: f64,
    section_probe: f64,
    header_offset: f64,
    header_solid_after: f64,
}

impl PageState {
    pub fn new(content: &SiteContent, config: &SiteConfig) -> Self {
        Self {
            active_section: Section::Home,
            mobile_menu_open: false,
            cursor: CursorState::default(),
            active_skill_category: content.skills.default_category.clone(),
            expanded_experience: content.history.current().map(|e| e.id),
            scroll_y: 0.0,
            section_probe: config.section_probe,
            header_offset: config.header_offset,
            header_solid_after: config.header_solid_after,
        }
    }

    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::Scrolled { scroll_y, layout } => {
                self.scroll_y = scroll_y;
                let section = layout.classify(scroll_y + self.section_probe);
                if section != self.active_section {
                    log::debug!("active section: {}", section.id());
                    self.active_section = section;
                }
            }
            PageEvent::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
            PageEvent::NavigateTo(_) => self.mobile_menu_open = false,
            PageEvent::HoverEnter(text) => {
                self.cursor = CursorState {
                    mode: CursorMode::Link,
                    text,
                }
            }
            PageEvent::HoverLeave => self.cursor = CursorState::default(),
            PageEvent::SelectSkillCategory(id) => self.active_skill_category = id,
            PageEvent::ToggleExperience(id) => {
                self.expanded_experience = if self.expanded_experience == Some(id) {
                    None
                } else {
                    Some(id)
                };
                log::debug!("expanded experience: {:?}", self.expanded_experience);
            }
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded_experience == Some(id)
    }

    pub fn header_is_solid(&self) -> bool {
        self.scroll_y > self.header_solid_after
    }

    /// Window scroll target for a section whose element starts at `element_top`.
    pub fn scroll_target(&self, element_top: f64) -> f64 {
        element_top - self.header_offset
    }
}
