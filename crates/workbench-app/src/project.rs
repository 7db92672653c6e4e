//! Project context shown in the configuration panel

use crate::config::{PageSettings, ProjectSettings};

/// Frameworks offered by the configuration tab
pub const FRAMEWORKS: [&str; 3] = ["react", "next.js", "vue"];

/// Tabs of the configuration panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigTab {
    /// Project name, framework and pages
    #[default]
    Project,
    /// Component palette
    Components,
}

impl ConfigTab {
    pub fn toggled(self) -> Self {
        match self {
            ConfigTab::Project => ConfigTab::Components,
            ConfigTab::Components => ConfigTab::Project,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfigTab::Project => "Configuration",
            ConfigTab::Components => "Components",
        }
    }
}

/// Mutable project context
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub name: String,
    pub framework: String,
    pages: Vec<PageSettings>,
    active_page: usize,
    palette: Vec<String>,
    palette_selected: usize,
    pub tab: ConfigTab,
}

impl ProjectState {
    pub fn new(settings: &ProjectSettings) -> Self {
        let mut pages = settings.pages.clone();
        if pages.is_empty() {
            pages.push(PageSettings::new("Home", "/"));
        }
        Self {
            name: settings.name.clone(),
            framework: settings.framework.clone(),
            pages,
            active_page: 0,
            palette: settings.palette.clone(),
            palette_selected: 0,
            tab: ConfigTab::default(),
        }
    }

    pub fn pages(&self) -> &[PageSettings] {
        &self.pages
    }

    pub fn active_index(&self) -> usize {
        self.active_page
    }

    pub fn active_page(&self) -> &PageSettings {
        // `new` guarantees at least one page
        &self.pages[self.active_page]
    }

    pub fn next_page(&mut self) {
        self.active_page = (self.active_page + 1) % self.pages.len();
    }

    pub fn previous_page(&mut self) {
        self.active_page = self
            .active_page
            .checked_sub(1)
            .unwrap_or(self.pages.len() - 1);
    }

    /// Out-of-range indices are ignored
    pub fn select_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.active_page = index;
        }
    }

    /// Advance to the next entry of [`FRAMEWORKS`]
    pub fn cycle_framework(&mut self) {
        let current = FRAMEWORKS
            .iter()
            .position(|f| f.eq_ignore_ascii_case(&self.framework));
        let next = current.map_or(0, |i| (i + 1) % FRAMEWORKS.len());
        self.framework = FRAMEWORKS[next].to_string();
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn palette_selected(&self) -> usize {
        self.palette_selected
    }

    pub fn palette_next(&mut self) {
        if !self.palette.is_empty() {
            self.palette_selected = (self.palette_selected + 1) % self.palette.len();
        }
    }

    pub fn palette_previous(&mut self) {
        if !self.palette.is_empty() {
            self.palette_selected = self
                .palette_selected
                .checked_sub(1)
                .unwrap_or(self.palette.len() - 1);
        }
    }

    /// Add the highlighted palette entry to the active page.
    ///
    /// Returns the component name when it was newly added.
    pub fn add_selected_component(&mut self) -> Option<String> {
        let component = self.palette.get(self.palette_selected)?.clone();
        let page = &mut self.pages[self.active_page];
        if page.components.contains(&component) {
            return None;
        }
        page.components.push(component.clone());
        Some(component)
    }
}
