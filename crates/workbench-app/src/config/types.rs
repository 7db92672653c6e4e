//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use workbench_core::PanelKind;

/// Application settings (.workbench/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub assistant: AssistantSettings,

    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub project: ProjectSettings,
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

/// Named default panel arrangements.
///
/// Each preset mirrors one of the workspace variants the shell replaces; they
/// differ only in which panels exist and their default sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPreset {
    /// Configuration | Code/Preview | Assistant (25/45/30)
    #[default]
    AppBuilder,
    /// Code/Preview | Assistant (60/40)
    DevEnvironment,
    /// Collapsed configuration strip with a wide editor
    SplitEditor,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 3] = [
        LayoutPreset::AppBuilder,
        LayoutPreset::DevEnvironment,
        LayoutPreset::SplitEditor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LayoutPreset::AppBuilder => "app-builder",
            LayoutPreset::DevEnvironment => "dev-environment",
            LayoutPreset::SplitEditor => "split-editor",
        }
    }

    /// Default panels for this preset, in left-to-right order
    pub fn panels(&self) -> Vec<PanelSettings> {
        match self {
            LayoutPreset::AppBuilder => vec![
                PanelSettings::new(PanelKind::Config, 0.25).with_min(0.20),
                PanelSettings::new(PanelKind::Content, 0.45),
                PanelSettings::new(PanelKind::Assistant, 0.30),
            ],
            LayoutPreset::DevEnvironment => vec![
                PanelSettings::new(PanelKind::Content, 0.60),
                PanelSettings::new(PanelKind::Assistant, 0.40),
            ],
            LayoutPreset::SplitEditor => vec![
                PanelSettings::new(PanelKind::Config, 0.20)
                    .with_label("Project Explorer")
                    .collapsed(),
                PanelSettings::new(PanelKind::Content, 0.80),
            ],
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = LayoutPreset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Layout settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Preset used when no explicit panels are configured
    #[serde(default)]
    pub preset: LayoutPreset,

    /// Terminal columns occupied by a collapsed panel
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width: u16,

    /// Fraction added or removed per resize keystroke
    #[serde(default = "default_resize_step")]
    pub resize_step: f64,

    /// Explicit panel list; overrides the preset when non-empty
    #[serde(default)]
    pub panels: Vec<PanelSettings>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            preset: LayoutPreset::default(),
            collapsed_width: default_collapsed_width(),
            resize_step: default_resize_step(),
            panels: Vec::new(),
        }
    }
}

impl LayoutSettings {
    /// The panels the shell should mount
    pub fn effective_panels(&self) -> Vec<PanelSettings> {
        if self.panels.is_empty() {
            self.preset.panels()
        } else {
            self.panels.clone()
        }
    }
}

/// One panel's defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PanelSettings {
    pub kind: PanelKind,

    /// Border title; defaults to the kind's label
    #[serde(default)]
    pub label: Option<String>,

    /// Initial share of the row, 0.0-1.0
    pub size: f64,

    #[serde(default = "default_min_size")]
    pub min_size: f64,

    #[serde(default = "default_max_size")]
    pub max_size: f64,

    #[serde(default)]
    pub collapsed: bool,
}

impl PanelSettings {
    pub fn new(kind: PanelKind, size: f64) -> Self {
        Self {
            kind,
            label: None,
            size,
            min_size: default_min_size(),
            max_size: default_max_size(),
            collapsed: false,
        }
    }

    pub fn with_min(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_max(mut self, max_size: f64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }
}

fn default_collapsed_width() -> u16 {
    3
}

fn default_resize_step() -> f64 {
    0.05
}

fn default_min_size() -> f64 {
    0.10
}

fn default_max_size() -> f64 {
    1.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Assistant
// ─────────────────────────────────────────────────────────────────────────────

/// Assistant settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantSettings {
    /// Simulated network latency before a reply lands
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Give up on a reply after this long (0 disables the timeout)
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            timeout_ms: 0,
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    500
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────────────────────────

/// Editor settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Seed text for the content buffer (defaults to a starter page)
    #[serde(default)]
    pub initial_text: Option<String>,

    /// Show a line-number gutter in source mode
    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            initial_text: None,
            line_numbers: true,
        }
    }
}

impl EditorSettings {
    pub fn initial_text(&self) -> &str {
        self.initial_text.as_deref().unwrap_or(DEFAULT_BUFFER_TEXT)
    }
}

/// Starter markup shown when no seed text is configured
pub const DEFAULT_BUFFER_TEXT: &str = r#"<div class="flex flex-col items-center p-8">
  <h1 class="text-3xl font-bold">My Awesome App</h1>
  <p class="text-neutral-400">Edit this markup to see the live preview.</p>
  <div class="flex space-x-4">
    <button class="btn-primary">Get Started</button>
    <button class="btn-outline">Learn More</button>
  </div>
</div>"#;

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Project
// ─────────────────────────────────────────────────────────────────────────────

/// Project context shown in the configuration panel and fed to the assistant
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectSettings {
    #[serde(default = "default_project_name")]
    pub name: String,

    #[serde(default = "default_framework")]
    pub framework: String,

    #[serde(default = "default_pages")]
    pub pages: Vec<PageSettings>,

    /// Components offered in the palette tab
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            framework: default_framework(),
            pages: default_pages(),
            palette: default_palette(),
        }
    }
}

/// A page of the project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageSettings {
    pub name: String,

    #[serde(default = "default_route")]
    pub route: String,

    #[serde(default)]
    pub components: Vec<String>,
}

impl PageSettings {
    pub fn new(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            components: Vec::new(),
        }
    }
}

fn default_project_name() -> String {
    "New Project".to_string()
}

fn default_framework() -> String {
    "react".to_string()
}

fn default_route() -> String {
    "/".to_string()
}

fn default_pages() -> Vec<PageSettings> {
    vec![PageSettings::new("Home", "/")]
}

fn default_palette() -> Vec<String> {
    vec![
        "Header Component".to_string(),
        "Navigation Menu".to_string(),
        "Hero Section".to_string(),
    ]
}
