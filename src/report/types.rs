use serde::{Deserialize, Serialize};

/// One titled, bracket-numbered block of the model's response. The title
/// keeps its full bracketed form, e.g. `[1. 식사 요약]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Presentation-only classification of a section, chosen by Korean keyword
/// containment in the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Summary,
    Nutrient,
    Supplement,
    Improvement,
    Feedback,
    Generic,
}

impl DisplayCategory {
    /// First match wins; a title could satisfy several keywords, so the
    /// order is fixed.
    pub fn from_title(title: &str) -> Self {
        if title.contains("요약") {
            Self::Summary
        } else if title.contains("영양소") {
            Self::Nutrient
        } else if title.contains("보완") {
            Self::Supplement
        } else if title.contains("개선") {
            Self::Improvement
        } else if title.contains("피드백") {
            Self::Feedback
        } else {
            Self::Generic
        }
    }

    pub fn panel_style(&self) -> PanelStyle {
        match self {
            Self::Summary => PanelStyle::Info,
            Self::Nutrient => PanelStyle::Success,
            Self::Supplement => PanelStyle::Warning,
            Self::Improvement => PanelStyle::Error,
            Self::Feedback => PanelStyle::Quote,
            Self::Generic => PanelStyle::Plain,
        }
    }
}

/// Visual emphasis used when rendering a section panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStyle {
    Info,
    Success,
    Warning,
    Error,
    Quote,
    Plain,
}

/// Parsed model response. When no section headers were found, `sections` is
/// empty and `raw` carries the unmodified response text for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
    pub raw: Option<String>,
}

impl Report {
    pub fn from_response(response: &str) -> Self {
        let sections = super::parser::parse_sections(response);
        if sections.is_empty() {
            Self {
                sections,
                raw: Some(response.to_string()),
            }
        } else {
            Self {
                sections,
                raw: None,
            }
        }
    }
}
