use crate::report::Report;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Korean form used in the prompt
        match self {
            Sex::Male => write!(f, "남성"),
            Sex::Female => write!(f, "여성"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Healthy,
    Diet,
    Bodybuilding,
    Fitness,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Healthy => write!(f, "건강한 몸"),
            Goal::Diet => write!(f, "다이어트"),
            Goal::Bodybuilding => write!(f, "보디빌딩"),
            Goal::Fitness => write!(f, "체력 증진"),
        }
    }
}

/// Validated per-request view of the user. Created fresh on each submission,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
}

#[derive(Debug, Clone, Default)]
pub struct MealInput {
    pub text: Option<String>,
    pub image: Option<Vec<u8>>,
}

/// Pre-validation submission. The field gate turns this into a
/// [`UserProfile`] or rejects it.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub sex: Option<Sex>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Option<Goal>,
    pub meal: MealInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A user-visible message accumulated during one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of one analysis run. `report` is `None` when the model call failed;
/// the notices carry the user-facing explanation.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub labels: Vec<String>,
    pub report: Option<Report>,
    pub notices: Vec<Notice>,
}
