use crate::analysis::{Goal, Notice, Sex};
use crate::report::{DisplayCategory, PanelStyle};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub meal_text: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: String,
    pub labels: Vec<String>,
    pub sections: Vec<SectionView>,
    pub raw_response: Option<String>,
    pub notices: Vec<Notice>,
}

/// One section panel, styled for display.
#[derive(Debug, Serialize)]
pub struct SectionView {
    pub title: String,
    pub body: String,
    pub category: DisplayCategory,
    pub style: PanelStyle,
}

#[derive(Debug, Serialize)]
pub struct WarningResponse {
    pub warning: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request rejection: a 422 with a user-visible warning for the validation
/// and configuration gates, a 500 for internal faults.
#[derive(Debug)]
pub enum Rejection {
    Warning(String),
    Internal(String),
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Rejection::Warning(warning) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(WarningResponse { warning }),
            )
                .into_response(),
            Rejection::Internal(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error }),
            )
                .into_response(),
        }
    }
}
