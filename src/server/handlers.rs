use super::types::{AnalyzeRequest, AnalyzeResponse, Rejection, SectionView};
use crate::{
    Error,
    analysis::{AnalysisRequest, Analyzer, MealInput},
    report::DisplayCategory,
};
use axum::{extract::State, response::Json};
use base64::{Engine, engine::general_purpose};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const UNDECODABLE_IMAGE_WARNING: &str = "이미지를 디코딩할 수 없습니다.";
pub const UNSUPPORTED_IMAGE_WARNING: &str = "지원하지 않는 이미지 형식입니다. (PNG/JPEG만 가능)";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, Rejection> {
    let analysis_id = Uuid::new_v4().to_string();
    info!("Received analysis request: {}", analysis_id);

    let image = match request.image_base64.as_deref() {
        Some(encoded) => Some(decode_image(encoded)?),
        None => None,
    };

    let analysis_request = AnalysisRequest {
        sex: request.sex,
        height_cm: request.height_cm,
        weight_kg: request.weight_kg,
        goal: request.goal,
        meal: MealInput {
            text: request.meal_text,
            image,
        },
    };

    match state.analyzer.analyze(analysis_request).await {
        Ok(outcome) => {
            info!("Successfully processed analysis request: {}", analysis_id);

            let (sections, raw_response) = match outcome.report {
                Some(report) => {
                    let sections = report
                        .sections
                        .into_iter()
                        .map(|section| {
                            let category = DisplayCategory::from_title(&section.title);
                            SectionView {
                                title: section.title,
                                body: section.body,
                                category,
                                style: category.panel_style(),
                            }
                        })
                        .collect();
                    (sections, report.raw)
                }
                None => (Vec::new(), None),
            };

            Ok(Json(AnalyzeResponse {
                analysis_id,
                labels: outcome.labels,
                sections,
                raw_response,
                notices: outcome.notices,
            }))
        }
        Err(Error::Validation(warning)) | Err(Error::Config(warning)) => {
            warn!(
                "Rejected analysis request {} with warning: {}",
                analysis_id, warning
            );
            Err(Rejection::Warning(warning))
        }
        Err(e) => {
            error!("Failed to process analysis request {}: {}", analysis_id, e);
            Err(Rejection::Internal(format!("Processing error: {}", e)))
        }
    }
}

/// Decodes the submitted image and checks it is PNG or JPEG.
fn decode_image(encoded: &str) -> Result<Vec<u8>, Rejection> {
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| Rejection::Warning(UNDECODABLE_IMAGE_WARNING.to_string()))?;

    let is_png = bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    let is_jpeg = bytes.starts_with(&[0xFF, 0xD8, 0xFF]);
    if !is_png && !is_jpeg {
        return Err(Rejection::Warning(UNSUPPORTED_IMAGE_WARNING.to_string()));
    }

    Ok(bytes)
}
