use super::fsm::{AnalysisEvent, AnalysisStateMachine};
use super::types::{AnalysisOutcome, AnalysisRequest, Notice, UserProfile};
use crate::{
    Error, Result,
    config::Config,
    llm::{GeminiClient, LlmClient},
    prompt::build_analysis_prompt,
    report::Report,
    vision::{GoogleVisionClient, VisionClient, filter_food_labels},
};
use tracing::{debug, error, info, warn};

/// Warning shown when no model credential is configured. Distinct from the
/// input warnings so callers can tell the gates apart.
pub const MISSING_CREDENTIAL_WARNING: &str =
    "Gemini API 키가 설정되지 않았습니다. 설정 후 다시 시도해주세요.";
/// Warning for the field gate (sex, height, weight, goal).
pub const MISSING_FIELDS_WARNING: &str = "모든 입력값(성별, 키, 체중, 목표)이 필요합니다.";
/// Warning for the content gate: neither meal text nor any food label.
pub const MISSING_CONTENT_WARNING: &str = "식사 내용을 입력하거나 음식 사진을 업로드해주세요.";
/// Informational notice when image labeling is disabled by configuration.
pub const VISION_DISABLED_NOTICE: &str = "Vision API 키가 없어 이미지 분석을 건너뜁니다.";
/// Informational notice when no food-related label was found.
pub const NO_FOOD_LABELS_NOTICE: &str = "음식 관련 라벨을 찾지 못했습니다.";

pub struct Analyzer {
    llm_client: Option<Box<dyn LlmClient>>,
    vision_client: Option<Box<dyn VisionClient>>,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        let llm_client: Option<Box<dyn LlmClient>> = if config.llm.api_key.is_empty() {
            warn!("No Gemini API key configured, submissions will be rejected");
            None
        } else {
            Some(Box::new(GeminiClient::new(config.llm.clone())))
        };

        let vision_client: Option<Box<dyn VisionClient>> = if config.vision.api_key.is_empty() {
            info!("No Vision API key configured, image labeling is disabled");
            None
        } else {
            Some(Box::new(GoogleVisionClient::new(config.vision.clone())))
        };

        info!(
            "Analyzer initialized (model: {}, vision: {})",
            if llm_client.is_some() {
                "configured"
            } else {
                "missing"
            },
            if vision_client.is_some() {
                "configured"
            } else {
                "disabled"
            }
        );

        Self {
            llm_client,
            vision_client,
        }
    }

    pub fn new_for_testing(
        llm_client: Option<Box<dyn LlmClient>>,
        vision_client: Option<Box<dyn VisionClient>>,
    ) -> Self {
        Self {
            llm_client,
            vision_client,
        }
    }

    /// Runs one submission through the full analysis sequence.
    ///
    /// Returns `Err` only for the gates (missing credential, missing fields,
    /// missing content); external-call failures degrade into notices on the
    /// returned outcome instead.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome> {
        // Credential and field gates run before any external call.
        let llm_client = self
            .llm_client
            .as_deref()
            .ok_or_else(|| Error::config(MISSING_CREDENTIAL_WARNING))?;
        let profile = validate_fields(&request)?;

        let mut fsm = AnalysisStateMachine::new();

        // Image labeling (optional, degraded on failure)
        match request.meal.image.as_deref() {
            Some(image) => {
                fsm.transition(AnalysisEvent::ImageAttached)?;
                self.label_image(image, &mut fsm).await?;
            }
            None => fsm.transition(AnalysisEvent::NoImageProvided)?,
        }

        // Content gate: something to analyze must exist.
        let meal_text = request
            .meal
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());
        if meal_text.is_none() && fsm.context.labels.is_empty() {
            return Err(Error::validation(MISSING_CONTENT_WARNING));
        }
        fsm.transition(AnalysisEvent::ContentAccepted)?;

        // Prompting
        let prompt = build_analysis_prompt(&profile, meal_text, &fsm.context.labels);
        debug!("Built analysis prompt ({} chars)", prompt.chars().count());
        fsm.context.prompt = Some(prompt.clone());
        fsm.transition(AnalysisEvent::PromptReady)?;

        // Model invocation
        match llm_client.generate(&prompt).await {
            Ok(response) => {
                info!("✅ Model responded with {} chars", response.chars().count());
                fsm.context.response = Some(response);
                fsm.transition(AnalysisEvent::ModelResponded)?;
            }
            Err(e) => {
                error!("❌ Model call failed: {}", e);
                fsm.context
                    .add_notice(Notice::error(format!("Gemini API 호출 중 오류가 발생했습니다: {}", e)));
                fsm.context.set_error(e.to_string());
                fsm.transition(AnalysisEvent::ModelFailed)?;
                return Ok(into_outcome(fsm));
            }
        }

        // Parsing (fallback to raw text is handled by Report::from_response)
        let response = fsm.context.response.clone().unwrap_or_default();
        let report = Report::from_response(&response);
        if report.sections.is_empty() {
            debug!("No section headers found, falling back to raw response");
        } else {
            debug!("Parsed {} sections from response", report.sections.len());
        }
        fsm.context.report = Some(report);
        fsm.transition(AnalysisEvent::ParsingCompleted)?;

        Ok(into_outcome(fsm))
    }

    async fn label_image(&self, image: &[u8], fsm: &mut AnalysisStateMachine) -> Result<()> {
        match self.vision_client.as_deref() {
            None => {
                info!("Image attached but vision is disabled, skipping labeling");
                fsm.context.add_notice(Notice::info(VISION_DISABLED_NOTICE));
            }
            Some(vision_client) => match vision_client.label_image(image).await {
                Ok(labels) => {
                    let filtered = filter_food_labels(&labels);
                    info!(
                        "🔍 Vision returned {} labels, {} food-related",
                        labels.len(),
                        filtered.len()
                    );
                    if filtered.is_empty() {
                        fsm.context.add_notice(Notice::info(NO_FOOD_LABELS_NOTICE));
                    } else {
                        fsm.context.add_notice(Notice::info(format!(
                            "이미지에서 추출된 음식 관련 라벨: {}",
                            filtered.join(", ")
                        )));
                    }
                    fsm.context.labels = filtered;
                }
                Err(e) => {
                    // Degraded continuation: labels treated as absent.
                    error!("❌ Image labeling failed: {}", e);
                    fsm.context.add_notice(Notice::error(format!(
                        "이미지 분석 중 오류가 발생했습니다: {}",
                        e
                    )));
                    fsm.context.set_error(e.to_string());
                }
            },
        }
        fsm.transition(AnalysisEvent::LabelingCompleted)
    }
}

fn into_outcome(fsm: AnalysisStateMachine) -> AnalysisOutcome {
    let context = fsm.context;
    AnalysisOutcome {
        labels: context.labels,
        report: context.report,
        notices: context.notices,
    }
}

fn validate_fields(request: &AnalysisRequest) -> Result<UserProfile> {
    let (Some(sex), Some(goal)) = (request.sex, request.goal) else {
        return Err(Error::validation(MISSING_FIELDS_WARNING));
    };
    let (Some(height_cm), Some(weight_kg)) = (request.height_cm, request.weight_kg) else {
        return Err(Error::validation(MISSING_FIELDS_WARNING));
    };
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(Error::validation(MISSING_FIELDS_WARNING));
    }

    Ok(UserProfile {
        sex,
        height_cm,
        weight_kg,
        goal,
    })
}
