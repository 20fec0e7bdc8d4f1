use super::types::Notice;
use crate::{Error, Result, report::Report};
use tracing::{debug, info, warn};

// Analysis states
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    CollectingInput,
    LabelingImage,
    Validating,
    Prompting,
    AwaitingModel,
    Parsing,
    Rendered,
    Failed,
}

// Analysis events
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    ImageAttached,
    NoImageProvided,
    LabelingCompleted,
    LabelingFailed,
    ContentAccepted,
    PromptReady,
    PromptingFailed,
    ModelResponded,
    ModelFailed,
    ParsingCompleted,
}

// Per-request context accumulated while the machine runs
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub labels: Vec<String>,
    pub prompt: Option<String>,
    pub response: Option<String>,
    pub report: Option<Report>,
    pub notices: Vec<Notice>,
    pub last_error: Option<String>,
}

impl AnalysisContext {
    pub fn add_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn set_error(&mut self, error: String) {
        self.last_error = Some(error);
    }
}

// Simple FSM implementation
pub struct AnalysisStateMachine {
    state: AnalysisState,
    pub context: AnalysisContext,
}

impl AnalysisStateMachine {
    pub fn new() -> Self {
        info!("🚀 Creating new analysis FSM");
        Self {
            state: AnalysisState::CollectingInput,
            context: AnalysisContext::default(),
        }
    }

    pub fn current_state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn transition(&mut self, event: AnalysisEvent) -> Result<()> {
        let old_state = self.state.clone();
        debug!(
            "🔄 FSM processing event {:?} in state {:?}",
            event, old_state
        );

        let new_state = match (&self.state, &event) {
            (AnalysisState::CollectingInput, AnalysisEvent::ImageAttached) => {
                AnalysisState::LabelingImage
            }
            (AnalysisState::CollectingInput, AnalysisEvent::NoImageProvided) => {
                AnalysisState::Validating
            }
            (AnalysisState::LabelingImage, AnalysisEvent::LabelingCompleted) => {
                AnalysisState::Validating
            }
            (AnalysisState::LabelingImage, AnalysisEvent::LabelingFailed) => AnalysisState::Failed,
            (AnalysisState::Validating, AnalysisEvent::ContentAccepted) => AnalysisState::Prompting,
            (AnalysisState::Prompting, AnalysisEvent::PromptReady) => AnalysisState::AwaitingModel,
            (AnalysisState::Prompting, AnalysisEvent::PromptingFailed) => AnalysisState::Failed,
            (AnalysisState::AwaitingModel, AnalysisEvent::ModelResponded) => AnalysisState::Parsing,
            (AnalysisState::AwaitingModel, AnalysisEvent::ModelFailed) => AnalysisState::Failed,
            (AnalysisState::Parsing, AnalysisEvent::ParsingCompleted) => AnalysisState::Rendered,
            _ => {
                warn!(
                    "❌ Invalid FSM transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        info!(
            "🎯 FSM state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, AnalysisState::Rendered | AnalysisState::Failed)
    }
}

impl Default for AnalysisStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
