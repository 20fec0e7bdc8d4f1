mod executor;
pub mod fsm;
mod types;

pub use executor::{
    Analyzer, MISSING_CONTENT_WARNING, MISSING_CREDENTIAL_WARNING, MISSING_FIELDS_WARNING,
    NO_FOOD_LABELS_NOTICE, VISION_DISABLED_NOTICE,
};
pub use fsm::{AnalysisContext, AnalysisEvent, AnalysisState, AnalysisStateMachine};
pub use types::{
    AnalysisOutcome, AnalysisRequest, Goal, MealInput, Notice, NoticeLevel, Sex, UserProfile,
};
