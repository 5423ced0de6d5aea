//! Guided questionnaire: linear step state plus answer scoring.

pub mod engine;
pub mod state;

pub use engine::{PRIMARY_ISSUE_SCORE, QuestionnaireEngine, SubmittedAnswer};
pub use state::QuestionnaireState;
