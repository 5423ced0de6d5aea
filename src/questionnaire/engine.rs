//! Questionnaire engine — scores answers into the session profile.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, PRIMARY_QUESTION_ID, Question};
use crate::error::SessionError;
use crate::profile::UserProfile;
use crate::questionnaire::state::QuestionnaireState;

/// Score pinned for the primary-issue selection, regardless of the chosen
/// option's own declared score. The authored options all declare 10 anyway;
/// the pin is what the flow actually guarantees.
pub const PRIMARY_ISSUE_SCORE: u32 = 10;

/// Outcome of submitting one answer.
#[derive(Debug, Clone)]
pub struct SubmittedAnswer {
    pub question_id: String,
    /// Label of the chosen option (what the user "said").
    pub option_label: String,
    /// Canonical value token recorded in the profile.
    pub value: String,
    /// Step after the advance.
    pub step: usize,
    /// Whether this answer completed the questionnaire.
    pub complete: bool,
    /// Acknowledgement line for the answered question's category.
    pub transition: Option<String>,
}

/// Session-scoped questionnaire engine.
///
/// Owns the step state and the accumulating profile. One engine per chat
/// session; never shared across sessions.
#[derive(Debug, Clone)]
pub struct QuestionnaireEngine {
    catalog: Arc<Catalog>,
    state: QuestionnaireState,
    profile: UserProfile,
}

impl QuestionnaireEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = QuestionnaireState::new(catalog.question_count());
        Self {
            catalog,
            state,
            profile: UserProfile::default(),
        }
    }

    /// The question at the current step, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.question_at(self.state.current_step())
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    pub fn total_steps(&self) -> usize {
        self.state.total_steps()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Submit the chosen option for the current question.
    ///
    /// Records the raw value token, routes the score (the primary-issue
    /// question pins [`PRIMARY_ISSUE_SCORE`]; every other question assigns
    /// the option's own score to its declared field), and advances the
    /// step.
    pub fn submit_answer(&mut self, option_id: &str) -> Result<SubmittedAnswer, SessionError> {
        let question = self
            .current_question()
            .ok_or(SessionError::AlreadyComplete {
                step: self.state.current_step(),
            })?
            .clone();

        let option = question
            .option(option_id)
            .ok_or_else(|| SessionError::UnknownOption {
                question_id: question.id.clone(),
                option_id: option_id.to_string(),
            })?
            .clone();

        self.profile.record_answer(&question.id, &option.value);

        let score = if question.id == PRIMARY_QUESTION_ID {
            PRIMARY_ISSUE_SCORE
        } else {
            option.score
        };
        if !self.profile.assign(option.profile_key, score) {
            debug!(
                question = %question.id,
                key = ?option.profile_key,
                "answer key has no profile field, keeping raw token only"
            );
        }

        let step = self.state.advance()?;
        let complete = self.state.is_complete();
        debug!(
            question = %question.id,
            value = %option.value,
            step,
            complete,
            "answer submitted"
        );

        Ok(SubmittedAnswer {
            question_id: question.id.clone(),
            option_label: option.label.clone(),
            value: option.value.clone(),
            step,
            complete,
            transition: self
                .catalog
                .transition_for(&question.category_id)
                .map(str::to_string),
        })
    }

    /// Discard the profile and return to step 0. Supersedes any in-flight
    /// enrichment tagged with the old generation.
    pub fn reset(&mut self) {
        self.profile = UserProfile::default();
        self.state.reset();
    }
}
