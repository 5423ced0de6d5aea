//! Questionnaire step state — linear, forward-only.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Tracks progress through the fixed question sequence.
///
/// `current_step` is the sole source of truth for which question is
/// displayed. There is no backward navigation; `reset` is the only way to
/// revisit earlier steps. Each reset bumps a generation counter so that
/// responses from in-flight enrichment requests launched before the reset
/// can be recognized as stale and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireState {
    current_step: usize,
    total_steps: usize,
    generation: u64,
}

impl QuestionnaireState {
    pub fn new(total_steps: usize) -> Self {
        Self {
            current_step: 0,
            total_steps,
            generation: 0,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the questionnaire has reached its terminal state.
    pub fn is_complete(&self) -> bool {
        self.current_step >= self.total_steps
    }

    /// Advance one step. Returns the new step, or an error once terminal.
    pub fn advance(&mut self) -> Result<usize, SessionError> {
        if self.is_complete() {
            return Err(SessionError::AlreadyComplete {
                step: self.current_step,
            });
        }
        self.current_step += 1;
        Ok(self.current_step)
    }

    /// Return to step 0 and supersede any in-flight work tagged with the
    /// previous generation.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.generation += 1;
    }
}
