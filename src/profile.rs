//! Session user profile accumulated from questionnaire answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ProfileKey;
use crate::classifier::PrimaryIssue;

/// Per-session profile: one score per issue, two auxiliary scalars, and the
/// raw answer tokens keyed by question id.
///
/// Created all-zero at session start, mutated one field per answer, and
/// discarded on reset. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub sensitivity: u32,
    pub plaque: u32,
    pub ulcers: u32,
    pub bad_breath: u32,
    pub frequency: u32,
    pub severity: u32,
    pub answers: BTreeMap<String, String>,
}

impl UserProfile {
    /// Score for one of the four issue fields.
    pub fn issue_score(&self, issue: PrimaryIssue) -> u32 {
        match issue {
            PrimaryIssue::Sensitivity => self.sensitivity,
            PrimaryIssue::Plaque => self.plaque,
            PrimaryIssue::Ulcers => self.ulcers,
            PrimaryIssue::BadBreath => self.bad_breath,
        }
    }

    /// Assign a score to the field named by `key`. Assignment, not
    /// accumulation: each field is touched by at most one question, so the
    /// last answer per field wins.
    ///
    /// Returns `false` for keys the profile carries no field for
    /// (`trigger`, `bristlePreference`); those answers survive only as raw
    /// tokens.
    pub fn assign(&mut self, key: ProfileKey, score: u32) -> bool {
        match key {
            ProfileKey::Sensitivity => self.sensitivity = score,
            ProfileKey::Plaque => self.plaque = score,
            ProfileKey::Ulcers => self.ulcers = score,
            ProfileKey::BadBreath => self.bad_breath = score,
            ProfileKey::Frequency => self.frequency = score,
            ProfileKey::Severity => self.severity = score,
            ProfileKey::Trigger | ProfileKey::BristlePreference => return false,
        }
        true
    }

    /// Record the chosen option's value token for a question.
    pub fn record_answer(&mut self, question_id: &str, value: &str) {
        self.answers
            .insert(question_id.to_string(), value.to_string());
    }

    /// Raw answer token for a question, if answered.
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }
}
