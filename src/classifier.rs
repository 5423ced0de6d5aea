//! Primary-issue classification.
//!
//! The expected path is trivial: the first question records an explicit
//! issue token, which is returned verbatim. The score-ranking fallback only
//! runs when that answer is absent (e.g. a partial profile supplied over
//! the API). Both paths are pure and total.

use serde::{Deserialize, Serialize};

use crate::catalog::PRIMARY_QUESTION_ID;
use crate::profile::UserProfile;

/// The four oral-health concerns the advisor classifies into.
///
/// Declaration order is the tie-break order for the score fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryIssue {
    Sensitivity,
    Plaque,
    Ulcers,
    BadBreath,
}

impl PrimaryIssue {
    /// All issues in tie-break order.
    pub const ALL: [PrimaryIssue; 4] = [
        Self::Sensitivity,
        Self::Plaque,
        Self::Ulcers,
        Self::BadBreath,
    ];

    /// Canonical value token, as recorded in profile answers.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Sensitivity => "sensitivity",
            Self::Plaque => "plaque",
            Self::Ulcers => "ulcers",
            Self::BadBreath => "badBreath",
        }
    }

    /// Parse a canonical token.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|issue| issue.token() == token)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sensitivity => "Tooth Sensitivity",
            Self::Plaque => "Plaque Buildup",
            Self::Ulcers => "Oral Ulcers",
            Self::BadBreath => "Bad Breath",
        }
    }
}

impl std::fmt::Display for PrimaryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Derive the primary-issue token from a profile.
///
/// The explicit first-question answer wins, returned verbatim even when it
/// is not a canonical token (the resolver degrades unknown labels to its
/// fallback pair). Without it, the highest-scoring issue wins, ties going
/// to the earliest entry in [`PrimaryIssue::ALL`]; an all-zero profile
/// therefore yields `sensitivity`.
pub fn identify_primary_issue(profile: &UserProfile) -> String {
    if let Some(answer) = profile.answer(PRIMARY_QUESTION_ID) {
        if !answer.is_empty() {
            return answer.to_string();
        }
    }
    highest_scoring_issue(profile).token().to_string()
}

/// The issue with the highest accumulated score, ties broken by
/// declaration order.
pub fn highest_scoring_issue(profile: &UserProfile) -> PrimaryIssue {
    let mut best = PrimaryIssue::Sensitivity;
    let mut best_score = profile.issue_score(best);
    for issue in [
        PrimaryIssue::Plaque,
        PrimaryIssue::Ulcers,
        PrimaryIssue::BadBreath,
    ] {
        let score = profile.issue_score(issue);
        if score > best_score {
            best = issue;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_answer_wins_over_scores() {
        let mut profile = UserProfile::default();
        profile.record_answer(PRIMARY_QUESTION_ID, "ulcers");
        profile.plaque = 10;
        profile.sensitivity = 10;
        assert_eq!(identify_primary_issue(&profile), "ulcers");
    }

    #[test]
    fn explicit_answer_is_returned_verbatim() {
        let mut profile = UserProfile::default();
        profile.record_answer(PRIMARY_QUESTION_ID, "whitening");
        assert_eq!(identify_primary_issue(&profile), "whitening");
    }

    #[test]
    fn empty_answer_falls_back_to_scores() {
        let mut profile = UserProfile::default();
        profile.record_answer(PRIMARY_QUESTION_ID, "");
        profile.bad_breath = 4;
        assert_eq!(identify_primary_issue(&profile), "badBreath");
    }

    #[test]
    fn all_zero_profile_yields_sensitivity() {
        assert_eq!(identify_primary_issue(&UserProfile::default()), "sensitivity");
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        let mut profile = UserProfile::default();
        profile.plaque = 7;
        profile.ulcers = 7;
        assert_eq!(highest_scoring_issue(&profile), PrimaryIssue::Plaque);
    }

    #[test]
    fn token_parse_roundtrip() {
        for issue in PrimaryIssue::ALL {
            assert_eq!(PrimaryIssue::parse(issue.token()), Some(issue));
        }
        assert_eq!(PrimaryIssue::parse("general"), None);
    }

    #[test]
    fn serde_matches_tokens() {
        for issue in PrimaryIssue::ALL {
            let json = serde_json::to_string(&issue).unwrap();
            assert_eq!(json, format!("\"{}\"", issue.token()));
        }
    }
}
