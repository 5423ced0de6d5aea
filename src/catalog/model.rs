//! Catalog data models: questions, options, products, and mapping rules.

use serde::{Deserialize, Serialize};

use crate::classifier::PrimaryIssue;

/// Which profile field an answer option's score is routed to.
///
/// The authored questionnaire also declares `trigger` and
/// `bristlePreference` keys; the profile carries no field for those, so
/// their scores are recorded only as raw answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileKey {
    Sensitivity,
    Plaque,
    Ulcers,
    BadBreath,
    Frequency,
    Severity,
    Trigger,
    BristlePreference,
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Toothpaste,
    Toothbrush,
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toothpaste => write!(f, "toothpaste"),
            Self::Toothbrush => write!(f, "toothbrush"),
        }
    }
}

/// A selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    /// Human label shown to the user.
    pub label: String,
    /// Canonical value token recorded in the profile answers.
    pub value: String,
    pub emoji: String,
    pub score: u32,
    pub profile_key: ProfileKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A questionnaire question with its ordered options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub category_id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Find an option on this question by id.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// A question category (drives transition copy and admin counts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// An immutable catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub kind: ProductKind,
    /// Currency-prefixed display price, e.g. `₹299`. Totals are computed on
    /// the parsed integer value, never on the string.
    pub price: String,
    pub rating: u8,
    pub features: Vec<String>,
    /// The single issue a toothpaste targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_issue: Option<PrimaryIssue>,
    /// Issue tokens a toothbrush suits (may include `general`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_for: Vec<String>,
    pub doctor_score: u8,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    pub sustainable: bool,
    #[serde(default)]
    pub vegan: bool,
    pub why_it_works: String,
    pub trade_offs: String,
}

/// Static mapping from a primary issue to a pre-authored product pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueMapping {
    pub issue: PrimaryIssue,
    pub toothpaste_id: String,
    pub toothbrush_id: String,
    pub explanation: String,
}

/// An admin-visible recommendation rule (read-only mirror of the mapping).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRule {
    pub id: String,
    pub name: String,
    pub primary_issue: PrimaryIssue,
    pub toothpaste_ids: Vec<String>,
    pub toothbrush_ids: Vec<String>,
    pub priority: u8,
}

/// Brand identity shown in greetings and prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    pub agent_name: String,
    pub brand_name: String,
    pub tagline: String,
    pub description: String,
    pub target_issues: Vec<String>,
}

/// Health-recommendation disclaimer attached to every recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub text: String,
    pub scope: String,
}
