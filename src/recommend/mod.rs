//! Recommendation resolution.
//!
//! A constant-time lookup from the primary-issue label to a pre-authored
//! product pair, with a fixed fallback pair for unrecognized labels.
//! Resolution is total: an unknown label degrades, it never errors.

pub mod advice;

pub use advice::{AdviceGenerator, AdviceOutcome, TaggedAdvice};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, EXCLUDED_ALT_TOOTHBRUSH, Product};
use crate::classifier::PrimaryIssue;
use crate::error::CatalogError;
use crate::profile::UserProfile;

/// Issue token reported when the label is unrecognized.
pub const GENERAL_ISSUE: &str = "general";

/// Explanation used with the fallback pair.
pub const GENERAL_EXPLANATION: &str =
    "Based on your profile, we recommend our balanced daily care products.";

/// Advisory alternative products; never substituted automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternatives {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toothpaste: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toothbrush: Option<Product>,
}

/// A resolved recommendation. Created once per completed questionnaire and
/// immutable afterwards, except for the advice string which enrichment may
/// replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Primary-issue token (`general` on fallback).
    pub primary_issue: String,
    pub issue_label: String,
    pub toothpaste: Product,
    pub toothbrush: Product,
    pub alternatives: Alternatives,
    /// Display advice: the static explanation until enrichment replaces it.
    pub advice: String,
    /// The static explanation, kept as the enrichment fallback.
    pub explanation: String,
    /// Profile snapshot the recommendation was derived from.
    pub profile: UserProfile,
    pub disclaimer: String,
    pub created_at: DateTime<Utc>,
}

/// Resolves a primary issue into a product recommendation.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
}

impl Resolver {
    /// Build a resolver over a catalog. Fails if the catalog cannot supply
    /// the fallback pair (first toothpaste, second toothbrush).
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, CatalogError> {
        catalog.validate()?;
        if catalog.toothpaste.is_empty() || catalog.toothbrush.len() < 2 {
            return Err(CatalogError::MissingFallbackProducts);
        }
        Ok(Self { catalog })
    }

    /// Resolve a primary-issue label to a recommendation.
    ///
    /// Known labels get their mapped pair plus advisory alternatives;
    /// anything else gets the fallback pair and the generic explanation.
    pub fn resolve(&self, primary_issue: &str, profile: &UserProfile) -> Recommendation {
        let mapping = PrimaryIssue::parse(primary_issue)
            .and_then(|issue| self.catalog.mapping_for(issue));

        let (issue_token, toothpaste, toothbrush, alternatives, explanation) = match mapping {
            Some(mapping) => {
                let toothpaste = self
                    .catalog
                    .product(&mapping.toothpaste_id)
                    .cloned()
                    .unwrap_or_else(|| self.fallback_toothpaste());
                let toothbrush = self
                    .catalog
                    .product(&mapping.toothbrush_id)
                    .cloned()
                    .unwrap_or_else(|| self.fallback_toothbrush());
                let alternatives = Alternatives {
                    toothpaste: self
                        .catalog
                        .toothpaste
                        .iter()
                        .find(|p| p.id != toothpaste.id)
                        .cloned(),
                    toothbrush: self
                        .catalog
                        .toothbrush
                        .iter()
                        .find(|p| p.id != toothbrush.id && p.id != EXCLUDED_ALT_TOOTHBRUSH)
                        .cloned(),
                };
                (
                    primary_issue.to_string(),
                    toothpaste,
                    toothbrush,
                    alternatives,
                    mapping.explanation.clone(),
                )
            }
            None => (
                GENERAL_ISSUE.to_string(),
                self.fallback_toothpaste(),
                self.fallback_toothbrush(),
                Alternatives {
                    toothpaste: None,
                    toothbrush: None,
                },
                GENERAL_EXPLANATION.to_string(),
            ),
        };

        Recommendation {
            issue_label: issue_label(&issue_token),
            primary_issue: issue_token,
            toothpaste,
            toothbrush,
            alternatives,
            advice: explanation.clone(),
            explanation,
            profile: profile.clone(),
            disclaimer: self.catalog.disclaimer.text.clone(),
            created_at: Utc::now(),
        }
    }

    fn fallback_toothpaste(&self) -> Product {
        self.catalog
            .toothpaste
            .first()
            .cloned()
            .expect("checked at construction")
    }

    fn fallback_toothbrush(&self) -> Product {
        self.catalog
            .toothbrush
            .get(1)
            .cloned()
            .expect("checked at construction")
    }
}

/// Human label for an issue token; unknown tokens pass through unchanged.
pub fn issue_label(token: &str) -> String {
    PrimaryIssue::parse(token)
        .map(|issue| issue.label().to_string())
        .unwrap_or_else(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new(Arc::new(Catalog::verident())).unwrap()
    }

    #[test]
    fn each_issue_resolves_to_its_mapped_pair() {
        let resolver = resolver();
        let profile = UserProfile::default();
        let expected = [
            ("sensitivity", "tp-sensitivity", "tb-soft"),
            ("plaque", "tp-plaque", "tb-firm"),
            ("ulcers", "tp-ulcers", "tb-soft"),
            ("badBreath", "tp-breath", "tb-mild"),
        ];
        for (token, paste_id, brush_id) in expected {
            let rec = resolver.resolve(token, &profile);
            assert_eq!(rec.toothpaste.id, paste_id, "toothpaste for {token}");
            assert_eq!(rec.toothbrush.id, brush_id, "toothbrush for {token}");
            assert_eq!(rec.primary_issue, token);
            assert_eq!(rec.advice, rec.explanation);
            assert!(!rec.disclaimer.is_empty());
        }
    }

    #[test]
    fn unknown_label_degrades_to_fallback_pair() {
        let resolver = resolver();
        let rec = resolver.resolve("unknown-label", &UserProfile::default());
        assert_eq!(rec.toothpaste.id, "tp-sensitivity");
        assert_eq!(rec.toothbrush.id, "tb-mild");
        assert_eq!(rec.primary_issue, GENERAL_ISSUE);
        assert_eq!(rec.issue_label, GENERAL_ISSUE);
        assert_eq!(rec.explanation, GENERAL_EXPLANATION);
        assert!(rec.alternatives.toothpaste.is_none());
        assert!(rec.alternatives.toothbrush.is_none());
    }

    #[test]
    fn alternatives_differ_from_chosen_and_skip_excluded_brush() {
        let resolver = resolver();
        let profile = UserProfile::default();
        for token in ["sensitivity", "plaque", "ulcers", "badBreath"] {
            let rec = resolver.resolve(token, &profile);
            let alt_paste = rec.alternatives.toothpaste.as_ref().unwrap();
            assert_ne!(alt_paste.id, rec.toothpaste.id);
            let alt_brush = rec.alternatives.toothbrush.as_ref().unwrap();
            assert_ne!(alt_brush.id, rec.toothbrush.id);
            assert_ne!(alt_brush.id, EXCLUDED_ALT_TOOTHBRUSH);
        }
    }

    #[test]
    fn alternatives_are_first_in_catalog_order() {
        let resolver = resolver();
        let rec = resolver.resolve("plaque", &UserProfile::default());
        // Chosen pair is tp-plaque/tb-firm, so the first differing entries
        // are tp-sensitivity and tb-soft.
        assert_eq!(rec.alternatives.toothpaste.unwrap().id, "tp-sensitivity");
        assert_eq!(rec.alternatives.toothbrush.unwrap().id, "tb-soft");
    }

    #[test]
    fn issue_labels_map_known_tokens() {
        assert_eq!(issue_label("plaque"), "Plaque Buildup");
        assert_eq!(issue_label("badBreath"), "Bad Breath");
        assert_eq!(issue_label("general"), "general");
    }

    #[test]
    fn resolver_rejects_catalog_without_fallback_pair() {
        let mut catalog = Catalog::verident();
        catalog.toothbrush.truncate(1);
        // Drop mappings referencing the removed brushes so validate() isn't
        // the failure being tested.
        catalog
            .mappings
            .retain(|m| catalog.toothbrush.iter().any(|b| b.id == m.toothbrush_id));
        assert!(matches!(
            Resolver::new(Arc::new(catalog)),
            Err(CatalogError::MissingFallbackProducts)
        ));
    }

    #[test]
    fn recommendation_serializes_camel_case() {
        let resolver = resolver();
        let rec = resolver.resolve("ulcers", &UserProfile::default());
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["primaryIssue"], "ulcers");
        assert_eq!(value["issueLabel"], "Oral Ulcers");
        assert!(value["toothpaste"]["whyItWorks"].is_string());
    }
}
