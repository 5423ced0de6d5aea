//! Static product catalog and questionnaire content.
//!
//! The catalog is the advisor's only data source: questions, products, the
//! issue→product mapping, and the conversational copy. Everything is
//! immutable once built. Serving it from a store instead of the built-in
//! tables is a swap behind [`Catalog`], not a rewrite.

pub mod data;
pub mod model;

use std::collections::{BTreeMap, BTreeSet};

pub use data::{EXCLUDED_ALT_TOOTHBRUSH, PRIMARY_QUESTION_ID};
pub use model::{
    AnswerOption, BrandInfo, Category, Disclaimer, IssueMapping, Product, ProductKind, ProfileKey,
    Question, RecommendationRule,
};

use crate::classifier::PrimaryIssue;
use crate::error::CatalogError;

/// The full static catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub brand: BrandInfo,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    pub toothpaste: Vec<Product>,
    pub toothbrush: Vec<Product>,
    pub mappings: Vec<IssueMapping>,
    pub rules: Vec<RecommendationRule>,
    pub greetings: Vec<String>,
    /// Per-category acknowledgement line shown after an answer.
    pub transitions: BTreeMap<String, String>,
    pub disclaimer: Disclaimer,
}

impl Catalog {
    /// Number of questionnaire steps.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question displayed at a zero-based step, if any.
    pub fn question_at(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    /// Look up a product by id across both product lists.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.toothpaste
            .iter()
            .chain(self.toothbrush.iter())
            .find(|p| p.id == id)
    }

    /// Total number of products.
    pub fn product_count(&self) -> usize {
        self.toothpaste.len() + self.toothbrush.len()
    }

    /// The mapping entry for a primary issue.
    pub fn mapping_for(&self, issue: PrimaryIssue) -> Option<&IssueMapping> {
        self.mappings.iter().find(|m| m.issue == issue)
    }

    /// Acknowledgement line for a question category.
    pub fn transition_for(&self, category_id: &str) -> Option<&str> {
        self.transitions.get(category_id).map(String::as_str)
    }

    /// Check catalog invariants: unique product ids, every mapped product
    /// id resolvable, every question category declared.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for product in self.toothpaste.iter().chain(self.toothbrush.iter()) {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        for mapping in &self.mappings {
            for product_id in [&mapping.toothpaste_id, &mapping.toothbrush_id] {
                if self.product(product_id).is_none() {
                    return Err(CatalogError::MissingMappedProduct {
                        issue: mapping.issue.token().to_string(),
                        product_id: product_id.clone(),
                    });
                }
            }
        }

        let category_ids: BTreeSet<&str> =
            self.categories.iter().map(|c| c.id.as_str()).collect();
        for question in &self.questions {
            if !category_ids.contains(question.category_id.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    question_id: question.id.clone(),
                    category_id: question.category_id.clone(),
                });
            }
        }

        Ok(())
    }
}
