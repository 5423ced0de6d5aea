//! Admin-facing catalog summary.

use serde::Serialize;

use crate::catalog::Catalog;

/// Count summary of the live catalog, served on the admin endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub questions: usize,
    pub products: usize,
    pub rules: usize,
    pub categories: usize,
}

impl CatalogSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            questions: catalog.question_count(),
            products: catalog.product_count(),
            rules: catalog.rules.len(),
            categories: catalog.categories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_built_in_catalog() {
        let summary = CatalogSummary::from_catalog(&Catalog::verident());
        assert_eq!(
            summary,
            CatalogSummary {
                questions: 5,
                products: 7,
                rules: 4,
                categories: 5,
            }
        );
    }
}
