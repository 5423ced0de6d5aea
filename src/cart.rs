//! Session cart ledger.
//!
//! A plain in-memory line-item list. Prices stay display strings on the
//! products; totals are computed by stripping the currency formatting at
//! summation time.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").expect("static regex"));

/// One cart line: a product at a quantity of at least one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Per-session cart. Lines keep insertion order; adding an item already
/// present bumps its quantity instead of appending a duplicate line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product, merging with an existing line by id.
    pub fn add_item(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Set a line's quantity outright. Zero removes the line; an unknown
    /// id is a no-op.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line entirely. Absent ids are a no-op.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity over all lines, in whole currency units.
    /// Prices that do not parse count as zero.
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| parse_price(&l.product.price) * i64::from(l.quantity))
            .sum()
    }
}

/// Extract the numeric amount from a display price like `₹299`.
fn parse_price(price: &str) -> i64 {
    NON_DIGITS
        .replace_all(price, "")
        .parse::<i64>()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::verident().product(id).cloned().unwrap()
    }

    #[test]
    fn adding_same_product_merges_lines() {
        let mut cart = Cart::new();
        let paste = product("tp-sensitivity");
        cart.add_item(&paste);
        cart.add_item(&paste);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_item(&product("tb-soft"));
        cart.update_quantity("tb-soft", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_sets_absolute_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&product("tp-plaque"));
        cart.update_quantity("tp-plaque", 5);
        assert_eq!(cart.lines()[0].quantity, 5);
        // Unknown id does nothing.
        cart.update_quantity("tp-missing", 3);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn total_parses_rupee_prices() {
        let mut cart = Cart::new();
        let paste = product("tp-sensitivity"); // ₹299
        cart.add_item(&paste);
        cart.update_quantity(&paste.id, 3);
        assert_eq!(cart.total(), 897);
    }

    #[test]
    fn malformed_price_counts_as_zero() {
        let mut cart = Cart::new();
        let mut paste = product("tp-breath");
        paste.price = "call us".to_string();
        cart.add_item(&paste);
        cart.add_item(&product("tb-firm")); // ₹149
        assert_eq!(cart.total(), 149);
    }

    #[test]
    fn remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product("tp-ulcers"));
        cart.add_item(&product("tb-mild"));
        cart.remove_item("tp-ulcers");
        assert_eq!(cart.lines().len(), 1);
        cart.remove_item("not-in-cart");
        assert_eq!(cart.lines().len(), 1);
        cart.clear();
        assert!(cart.is_empty());
    }
}
