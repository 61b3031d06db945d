//! Order lines - one product at a quantity, and the non-empty collection
//! an order is made of
//!
//! Both types are immutable once built. Totals derive from unit price and
//! quantity; nothing here is stored redundantly.

use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::error::DomainError;
use crate::value_objects::{Price, Quantity};

/// One product at a quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    product: Product,
    quantity: Quantity,
}

impl OrderLine {
    /// Create a line from pre-validated parts.
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }

    /// Returns the product on this line.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the ordered quantity.
    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price scaled by quantity.
    pub fn line_total(&self) -> Price {
        self.product.unit_price().multiply(self.quantity.value())
    }
}

/// A non-empty ordered sequence of order lines
///
/// An order with nothing in it is not an order, so the emptiness check
/// lives here rather than in the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OrderLine>", into = "Vec<OrderLine>")]
pub struct OrderLines(Vec<OrderLine>);

impl OrderLines {
    /// Create a collection from at least one line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `lines` is empty.
    pub fn new(lines: Vec<OrderLine>) -> Result<Self, DomainError> {
        if lines.is_empty() {
            return Err(DomainError::validation(
                "an order must contain at least one order line",
            ));
        }
        Ok(Self(lines))
    }

    /// Number of lines. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Kept for API symmetry; always false by construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, OrderLine> {
        self.0.iter()
    }

    /// Returns the lines as a slice.
    pub fn lines(&self) -> &[OrderLine] {
        &self.0
    }

    /// Sum of every line total, seeded at `Price::ZERO`.
    ///
    /// Addition over non-negative amounts is commutative and associative,
    /// so insertion order never changes the result.
    pub fn total(&self) -> Price {
        self.0
            .iter()
            .fold(Price::ZERO, |acc, line| acc.add(line.line_total()))
    }
}

impl<'a> IntoIterator for &'a OrderLines {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<OrderLine>> for OrderLines {
    type Error = DomainError;

    fn try_from(lines: Vec<OrderLine>) -> Result<Self, Self::Error> {
        Self::new(lines)
    }
}

impl From<OrderLines> for Vec<OrderLine> {
    fn from(lines: OrderLines) -> Vec<OrderLine> {
        lines.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ProductId;
    use crate::value_objects::ProductName;

    fn line(id: &str, unit_price: i64, quantity: i64) -> OrderLine {
        OrderLine::new(
            Product::new(
                ProductId::new(id).unwrap(),
                ProductName::new(format!("product {}", id)).unwrap(),
                Price::of(unit_price).unwrap(),
            ),
            Quantity::of(quantity).unwrap(),
        )
    }

    #[test]
    fn line_total_multiplies_unit_price_by_quantity() {
        assert_eq!(line("SKU-001", 1000, 10).line_total(), Price::of(10000).unwrap());
    }

    #[test]
    fn empty_lines_rejected() {
        let result = OrderLines::new(Vec::new());
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn single_line_accepted() {
        let lines = OrderLines::new(vec![line("SKU-001", 1000, 2)]).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(!lines.is_empty());
    }

    #[test]
    fn total_sums_line_totals() {
        // 1000x2 + 700x3 + 500x3 = 2000 + 2100 + 1500 = 5600
        let lines = OrderLines::new(vec![
            line("SKU-001", 1000, 2),
            line("SKU-002", 700, 3),
            line("SKU-003", 500, 3),
        ])
        .unwrap();
        assert_eq!(lines.total(), Price::of(5600).unwrap());
    }

    #[test]
    fn total_is_insertion_order_independent() {
        let forward = OrderLines::new(vec![
            line("SKU-001", 1000, 2),
            line("SKU-002", 700, 3),
            line("SKU-003", 500, 3),
        ])
        .unwrap();
        let reversed = OrderLines::new(vec![
            line("SKU-003", 500, 3),
            line("SKU-002", 700, 3),
            line("SKU-001", 1000, 2),
        ])
        .unwrap();
        assert_eq!(forward.total(), reversed.total());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let lines = OrderLines::new(vec![line("SKU-001", 1000, 2), line("SKU-002", 700, 3)])
            .unwrap();
        let ids: Vec<&str> = lines.iter().map(|l| l.product().id().as_str()).collect();
        assert_eq!(ids, vec!["SKU-001", "SKU-002"]);
    }

    #[test]
    fn deserialize_empty_rejected() {
        let result: Result<OrderLines, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
