use serde::{Deserialize, Serialize};

pub type FlowerId = u64;

/// A flower held in inventory. `price` is the unit price in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flower {
    pub id: FlowerId,
    pub name: String,
    pub stock: i64,
    pub price: i64,
}

/// Payload for creating a new flower.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlowerCreate {
    pub name: String,
    pub stock: i64,
    pub price: i64,
}

impl Flower {
    pub fn new(id: FlowerId, name: impl Into<String>, stock: i64, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
            price,
        }
    }

    /// Point-in-time check that `quantity` units are available.
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Price of `quantity` units, or `None` if it does not fit in an `i64`.
    pub fn price_for(&self, quantity: i64) -> Option<i64> {
        quantity.checked_mul(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_check_is_inclusive() {
        let rose = Flower::new(1, "Rose", 5, 10);
        assert!(rose.has_stock_for(5));
        assert!(!rose.has_stock_for(6));
    }

    #[test]
    fn test_price_for_multiplies_unit_price() {
        let rose = Flower::new(1, "Rose", 5, 10);
        assert_eq!(rose.price_for(3), Some(30));
        assert_eq!(Flower::new(2, "Orchid", 1, i64::MAX).price_for(2), None);
    }
}
