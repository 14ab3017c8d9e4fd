//! Product Pricing
//!
//! Plain data in, price out. Nothing to fake here.

use serde::{Deserialize, Serialize};

use crate::constants::GOLD_CUSTOMER_DISCOUNT;

/// A customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Gold customers get a discount
    pub is_gold: bool,
}

/// A product with a list price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Price before discounts
    pub list_price: f64,
}

impl Product {
    /// Price `customer` pays.
    #[must_use]
    pub fn price_for(&self, customer: &Customer) -> f64 {
        if customer.is_gold {
            self.list_price * (1.0 - GOLD_CUSTOMER_DISCOUNT)
        } else {
            self.list_price
        }
    }
}
