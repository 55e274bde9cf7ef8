use serde::{Deserialize, Serialize};
use std::fmt;

/// One product row from a listing file, normalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub product: String,
    pub price: f64,
    pub weight: f64,
    pub source_file: String,
    pub unit_price: f64,
}

impl Entry {
    /// Builds an entry and derives its price per kilogram. A non-positive
    /// weight yields a unit price of zero.
    pub fn new(
        product: impl Into<String>,
        price: f64,
        weight: f64,
        source_file: impl Into<String>,
    ) -> Self {
        let unit_price = if weight > 0.0 { price / weight } else { 0.0 };
        Self {
            product: product.into(),
            price,
            weight,
            source_file: source_file.into(),
            unit_price,
        }
    }
}

/// The three columns every listing must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Product,
    Price,
    Weight,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Product, Role::Price, Role::Weight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Product => "product",
            Role::Price => "price",
            Role::Weight => "weight",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub product: usize,
    pub price: usize,
    pub weight: usize,
}

impl ColumnIndices {
    pub fn max(&self) -> usize {
        self.product.max(self.price).max(self.weight)
    }

    pub fn index_of(&self, role: Role) -> usize {
        match role {
            Role::Product => self.product,
            Role::Price => self.price,
            Role::Weight => self.weight,
        }
    }
}

/// Formats a price or weight the way listings show them: shortest form,
/// but whole numbers keep one fractional digit (`100.0`).
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
