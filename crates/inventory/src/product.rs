use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Stock classification of a product relative to its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Normal,
    Excess,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Low => "low",
            StockStatus::Normal => "normal",
            StockStatus::Excess => "excess",
        }
    }
}

/// Classify an on-hand quantity against the normal band `[min_level, max_level]`.
///
/// Both bounds are inclusive to `Normal`.
pub fn classify(quantity: u64, min_level: u64, max_level: u64) -> StockStatus {
    if quantity < min_level {
        StockStatus::Low
    } else if quantity > max_level {
        StockStatus::Excess
    } else {
        StockStatus::Normal
    }
}

/// Validated stock thresholds (`min < max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevels {
    min: u64,
    max: u64,
    optimal: Option<u64>,
}

impl ValueObject for StockLevels {}

impl StockLevels {
    pub fn new(min: u64, max: u64, optimal: Option<u64>) -> DomainResult<Self> {
        if min >= max {
            return Err(DomainError::validation(format!(
                "min stock level ({min}) must be less than max stock level ({max})"
            )));
        }
        Ok(Self { min, max, optimal })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Informational only; never checked against `min`/`max`.
    pub fn optimal(&self) -> Option<u64> {
        self.optimal
    }

    pub fn classify(&self, quantity: u64) -> StockStatus {
        classify(quantity, self.min, self.max)
    }
}

/// A registered product.
///
/// `stock_status` is stored alongside its inputs. The ledger recomputes it on
/// registration and on every movement; callers replacing a product through
/// `update_product` are responsible for keeping it consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub stock_quantity: u64,
    pub min_stock_level: u64,
    pub max_stock_level: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_stock_level: Option<u64>,
    pub stock_status: StockStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Status derived from the current quantity and thresholds.
    pub fn derived_status(&self) -> StockStatus {
        classify(self.stock_quantity, self.min_stock_level, self.max_stock_level)
    }

    /// True when the stored status matches the derived one.
    pub fn is_status_consistent(&self) -> bool {
        self.stock_status == self.derived_status()
    }

    /// Return a copy with `stock_status` recomputed.
    ///
    /// Callers editing quantity or thresholds directly should pass the result of
    /// this to `StockLedger::update_product`.
    pub fn with_recomputed_status(mut self) -> Self {
        self.stock_status = self.derived_status();
        self
    }
}

/// Input for product registration: every product field except the derived
/// status and the creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub stock_quantity: u64,
    pub min_stock_level: u64,
    pub max_stock_level: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_stock_level: Option<u64>,
}

impl NewProduct {
    /// Check required fields and threshold ordering.
    pub fn validate(&self) -> DomainResult<StockLevels> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        StockLevels::new(
            self.min_stock_level,
            self.max_stock_level,
            self.optimal_stock_level,
        )
    }

    /// Build the stored product (status derived, `created_at` stamped).
    pub fn into_product(self, levels: StockLevels, created_at: DateTime<Utc>) -> Product {
        Product {
            stock_status: levels.classify(self.stock_quantity),
            id: self.id,
            name: self.name,
            category: self.category,
            location: self.location,
            stock_quantity: self.stock_quantity,
            min_stock_level: levels.min(),
            max_stock_level: levels.max(),
            optimal_stock_level: levels.optimal(),
            created_at,
        }
    }
}
