//! Dashboard aggregates over products and history.

use serde::{Deserialize, Serialize};

use crate::movement::MovementEvent;
use crate::product::{Product, StockStatus};

/// Product counts by stock status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub total: usize,
    pub low: usize,
    pub normal: usize,
    pub excess: usize,
}

impl StockSummary {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(Self::default(), |mut acc, p| {
                acc.total += 1;
                match p.stock_status {
                    StockStatus::Low => acc.low += 1,
                    StockStatus::Normal => acc.normal += 1,
                    StockStatus::Excess => acc.excess += 1,
                }
                acc
            })
    }

    pub fn count(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::Low => self.low,
            StockStatus::Normal => self.normal,
            StockStatus::Excess => self.excess,
        }
    }
}

/// The newest `limit` movements by date, most recent first.
///
/// Movements sharing a date keep the later-inserted one first.
pub fn recent_movements(history: &[MovementEvent], limit: usize) -> Vec<&MovementEvent> {
    let mut recent: Vec<&MovementEvent> = history.iter().rev().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}
