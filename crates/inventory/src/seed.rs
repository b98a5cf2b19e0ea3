//! Built-in sample dataset used when no stored state is available.

use chrono::{DateTime, TimeZone, Utc};

use stockroom_core::{Clock, MovementId, ProductId};

use crate::ledger::StockLedger;
use crate::movement::{MovementEvent, MovementType};
use crate::product::{Product, classify};

fn seed_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn product(
    id: &str,
    name: &str,
    location: &str,
    (quantity, min, max): (u64, u64, u64),
    day: u32,
) -> Product {
    Product {
        id: ProductId::from_raw(id),
        name: name.to_string(),
        category: "electronics".to_string(),
        location: location.to_string(),
        stock_quantity: quantity,
        min_stock_level: min,
        max_stock_level: max,
        optimal_stock_level: None,
        stock_status: classify(quantity, min, max),
        created_at: seed_date(day),
    }
}

fn movement(
    id: &str,
    (product_id, product_name): (&str, &str),
    movement_type: MovementType,
    quantity: u64,
    day: u32,
    staff: &str,
) -> MovementEvent {
    MovementEvent {
        id: MovementId::from_raw(id),
        product_id: ProductId::from_raw(product_id),
        product_name: product_name.to_string(),
        movement_type,
        quantity,
        date: seed_date(day),
        staff: staff.to_string(),
        note: None,
    }
}

/// Four sample products: two low, one excess, one normal.
pub fn seed_products() -> Vec<Product> {
    vec![
        product("A-001", "Laptop", "A-1-2", (5, 10, 30), 20),
        product("B-042", "Monitor", "B-3-1", (3, 5, 20), 21),
        product("C-103", "Keyboard", "C-2-4", (120, 30, 100), 22),
        product("D-205", "Mouse", "D-1-3", (45, 20, 80), 23),
    ]
}

/// Four sample history entries, in the order they were originally logged.
pub fn seed_history() -> Vec<MovementEvent> {
    vec![
        movement("H-001", ("A-001", "Laptop"), MovementType::Inbound, 10, 20, "Kim"),
        movement("H-002", ("B-042", "Monitor"), MovementType::Inbound, 5, 21, "Lee"),
        movement("H-003", ("A-001", "Laptop"), MovementType::Outbound, 5, 24, "Park"),
        movement("H-004", ("C-103", "Keyboard"), MovementType::Inbound, 120, 22, "Kim"),
    ]
}

impl<C: Clock> StockLedger<C> {
    /// Ledger pre-populated with the sample dataset.
    pub fn seeded(clock: C) -> Self {
        Self::from_parts(seed_products(), seed_history(), clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::StockStatus;
    use stockroom_core::SystemClock;

    #[test]
    fn seed_statuses_are_derived() {
        let products = seed_products();
        let statuses: Vec<StockStatus> = products.iter().map(|p| p.stock_status).collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::Low,
                StockStatus::Low,
                StockStatus::Excess,
                StockStatus::Normal
            ]
        );
        assert!(products.iter().all(Product::is_status_consistent));
    }

    #[test]
    fn seeded_ledger_supports_movements() {
        let mut ledger = StockLedger::seeded(SystemClock);
        assert_eq!(ledger.low_stock_products().count(), 2);
        ledger
            .record_inbound(&ProductId::from_raw("B-042"), 2, "Lee", None)
            .unwrap();
        let monitor = ledger.product(&ProductId::from_raw("B-042")).unwrap();
        assert_eq!(monitor.stock_status, StockStatus::Normal);
        assert_eq!(ledger.history().len(), 5);
    }
}
