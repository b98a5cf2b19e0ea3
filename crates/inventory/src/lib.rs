//! Inventory domain module: the stock ledger.
//!
//! This crate contains the business rules for products and stock movements,
//! implemented as deterministic domain logic (no IO, no storage).

pub mod history;
pub mod ledger;
pub mod movement;
pub mod product;
pub mod seed;
pub mod summary;

pub use history::{HistoryFilter, HistoryView};
pub use ledger::{
    DeleteProduct, LedgerCommand, LedgerEvent, ProductDeleted, ProductRegistered,
    ProductUpdated, RecordMovement, REGISTRATION_NOTE, REGISTRATION_STAFF, RegisterProduct,
    StockLedger, StockMoved, UpdateProduct,
};
pub use movement::{MovementEvent, MovementType};
pub use product::{NewProduct, Product, StockLevels, StockStatus, classify};
pub use seed::{seed_history, seed_products};
pub use summary::{StockSummary, recent_movements};
