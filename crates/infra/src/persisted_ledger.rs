//! Stock ledger with snapshot persistence after every change.

use anyhow::Context;

use stockroom_core::{AggregateRoot, Clock, DomainResult, ProductId, SystemClock};
use stockroom_inventory::{
    MovementEvent, NewProduct, Product, StockLedger, seed_history, seed_products,
};

use crate::config::StoreConfig;
use crate::kv_store::{DirectoryStore, KeyValueStore, StoreError};
use crate::snapshot::{Snapshot, save_history, save_products};

/// Owns a [`StockLedger`] and mirrors its collections into a key/value store.
///
/// The ledger itself does no IO. This wrapper observes each successful mutation
/// and writes the collection(s) it changed. Write failures are logged and do not
/// fail the operation: the in-memory ledger stays authoritative.
#[derive(Debug)]
pub struct PersistedLedger<S, C = SystemClock> {
    ledger: StockLedger<C>,
    store: S,
    persisted_version: u64,
}

impl PersistedLedger<DirectoryStore, SystemClock> {
    /// Open the directory store named by `config` and load the ledger from it.
    pub fn from_config(config: &StoreConfig) -> anyhow::Result<Self> {
        let store = DirectoryStore::open(&config.data_dir).with_context(|| {
            format!("failed to open data directory {:?}", config.data_dir)
        })?;
        Ok(Self::open(store, SystemClock, config.seed_on_empty))
    }
}

impl<S, C> PersistedLedger<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Load the ledger from `store`.
    ///
    /// Each collection that is absent or unreadable falls back to the sample
    /// dataset (or to empty when `seed_on_empty` is false).
    pub fn open(store: S, clock: C, seed_on_empty: bool) -> Self {
        let snapshot = Snapshot::load(&store);

        let products = snapshot.products.unwrap_or_else(|| {
            tracing::info!(seed = seed_on_empty, "no stored products; starting fresh");
            if seed_on_empty { seed_products() } else { Vec::new() }
        });
        let history = snapshot.history.unwrap_or_else(|| {
            tracing::info!(seed = seed_on_empty, "no stored history; starting fresh");
            if seed_on_empty { seed_history() } else { Vec::new() }
        });

        tracing::info!(
            products = products.len(),
            movements = history.len(),
            "stock ledger loaded"
        );

        let ledger = StockLedger::from_parts(products, history, clock);
        Self {
            persisted_version: ledger.version(),
            ledger,
            store,
        }
    }

    /// Read access to the ledger (products, history queries, summaries).
    pub fn ledger(&self) -> &StockLedger<C> {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register_product(&mut self, product: NewProduct) -> DomainResult<Product> {
        let product = self.ledger.register_product(product)?.clone();
        self.sync(true);
        Ok(product)
    }

    pub fn record_inbound(
        &mut self,
        product_id: &ProductId,
        quantity: u64,
        staff: impl Into<String>,
        note: Option<String>,
    ) -> DomainResult<MovementEvent> {
        let movement = self.ledger.record_inbound(product_id, quantity, staff, note)?;
        self.sync(true);
        Ok(movement)
    }

    pub fn record_outbound(
        &mut self,
        product_id: &ProductId,
        quantity: u64,
        staff: impl Into<String>,
        note: Option<String>,
    ) -> DomainResult<MovementEvent> {
        let movement = self.ledger.record_outbound(product_id, quantity, staff, note)?;
        self.sync(true);
        Ok(movement)
    }

    /// See [`StockLedger::update_product`]; the status is not recomputed.
    pub fn update_product(&mut self, product: Product) -> DomainResult<()> {
        self.ledger.update_product(product)?;
        self.sync(false);
        Ok(())
    }

    pub fn delete_product(&mut self, product_id: &ProductId) -> bool {
        let removed = self.ledger.delete_product(product_id);
        self.sync(false);
        removed
    }

    /// Write both collections unconditionally.
    pub fn flush(&self) -> Result<(), StoreError> {
        save_products(&self.store, self.ledger.products())?;
        save_history(&self.store, self.ledger.history())
    }

    pub fn into_inner(self) -> (StockLedger<C>, S) {
        (self.ledger, self.store)
    }

    fn sync(&mut self, history_changed: bool) {
        if self.ledger.version() == self.persisted_version {
            return;
        }
        self.persisted_version = self.ledger.version();

        if let Err(err) = save_products(&self.store, self.ledger.products()) {
            tracing::error!(error = %err, "failed to persist products");
        }
        if history_changed {
            if let Err(err) = save_history(&self.store, self.ledger.history()) {
                tracing::error!(error = %err, "failed to persist history");
            }
        }
    }
}
