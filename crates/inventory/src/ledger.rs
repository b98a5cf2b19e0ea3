use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{
    Aggregate, AggregateRoot, Clock, DomainError, DomainResult, Entity, MovementId, ProductId,
    SystemClock,
};
use stockroom_events::Event;

use crate::history::{HistoryFilter, HistoryView};
use crate::movement::{MovementEvent, MovementType};
use crate::product::{NewProduct, Product, StockStatus, classify};
use crate::summary::{StockSummary, recent_movements};

/// Staff recorded on the movement synthesized by product registration.
pub const REGISTRATION_STAFF: &str = "system";
/// Note recorded on the movement synthesized by product registration.
pub const REGISTRATION_NOTE: &str = "registration";

/// The stock ledger: authoritative product list plus movement history.
///
/// All mutation goes through commands (`handle` decides, `apply` evolves), so a
/// rejected operation leaves both collections untouched and a successful one
/// updates quantity, status and history together.
#[derive(Debug, Clone)]
pub struct StockLedger<C = SystemClock> {
    products: Vec<Product>,
    history: Vec<MovementEvent>,
    version: u64,
    clock: C,
}

/// Command: RegisterProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProduct {
    pub product: NewProduct,
    pub movement_id: MovementId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RecordMovement (inbound or outbound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMovement {
    pub product_id: ProductId,
    pub movement_type: MovementType,
    pub quantity: u64,
    pub staff: String,
    pub note: Option<String>,
    pub movement_id: MovementId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateProduct (wholesale replacement, caller-trusted status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCommand {
    RegisterProduct(RegisterProduct),
    RecordMovement(RecordMovement),
    UpdateProduct(UpdateProduct),
    DeleteProduct(DeleteProduct),
}

/// Event: ProductRegistered (product plus its initial inbound movement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRegistered {
    pub product: Product,
    pub movement: MovementEvent,
}

/// Event: StockMoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMoved {
    pub movement: MovementEvent,
    pub stock_quantity: u64,
    pub stock_status: StockStatus,
}

/// Event: ProductUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDeleted {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    ProductRegistered(ProductRegistered),
    StockMoved(StockMoved),
    ProductUpdated(ProductUpdated),
    ProductDeleted(ProductDeleted),
}

impl LedgerEvent {
    /// Whether applying this event appends to the movement history.
    pub fn appends_history(&self) -> bool {
        matches!(
            self,
            LedgerEvent::ProductRegistered(_) | LedgerEvent::StockMoved(_)
        )
    }
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::ProductRegistered(_) => "inventory.product.registered",
            LedgerEvent::StockMoved(e) => match e.movement.movement_type {
                MovementType::Inbound => "inventory.stock.received",
                MovementType::Outbound => "inventory.stock.issued",
            },
            LedgerEvent::ProductUpdated(_) => "inventory.product.updated",
            LedgerEvent::ProductDeleted(_) => "inventory.product.deleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LedgerEvent::ProductRegistered(e) => e.product.created_at,
            LedgerEvent::StockMoved(e) => e.movement.date,
            LedgerEvent::ProductUpdated(e) => e.occurred_at,
            LedgerEvent::ProductDeleted(e) => e.occurred_at,
        }
    }
}

impl StockLedger<SystemClock> {
    /// Empty ledger stamped with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for StockLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> AggregateRoot for StockLedger<C> {
    fn version(&self) -> u64 {
        self.version
    }
}

impl<C> Aggregate for StockLedger<C> {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::ProductRegistered(e) => {
                self.products.push(e.product.clone());
                self.history.push(e.movement.clone());
            }
            LedgerEvent::StockMoved(e) => {
                if let Some(product) = self.product_mut(&e.movement.product_id) {
                    product.stock_quantity = e.stock_quantity;
                    product.stock_status = e.stock_status;
                }
                self.history.push(e.movement.clone());
            }
            LedgerEvent::ProductUpdated(e) => {
                if let Some(product) = self.product_mut(&e.product.id) {
                    *product = e.product.clone();
                }
            }
            LedgerEvent::ProductDeleted(e) => {
                self.products.retain(|p| !p.has_id(&e.product_id));
            }
        }

        // +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::RegisterProduct(cmd) => self.handle_register(cmd),
            LedgerCommand::RecordMovement(cmd) => self.handle_movement(cmd),
            LedgerCommand::UpdateProduct(cmd) => self.handle_update(cmd),
            LedgerCommand::DeleteProduct(cmd) => self.handle_delete(cmd),
        }
    }
}

impl<C> StockLedger<C> {
    fn product_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.has_id(id))
    }

    fn handle_register(&self, cmd: &RegisterProduct) -> DomainResult<Vec<LedgerEvent>> {
        let levels = cmd.product.validate()?;
        if self.product(&cmd.product.id).is_some() {
            return Err(DomainError::duplicate_id(cmd.product.id.as_str()));
        }

        let product = cmd.product.clone().into_product(levels, cmd.occurred_at);
        let movement = MovementEvent {
            id: cmd.movement_id.clone(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            movement_type: MovementType::Inbound,
            quantity: product.stock_quantity,
            date: cmd.occurred_at,
            staff: REGISTRATION_STAFF.to_string(),
            note: Some(REGISTRATION_NOTE.to_string()),
        };

        Ok(vec![LedgerEvent::ProductRegistered(ProductRegistered {
            product,
            movement,
        })])
    }

    fn handle_movement(&self, cmd: &RecordMovement) -> DomainResult<Vec<LedgerEvent>> {
        if cmd.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let product = self
            .product(&cmd.product_id)
            .ok_or_else(|| DomainError::not_found(cmd.product_id.as_str()))?;

        let stock_quantity = match cmd.movement_type {
            MovementType::Inbound => product
                .stock_quantity
                .checked_add(cmd.quantity)
                .ok_or_else(|| DomainError::validation("stock quantity overflow"))?,
            MovementType::Outbound => product
                .stock_quantity
                .checked_sub(cmd.quantity)
                .ok_or_else(|| {
                    DomainError::insufficient_stock(
                        cmd.product_id.as_str(),
                        cmd.quantity,
                        product.stock_quantity,
                    )
                })?,
        };
        let stock_status = classify(
            stock_quantity,
            product.min_stock_level,
            product.max_stock_level,
        );

        let movement = MovementEvent {
            id: cmd.movement_id.clone(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            movement_type: cmd.movement_type,
            quantity: cmd.quantity,
            date: cmd.occurred_at,
            staff: cmd.staff.clone(),
            note: cmd.note.clone(),
        };

        Ok(vec![LedgerEvent::StockMoved(StockMoved {
            movement,
            stock_quantity,
            stock_status,
        })])
    }

    fn handle_update(&self, cmd: &UpdateProduct) -> DomainResult<Vec<LedgerEvent>> {
        let existing = self
            .product(&cmd.product.id)
            .ok_or_else(|| DomainError::not_found(cmd.product.id.as_str()))?;

        // Stored verbatim apart from the creation timestamp, which never changes.
        let mut product = cmd.product.clone();
        product.created_at = existing.created_at;

        Ok(vec![LedgerEvent::ProductUpdated(ProductUpdated {
            product,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_delete(&self, cmd: &DeleteProduct) -> DomainResult<Vec<LedgerEvent>> {
        if self.product(&cmd.product_id).is_none() {
            return Ok(vec![]);
        }
        Ok(vec![LedgerEvent::ProductDeleted(ProductDeleted {
            product_id: cmd.product_id.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    /// Products in stored order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }

    /// Full movement history in insertion order.
    pub fn history(&self) -> &[MovementEvent] {
        &self.history
    }

    /// Read-only view of the history entries matching `filter`.
    pub fn query_history(&self, filter: HistoryFilter) -> HistoryView<'_> {
        HistoryView::new(&self.history, filter)
    }

    /// Product counts by stock status.
    pub fn stock_summary(&self) -> StockSummary {
        StockSummary::from_products(&self.products)
    }

    /// The newest `limit` movements, most recent first.
    pub fn recent_movements(&self, limit: usize) -> Vec<&MovementEvent> {
        recent_movements(&self.history, limit)
    }

    /// Products currently below their minimum level, in stored order.
    pub fn low_stock_products(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|p| p.stock_status == StockStatus::Low)
    }

    pub fn into_parts(self) -> (Vec<Product>, Vec<MovementEvent>) {
        (self.products, self.history)
    }
}

impl<C: Clock> StockLedger<C> {
    /// Empty ledger using the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), clock)
    }

    /// Rebuild a ledger from previously stored collections.
    ///
    /// Records are taken as-is (including stored statuses); the version starts at 0.
    pub fn from_parts(products: Vec<Product>, history: Vec<MovementEvent>, clock: C) -> Self {
        Self {
            products,
            history,
            version: 0,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Register a new product and record its initial stock as an inbound movement.
    pub fn register_product(&mut self, product: NewProduct) -> DomainResult<&Product> {
        let id = product.id.clone();
        let cmd = RegisterProduct {
            product,
            movement_id: MovementId::generate(),
            occurred_at: self.clock.now(),
        };
        self.dispatch(LedgerCommand::RegisterProduct(cmd))?;
        self.product(&id).ok_or_else(|| DomainError::not_found(id.as_str()))
    }

    /// Add `quantity` to a product's stock. No upper bound is enforced.
    pub fn record_inbound(
        &mut self,
        product_id: &ProductId,
        quantity: u64,
        staff: impl Into<String>,
        note: Option<String>,
    ) -> DomainResult<MovementEvent> {
        self.record_movement(product_id, MovementType::Inbound, quantity, staff.into(), note)
    }

    /// Remove `quantity` from a product's stock; rejected outright when it
    /// exceeds what is on hand.
    pub fn record_outbound(
        &mut self,
        product_id: &ProductId,
        quantity: u64,
        staff: impl Into<String>,
        note: Option<String>,
    ) -> DomainResult<MovementEvent> {
        self.record_movement(product_id, MovementType::Outbound, quantity, staff.into(), note)
    }

    fn record_movement(
        &mut self,
        product_id: &ProductId,
        movement_type: MovementType,
        quantity: u64,
        staff: String,
        note: Option<String>,
    ) -> DomainResult<MovementEvent> {
        let cmd = RecordMovement {
            product_id: product_id.clone(),
            movement_type,
            quantity,
            staff,
            note,
            movement_id: MovementId::generate(),
            occurred_at: self.clock.now(),
        };
        let events = self.dispatch(LedgerCommand::RecordMovement(cmd))?;
        events
            .into_iter()
            .find_map(|e| match e {
                LedgerEvent::StockMoved(moved) => Some(moved.movement),
                _ => None,
            })
            .ok_or_else(|| DomainError::not_found(product_id.as_str()))
    }

    /// Replace the stored product with the same id.
    ///
    /// The record is trusted verbatim: `stock_status` is NOT recomputed, so
    /// callers editing quantity or thresholds should pass
    /// [`Product::with_recomputed_status`]. `created_at` is kept from the stored
    /// record.
    pub fn update_product(&mut self, product: Product) -> DomainResult<()> {
        let cmd = UpdateProduct {
            product,
            occurred_at: self.clock.now(),
        };
        self.dispatch(LedgerCommand::UpdateProduct(cmd)).map(|_| ())
    }

    /// Remove a product. History is left untouched. Returns `false` when no
    /// product had that id.
    pub fn delete_product(&mut self, product_id: &ProductId) -> bool {
        let cmd = DeleteProduct {
            product_id: product_id.clone(),
            occurred_at: self.clock.now(),
        };
        matches!(self.dispatch(LedgerCommand::DeleteProduct(cmd)), Ok(events) if !events.is_empty())
    }

    fn dispatch(&mut self, command: LedgerCommand) -> DomainResult<Vec<LedgerEvent>> {
        match stockroom_events::execute(self, &command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(
                        event_type = event.event_type(),
                        version = self.version,
                        "ledger event applied"
                    );
                }
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(error = %err, "ledger command rejected");
                Err(err)
            }
        }
    }
}
