//! Movement history queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

use crate::movement::{MovementEvent, MovementType};

/// Filter criteria for history queries. Every field is optional; an empty
/// filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    #[serde(rename = "type")]
    pub movement_type: Option<MovementType>,
    /// Inclusive lower bound (from the start of this day, UTC).
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound (through the end of this day, UTC).
    pub end_date: Option<NaiveDate>,
    pub product_id: Option<ProductId>,
    /// Substring match against `staff`. An empty string matches everything.
    pub staff: Option<String>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movement_type(mut self, movement_type: MovementType) -> Self {
        self.movement_type = Some(movement_type);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn product_id(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn staff(mut self, staff: impl Into<String>) -> Self {
        self.staff = Some(staff.into());
        self
    }

    pub fn matches(&self, movement: &MovementEvent) -> bool {
        if let Some(t) = self.movement_type {
            if movement.movement_type != t {
                return false;
            }
        }

        let day = movement.date.date_naive();
        if let Some(start) = self.start_date {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if day > end {
                return false;
            }
        }

        if let Some(product_id) = &self.product_id {
            if &movement.product_id != product_id {
                return false;
            }
        }

        match &self.staff {
            Some(staff) => movement.staff.contains(staff.as_str()),
            None => true,
        }
    }
}

/// Lazy, restartable view over the history entries matching a filter.
///
/// Borrowing the ledger keeps the view read-only; each call to [`iter`](Self::iter)
/// walks the history again from the start, in insertion order.
#[derive(Debug, Clone)]
pub struct HistoryView<'a> {
    entries: &'a [MovementEvent],
    filter: HistoryFilter,
}

impl<'a> HistoryView<'a> {
    pub(crate) fn new(entries: &'a [MovementEvent], filter: HistoryFilter) -> Self {
        Self { entries, filter }
    }

    pub fn filter(&self) -> &HistoryFilter {
        &self.filter
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MovementEvent> + '_ {
        let entries: &'a [MovementEvent] = self.entries;
        entries.iter().filter(move |m| self.filter.matches(m))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn to_vec(&self) -> Vec<MovementEvent> {
        self.iter().cloned().collect()
    }
}
