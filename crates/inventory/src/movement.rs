use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, MovementId, ProductId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Inbound,
    Outbound,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Inbound => "inbound",
            MovementType::Outbound => "outbound",
        }
    }
}

/// One entry of the movement history.
///
/// `product_name` is a snapshot taken when the movement was recorded; renaming
/// the product later does not rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementEvent {
    pub id: MovementId,
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: u64,
    pub date: DateTime<Utc>,
    pub staff: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entity for MovementEvent {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl MovementEvent {
    /// Signed change this movement applies to on-hand stock.
    pub fn signed_quantity(&self) -> i128 {
        match self.movement_type {
            MovementType::Inbound => i128::from(self.quantity),
            MovementType::Outbound => -i128::from(self.quantity),
        }
    }
}
