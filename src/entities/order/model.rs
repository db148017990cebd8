//! Order entity model, status lifecycle, and validation rules

use crate::core::error::ValidationError;
use crate::core::resource::{Deletable, Resource};
use crate::core::validation::validators::{positive_number, required_list, required_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Delivery progress of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Statuses an update request may set
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::OutForDelivery
        )
    }

    /// "pending, preparing, out-for-delivery, delivered"
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(OrderStatus::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Error returned when a string names no status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One entry of an order: a quantity plus whatever the client sent with it
/// (`dishId`, or a full copy of the dish)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub quantity: Number,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
}

/// Validated update payload
#[derive(Debug, Clone, PartialEq)]
pub struct OrderChanges {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

/// `dishes` must be a non-empty list whose every entry has a positive
/// quantity; the first bad entry is reported by index
fn order_lines(data: &Value) -> Result<Vec<OrderLine>, ValidationError> {
    let entries = required_list(data, Order::LABEL, "dishes", "dish")?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let quantity = positive_number(entry.get("quantity"))
                .cloned()
                .ok_or(ValidationError::InvalidQuantity { index })?;
            let mut details = entry.as_object().cloned().unwrap_or_default();
            details.remove("quantity");
            Ok(OrderLine { quantity, details })
        })
        .collect()
}

fn requested_status(data: &Value) -> Result<OrderStatus, ValidationError> {
    let invalid = || ValidationError::InvalidStatus {
        entity: Order::LABEL,
        allowed: OrderStatus::listing(),
    };

    let raw = data
        .get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(invalid)?;
    let status = raw
        .parse::<OrderStatus>()
        .ok()
        .filter(OrderStatus::is_assignable)
        .ok_or_else(invalid)?;

    // Unreachable while `is_assignable` excludes Delivered; see DESIGN.md.
    if status == OrderStatus::Delivered {
        return Err(ValidationError::DeliveredOrder);
    }

    Ok(status)
}

impl Resource for Order {
    type Draft = OrderDraft;
    type Changes = OrderChanges;

    const LABEL: &'static str = "Order";
    const PLURAL: &'static str = "orders";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate_create(data: &Value) -> Result<OrderDraft, ValidationError> {
        let deliver_to = required_text(data, Self::LABEL, "deliverTo")?;
        let mobile_number = required_text(data, Self::LABEL, "mobileNumber")?;
        let dishes = order_lines(data)?;

        Ok(OrderDraft {
            deliver_to: deliver_to.to_string(),
            mobile_number: mobile_number.to_string(),
            dishes,
        })
    }

    fn from_draft(id: String, draft: OrderDraft) -> Self {
        Self {
            id,
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            status: OrderStatus::Pending,
            dishes: draft.dishes,
        }
    }

    fn validate_update(data: &Value) -> Result<OrderChanges, ValidationError> {
        let deliver_to = required_text(data, Self::LABEL, "deliverTo")?;
        let mobile_number = required_text(data, Self::LABEL, "mobileNumber")?;
        let status = requested_status(data)?;
        let dishes = order_lines(data)?;

        Ok(OrderChanges {
            deliver_to: deliver_to.to_string(),
            mobile_number: mobile_number.to_string(),
            status,
            dishes,
        })
    }

    fn apply(&mut self, changes: OrderChanges) {
        self.deliver_to = changes.deliver_to;
        self.mobile_number = changes.mobile_number;
        self.status = changes.status;
        self.dishes = changes.dishes;
    }
}

impl Deletable for Order {
    fn ensure_deletable(&self) -> Result<(), ValidationError> {
        if self.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(ValidationError::NotPending)
        }
    }
}
