use chrono::{DateTime, Utc};

/// One decoded entry of the purchase-history payload.
///
/// The history list is the union of the store's active-purchases query and
/// its purchase-history query. Records from the latter carry no order id and
/// no purchase state, hence the `Option` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub product_id: String,
    pub purchase_time: DateTime<Utc>,
    pub purchase_token: String,
    /// Opaque original store record for this purchase.
    pub original_json: String,
    pub signature: String,
    pub quantity: i32,
    pub order_id: Option<String>,
    pub purchase_state: Option<PurchaseState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseState {
    Purchased,
    Pending,
    Unspecified,
}
