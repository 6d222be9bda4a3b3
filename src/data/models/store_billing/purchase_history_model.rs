use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::purchase_record::{PurchaseRecord, PurchaseState};

/// Wire representation of one purchase-history entry.
///
/// The history payload is the union of the store's active-purchases query
/// and its purchase-history query; entries from the history query carry no
/// `orderId` and no `purchaseState`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseHistoryRecordModel {
    pub(crate) product_id: String,
    /// Purchase time in milliseconds since the epoch.
    #[serde(with = "ts_milliseconds")]
    pub(crate) purchase_time: DateTime<Utc>,
    pub(crate) purchase_token: String,
    /// Opaque original store record for this purchase.
    pub(crate) original_json: String,
    pub(crate) signature: String,
    pub(crate) quantity: i32,
    pub(crate) order_id: Option<String>,
    pub(crate) purchase_state: Option<PurchaseStateModel>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub(crate) enum PurchaseStateModel {
    #[serde(rename = "PURCHASED")]
    Purchased,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "UNSPECIFIED_STATE")]
    UnspecifiedState,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl From<PurchaseHistoryRecordModel> for PurchaseRecord {
    fn from(m: PurchaseHistoryRecordModel) -> Self {
        PurchaseRecord {
            product_id: m.product_id,
            purchase_time: m.purchase_time,
            purchase_token: m.purchase_token,
            original_json: m.original_json,
            signature: m.signature,
            quantity: m.quantity,
            order_id: m.order_id,
            purchase_state: m.purchase_state.map(|s| match s {
                PurchaseStateModel::Purchased => PurchaseState::Purchased,
                PurchaseStateModel::Pending => PurchaseState::Pending,
                PurchaseStateModel::UnspecifiedState | PurchaseStateModel::Unknown => {
                    PurchaseState::Unspecified
                }
            }),
        }
    }
}
