use serde::Deserialize;

use crate::domain::entities::product::{Product, ProductType};

/// Wire representation of a product/purchase record as emitted by the native
/// store layer.
///
/// Field names follow the store layer's JSON encoding. `id` through
/// `currencyCode` are always present in a well-formed record; the
/// receipt/transaction fields are only populated once a purchase completes,
/// and some platforms never populate the token-style fields, so they default
/// to empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductModel {
    pub(crate) id: String,
    /// Textual type tag ("consumable", "non_consumable", ...). Decoded via
    /// `ProductType::from_wire`.
    #[serde(rename = "type")]
    pub(crate) product_type: String,
    pub(crate) title: String,
    pub(crate) description: String,
    /// Localized, display-ready price string.
    pub(crate) price: String,
    /// Numeric price in store currency units.
    pub(crate) price_value: f32,
    pub(crate) currency_code: String,
    #[serde(default)]
    pub(crate) receipt: String,
    #[serde(default)]
    pub(crate) receipt_ciphered_payload: String,
    #[serde(rename = "transactionID", default)]
    pub(crate) transaction_id: String,
    #[serde(default)]
    pub(crate) purchase_token: String,
}

impl From<ProductModel> for Product {
    fn from(m: ProductModel) -> Self {
        Product {
            id: m.id,
            product_type: ProductType::from_wire(&m.product_type),
            title: m.title,
            description: m.description,
            price: m.price,
            price_value: m.price_value,
            currency_code: m.currency_code,
            receipt: m.receipt,
            receipt_ciphered_payload: m.receipt_ciphered_payload,
            transaction_id: m.transaction_id,
            purchase_token: m.purchase_token,
        }
    }
}
