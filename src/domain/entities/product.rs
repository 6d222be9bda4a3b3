/// Canonical record describing a store catalog item or a completed
/// purchase/entitlement.
///
/// Platform-conditional fields (`receipt`, `receipt_ciphered_payload`,
/// `transaction_id`, `purchase_token`) follow the wire convention of the
/// store layer: absent means empty string. `transaction_id` and
/// `purchase_token` are only populated once a purchase completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub product_type: ProductType,
    pub title: String,
    pub description: String,
    /// Localized, display-ready price string (e.g. "$4.99").
    pub price: String,
    /// Numeric price in store currency units.
    pub price_value: f32,
    pub currency_code: String,
    /// Opaque receipt blob from the store (on Google Play, the purchase's
    /// original JSON).
    pub receipt: String,
    /// Opaque signed/ciphered receipt payload, where the platform provides
    /// one.
    pub receipt_ciphered_payload: String,
    pub transaction_id: String,
    /// Platform-specific token used for consume/acknowledge operations.
    pub purchase_token: String,
}

impl Default for Product {
    /// Placeholder record delivered with failure outcomes that have no
    /// decodable product context.
    fn default() -> Self {
        Self {
            id: String::new(),
            product_type: ProductType::NonConsumable,
            title: String::new(),
            description: String::new(),
            price: String::new(),
            price_value: 0.0,
            currency_code: String::new(),
            receipt: String::new(),
            receipt_ciphered_payload: String::new(),
            transaction_id: String::new(),
            purchase_token: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Consumable,
    NonConsumable,
}

impl ProductType {
    /// Maps the wire `type` tag to a product type.
    ///
    /// The store layer emits tags like "consumable" and "non_consumable";
    /// the match is a case-sensitive prefix check against "consumable", and
    /// every other value (including garbled or unknown tags) falls back to
    /// `NonConsumable`. This fallback is a carried-over wire convention, not
    /// a validation step.
    pub fn from_wire(tag: &str) -> Self {
        if tag.starts_with("consumable") {
            ProductType::Consumable
        } else {
            ProductType::NonConsumable
        }
    }
}
