use super::product::Product;

/// One decoded asynchronous store outcome, ready for listener delivery.
///
/// Envelopes are self-contained values: they carry no raw native handles, so
/// they can be posted across threads onto the serial callback context and
/// consumed there without touching the native layer again. Each envelope is
/// consumed by exactly one listener invocation and then discarded.
#[derive(Debug, Clone)]
pub enum PurchaseEvent {
    Initialized {
        success: bool,
    },
    ProductRequestSucceeded {
        products: Vec<Product>,
    },
    ProductRequestFailed {
        message: String,
    },
    PurchaseSucceeded {
        product: Product,
    },
    PurchaseFailed {
        product: Product,
        message: String,
        code: i32,
    },
    PurchaseCanceled {
        product: Product,
    },
    ConsumeSucceeded {
        product: Product,
    },
    ConsumeFailed {
        product: Product,
        message: String,
        code: i32,
    },
    /// May be delivered multiple times, once per restored entitlement.
    Restored {
        product: Product,
    },
    RestoreFailed {
        product: Product,
        message: String,
        code: i32,
    },
    QueryPurchasesSucceeded {
        products: Vec<Product>,
    },
    QueryPurchasesFailed {
        code: i32,
        message: String,
    },
    /// Raw serialized history list, passed through undecoded.
    PurchaseHistory {
        raw: String,
    },
    PlayPassStatus {
        active: bool,
        token: String,
    },
    UnconsumedProductsUpdate {
        products: Vec<Product>,
    },
    /// The store itself initiated a purchase (e.g. a promoted in-store buy).
    ShouldAddStorePayment {
        product_id: String,
    },
    PromotionOrderFetched {
        product_ids: Vec<String>,
        error: String,
    },
    PromotionVisibilityFetched {
        product_id: String,
        visible: bool,
        error: String,
    },
    PromotionOrderUpdated {
        error: String,
    },
    PromotionVisibilityUpdated {
        error: String,
    },
}
