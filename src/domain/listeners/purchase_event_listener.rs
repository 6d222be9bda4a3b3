use crate::domain::entities::product::Product;

/// Capability interface an application implements to receive purchase
/// lifecycle events.
///
/// Every method is invoked on the bridge's serial callback context, so
/// implementations need no internal synchronization, but they must return
/// promptly: a blocked method stalls delivery of every later outcome.
///
/// Mutually exclusive outcome pairs (`*_success` / `*_failure`, plus
/// `on_purchase_canceled`) fire exactly once per issued request.
/// `on_restored` may fire multiple times, once per restored entitlement.
/// Error codes are the store's raw response codes; platforms that do not
/// supply one pass `0`.
pub trait PurchaseEventListener: Send + Sync {
    /// Exactly one call per init request, terminal.
    fn on_initialized(&self, success: bool);

    fn on_product_request_success(&self, products: Vec<Product>);
    fn on_product_request_failure(&self, message: &str);

    fn on_purchase_success(&self, product: Product);
    fn on_purchase_failure(&self, product: Product, message: &str, code: i32);
    fn on_purchase_canceled(&self, product: Product);

    fn on_consume_success(&self, product: Product);
    fn on_consume_failure(&self, product: Product, message: &str, code: i32);

    fn on_restored(&self, product: Product);
    /// The wire carries no product for a failed restore; the placeholder
    /// `Product::default()` is delivered to keep the signature unified.
    fn on_restore_failure(&self, product: Product, message: &str, code: i32);

    fn on_query_purchases_success(&self, products: Vec<Product>);
    fn on_query_purchases_failure(&self, code: i32, message: &str);

    /// Raw serialized purchase-history list. Decode with
    /// `PurchaseManager::parse_purchase_history` if structured records are
    /// wanted.
    fn on_purchase_history(&self, raw: &str) {
        let _ = raw;
    }

    // Advisory state-sync notifications, not tied to a specific request.
    // Platforms that lack the capability never call them.

    fn on_play_pass_status_update(&self, active: bool, token: &str) {
        let _ = (active, token);
    }

    fn on_unconsumed_products_update(&self, products: Vec<Product>) {
        let _ = products;
    }

    fn on_promotion_order_fetched(&self, product_ids: Vec<String>, error: &str) {
        let _ = (product_ids, error);
    }

    fn on_promotion_visibility_fetched(&self, product_id: &str, visible: bool, error: &str) {
        let _ = (product_id, visible, error);
    }

    fn on_promotion_order_updated(&self, error: &str) {
        let _ = error;
    }

    fn on_promotion_visibility_updated(&self, error: &str) {
        let _ = error;
    }

    /// Interception hook for purchases the store itself initiates. The
    /// default policy is to allow the purchase.
    fn on_should_add_store_payment(&self, product_id: &str) -> bool {
        let _ = product_id;
        true
    }
}
