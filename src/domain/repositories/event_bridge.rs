/// Notification entry points the native store layer calls into, one per
/// outcome kind.
///
/// Entry points may be called from any thread; they decode the payload,
/// post a self-contained envelope onto the serial callback context and
/// return without waiting for listener execution. Payload-carrying entry
/// points receive the wire JSON encoding of the product record (or record
/// array); the rest carry scalars.
///
/// A decode failure on a success notification is remapped to the matching
/// failure callback with a diagnostic message — a malformed payload must
/// never take down the pipeline. If no listener is registered when the
/// envelope is delivered, it is dropped silently.
pub trait EventBridge: Send + Sync {
    fn notify_initialized(&self, success: bool);

    fn notify_product_request_success(&self, product_list_json: &str);
    fn notify_product_request_failure(&self, message: &str);

    fn notify_purchase_success(&self, product_json: &str);
    fn notify_purchase_failure(&self, product_json: &str, code: i32, message: &str);
    fn notify_purchase_canceled(&self, product_json: &str);

    fn notify_consume_success(&self, product_json: &str);
    fn notify_consume_failure(&self, product_json: &str, code: i32, message: &str);

    fn notify_restored(&self, product_json: &str);
    fn notify_restore_failure(&self, code: i32, message: &str);

    fn notify_query_purchases_success(&self, product_list_json: &str);
    fn notify_query_purchases_failure(&self, code: i32, message: &str);

    fn notify_purchase_history(&self, history_json: &str);

    fn notify_play_pass_status(&self, active: bool, token: &str);
    fn notify_unconsumed_products(&self, product_list_json: &str);

    fn notify_promotion_order_fetched(&self, product_ids: &[String], error: &str);
    fn notify_promotion_visibility_fetched(&self, product_id: &str, visible: bool, error: &str);
    fn notify_promotion_order_updated(&self, error: &str);
    fn notify_promotion_visibility_updated(&self, error: &str);

    /// Synchronous interception hook for store-initiated purchases. The
    /// envelope is still delivered to the listener for observation; the
    /// returned policy is the static default (allow), since the caller is
    /// on a foreign thread and cannot wait for the callback context.
    fn notify_should_add_store_payment(&self, product_id: &str) -> bool;
}
