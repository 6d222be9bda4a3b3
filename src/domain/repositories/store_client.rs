use async_trait::async_trait;

use crate::domain::entities::store_config::StoreConfig;

/// Request half of the native store SDK, as consumed by the bridge.
///
/// Implemented by the platform glue (billing client wrapper, script-runtime
/// shim, test double). Every request is fire-and-forget: completion is
/// observed solely through the matching `EventBridge` notification, and a
/// lost notification is a silent terminal state the host must bound with its
/// own timeout policy if needed. There is no cancellation channel for
/// in-flight requests.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Begins store connection setup with the decoded configuration.
    /// Terminates in exactly one `notify_initialized` call.
    async fn start_connection(&self, config: StoreConfig);

    /// Whether the underlying store client finished initializing.
    fn is_ready(&self) -> bool;

    /// Queries the product catalog. Answered by
    /// `notify_product_request_success`/`failure`.
    async fn query_product_list(&self);

    /// Starts the billing flow for `product_id`. Answered by exactly one of
    /// `notify_purchase_success`/`failure`/`canceled`.
    async fn launch_purchase_flow(&self, product_id: &str);

    /// Consumes a purchased entitlement. Answered by
    /// `notify_consume_success`/`failure`.
    async fn consume(&self, product_id: &str, purchase_token: &str);

    /// Restores prior entitlements. May answer with multiple
    /// `notify_restored` calls, or `notify_restore_failure`.
    async fn restore(&self);

    /// Queries currently owned purchases. Answered by
    /// `notify_query_purchases_success`/`failure`.
    async fn query_purchases(&self);

    /// Requests an unconsumed-products advisory update
    /// (`notify_unconsumed_products`).
    async fn query_unconsumed_purchases(&self);

    /// Requests the combined purchase history
    /// (`notify_purchase_history`).
    async fn query_purchase_history(&self);

    /// Checks subscription-pass entitlement status for `pack_id`
    /// (`notify_play_pass_status`).
    async fn check_play_pass_status(&self, pack_id: &str);

    // Store promotion maintenance; platforms without the capability treat
    // these as no-ops.

    async fn fetch_promotion_order(&self);
    async fn update_promotion_order(&self, product_ids: &[String]);
    async fn fetch_promotion_visibility(&self, product_id: &str);
    async fn update_promotion_visibility(&self, product_id: &str, visible: bool);
}
