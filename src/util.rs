use std::sync::Arc;

use tracing::warn;

use crate::{
    data::{
        datasources::store_payload_datasource::{
            StorePayloadDatasource, StorePayloadDatasourceImpl,
        },
        repositories::event_bridge_impl::EventBridgeImpl,
    },
    domain::{
        entities::purchase_record::PurchaseRecord,
        listeners::{
            listener_registry::ListenerRegistry, purchase_event_listener::PurchaseEventListener,
        },
        repositories::{event_bridge::EventBridge, store_client::StoreClient},
    },
    errors::BridgeError,
};

/// Request-issuing facade over the native store SDK.
///
/// Every request is fire-and-forget; completion is observed only through the
/// registered [`PurchaseEventListener`]. Construction spawns the serial
/// dispatch context, so a `PurchaseManager` must be created from within a
/// tokio runtime.
pub struct PurchaseManager<C: StoreClient> {
    store_client: C,
    listeners: Arc<ListenerRegistry>,
    bridge: Arc<EventBridgeImpl<StorePayloadDatasourceImpl>>,
    payloads: StorePayloadDatasourceImpl,
}

impl<C: StoreClient> PurchaseManager<C> {
    pub fn new(store_client: C) -> Self {
        let listeners = Arc::new(ListenerRegistry::new());
        let bridge = Arc::new(EventBridgeImpl::spawn(
            StorePayloadDatasourceImpl,
            listeners.clone(),
        ));
        Self {
            store_client,
            listeners,
            bridge,
            payloads: StorePayloadDatasourceImpl,
        }
    }

    /// Handle the platform glue calls notification entry points on. Safe to
    /// invoke from any thread.
    pub fn bridge(&self) -> Arc<dyn EventBridge> {
        self.bridge.clone()
    }

    /// Decodes the store configuration and begins connection setup. Reading
    /// the configuration file is the host's job; this takes the JSON string.
    ///
    /// A malformed configuration does not error out: it terminates the init
    /// request through the listener with `on_initialized(false)`, like any
    /// other failed request.
    pub async fn init(&self, config_json: &str) {
        match self.payloads.decode_store_config(config_json) {
            Ok(config) => self.store_client.start_connection(config).await,
            Err(err) => {
                warn!(%err, "store configuration rejected");
                self.bridge.notify_initialized(false);
            }
        }
    }

    /// Enables subscription-pass tracking for `pack_id` and requests an
    /// immediate status check.
    pub async fn init_play_pass(&self, pack_id: &str) {
        self.store_client.check_play_pass_status(pack_id).await;
    }

    /// Whether the underlying store client finished initializing.
    pub fn is_enabled(&self) -> bool {
        self.store_client.is_ready()
    }

    /// Queries the product catalog.
    pub async fn refresh(&self) {
        self.store_client.query_product_list().await;
    }

    pub async fn purchase(&self, product_id: &str) {
        self.store_client.launch_purchase_flow(product_id).await;
    }

    pub async fn consume(&self, product_id: &str, purchase_token: &str) {
        self.store_client.consume(product_id, purchase_token).await;
    }

    pub async fn restore(&self) {
        self.store_client.restore().await;
    }

    pub async fn query_purchases(&self) {
        self.store_client.query_purchases().await;
    }

    pub async fn query_unconsumed_purchases(&self) {
        self.store_client.query_unconsumed_purchases().await;
    }

    pub async fn get_purchase_history(&self) {
        self.store_client.query_purchase_history().await;
    }

    pub async fn fetch_promotion_order(&self) {
        self.store_client.fetch_promotion_order().await;
    }

    pub async fn update_promotion_order(&self, product_ids: &[String]) {
        self.store_client.update_promotion_order(product_ids).await;
    }

    pub async fn fetch_promotion_visibility(&self, product_id: &str) {
        self.store_client.fetch_promotion_visibility(product_id).await;
    }

    pub async fn update_promotion_visibility(&self, product_id: &str, visible: bool) {
        self.store_client
            .update_promotion_visibility(product_id, visible)
            .await;
    }

    /// Installs `listener`, replacing (and releasing) any previous one.
    /// Passing no listener is expressed with [`Self::remove_listener`].
    pub fn set_listener(&self, listener: Arc<dyn PurchaseEventListener>) {
        self.listeners.set(listener);
    }

    pub fn remove_listener(&self) {
        self.listeners.clear();
    }

    /// Decodes a raw purchase-history payload (as handed to
    /// `on_purchase_history`) into structured records.
    pub fn parse_purchase_history(&self, raw: &str) -> Result<Vec<PurchaseRecord>, BridgeError> {
        self.payloads.decode_purchase_history(raw)
    }
}
