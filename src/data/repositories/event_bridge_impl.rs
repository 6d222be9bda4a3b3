use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    data::datasources::store_payload_datasource::StorePayloadDatasource,
    domain::{
        entities::{product::Product, purchase_event::PurchaseEvent, response_code::ResponseCode},
        listeners::{
            listener_registry::ListenerRegistry, purchase_event_listener::PurchaseEventListener,
        },
        repositories::event_bridge::EventBridge,
    },
};

/// Diagnostic delivered when a success notification carried an undecodable
/// payload. Wording is part of the observable surface; hosts match on it.
const PARSE_FAILED: &str = "product request success, but parse json failed!!";

/// Sentinel response code for failures synthesized by the bridge itself
/// (decode remaps), where the store never supplied one.
const SYNTHESIZED_FAILURE_CODE: i32 = -1;

/// Bridges arbitrary-thread native notifications onto the serial callback
/// context.
///
/// Payloads are decoded on the calling (native) thread into self-contained
/// `PurchaseEvent` envelopes; the envelope is then posted to a single
/// consumer task which resolves the then-current listener and invokes
/// exactly one contract method. Posting never blocks the native thread, and
/// nothing is queued for later listeners: an envelope that finds no listener
/// registered is dropped.
pub(crate) struct EventBridgeImpl<D: StorePayloadDatasource> {
    payloads: D,
    queue: mpsc::UnboundedSender<PurchaseEvent>,
}

impl<D: StorePayloadDatasource> EventBridgeImpl<D> {
    /// Spawns the dispatch task and returns the bridge feeding it. Must be
    /// called from within a tokio runtime. The task runs until every handle
    /// to the bridge is dropped.
    pub(crate) fn spawn(payloads: D, listeners: Arc<ListenerRegistry>) -> Self {
        let (queue, mut events) = mpsc::unbounded_channel::<PurchaseEvent>();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match listeners.current() {
                    Some(listener) => deliver(listener.as_ref(), event),
                    None => debug!("no listener registered; outcome dropped"),
                }
            }
            debug!("dispatch context shut down");
        });
        Self { payloads, queue }
    }

    fn post(&self, event: PurchaseEvent) {
        // After shutdown the consumer is gone; late native notifications are
        // dropped by contract.
        if self.queue.send(event).is_err() {
            debug!("dispatch context closed; notification dropped");
        }
    }

    /// Decode for notifications that already represent a failure or
    /// cancellation: there is no failure outcome left to remap to, so a bad
    /// product payload degrades to the placeholder record.
    fn product_or_placeholder(&self, raw: &str, kind: &'static str) -> Product {
        match self.payloads.decode_product(raw) {
            Ok(product) => product,
            Err(err) => {
                warn!(%err, kind, "product payload undecodable; delivering placeholder");
                Product::default()
            }
        }
    }
}

impl<D: StorePayloadDatasource> EventBridge for EventBridgeImpl<D> {
    fn notify_initialized(&self, success: bool) {
        self.post(PurchaseEvent::Initialized { success });
    }

    fn notify_product_request_success(&self, product_list_json: &str) {
        match self.payloads.decode_product_list(product_list_json) {
            Ok(products) => self.post(PurchaseEvent::ProductRequestSucceeded { products }),
            Err(err) => {
                warn!(%err, "product list undecodable; remapping to failure");
                self.post(PurchaseEvent::ProductRequestFailed {
                    message: PARSE_FAILED.to_string(),
                });
            }
        }
    }

    fn notify_product_request_failure(&self, message: &str) {
        self.post(PurchaseEvent::ProductRequestFailed {
            message: message.to_string(),
        });
    }

    fn notify_purchase_success(&self, product_json: &str) {
        match self.payloads.decode_product(product_json) {
            Ok(product) => self.post(PurchaseEvent::PurchaseSucceeded { product }),
            Err(err) => {
                warn!(%err, "purchase payload undecodable; remapping to failure");
                self.post(PurchaseEvent::PurchaseFailed {
                    product: Product::default(),
                    message: PARSE_FAILED.to_string(),
                    code: SYNTHESIZED_FAILURE_CODE,
                });
            }
        }
    }

    fn notify_purchase_failure(&self, product_json: &str, code: i32, message: &str) {
        debug!(code, name = %ResponseCode::from(code), "purchase failure notification");
        self.post(PurchaseEvent::PurchaseFailed {
            product: self.product_or_placeholder(product_json, "purchase failure"),
            message: message.to_string(),
            code,
        });
    }

    fn notify_purchase_canceled(&self, product_json: &str) {
        self.post(PurchaseEvent::PurchaseCanceled {
            product: self.product_or_placeholder(product_json, "purchase canceled"),
        });
    }

    fn notify_consume_success(&self, product_json: &str) {
        match self.payloads.decode_product(product_json) {
            Ok(product) => self.post(PurchaseEvent::ConsumeSucceeded { product }),
            Err(err) => {
                warn!(%err, "consume payload undecodable; remapping to failure");
                self.post(PurchaseEvent::ConsumeFailed {
                    product: Product::default(),
                    message: PARSE_FAILED.to_string(),
                    code: SYNTHESIZED_FAILURE_CODE,
                });
            }
        }
    }

    fn notify_consume_failure(&self, product_json: &str, code: i32, message: &str) {
        debug!(code, name = %ResponseCode::from(code), "consume failure notification");
        self.post(PurchaseEvent::ConsumeFailed {
            product: self.product_or_placeholder(product_json, "consume failure"),
            message: message.to_string(),
            code,
        });
    }

    fn notify_restored(&self, product_json: &str) {
        match self.payloads.decode_product(product_json) {
            Ok(product) => self.post(PurchaseEvent::Restored { product }),
            Err(err) => {
                warn!(%err, "restored payload undecodable; remapping to failure");
                self.post(PurchaseEvent::RestoreFailed {
                    product: Product::default(),
                    message: PARSE_FAILED.to_string(),
                    code: SYNTHESIZED_FAILURE_CODE,
                });
            }
        }
    }

    fn notify_restore_failure(&self, code: i32, message: &str) {
        // The wire carries no product for this outcome; the placeholder
        // keeps the unified listener signature.
        debug!(code, name = %ResponseCode::from(code), "restore failure notification");
        self.post(PurchaseEvent::RestoreFailed {
            product: Product::default(),
            message: message.to_string(),
            code,
        });
    }

    fn notify_query_purchases_success(&self, product_list_json: &str) {
        match self.payloads.decode_product_list(product_list_json) {
            Ok(products) => self.post(PurchaseEvent::QueryPurchasesSucceeded { products }),
            Err(err) => {
                warn!(%err, "purchases payload undecodable; remapping to failure");
                self.post(PurchaseEvent::QueryPurchasesFailed {
                    code: SYNTHESIZED_FAILURE_CODE,
                    message: PARSE_FAILED.to_string(),
                });
            }
        }
    }

    fn notify_query_purchases_failure(&self, code: i32, message: &str) {
        debug!(code, name = %ResponseCode::from(code), "query purchases failure notification");
        self.post(PurchaseEvent::QueryPurchasesFailed {
            code,
            message: message.to_string(),
        });
    }

    fn notify_purchase_history(&self, history_json: &str) {
        // Passed through raw; hosts decode on demand.
        self.post(PurchaseEvent::PurchaseHistory {
            raw: history_json.to_string(),
        });
    }

    fn notify_play_pass_status(&self, active: bool, token: &str) {
        self.post(PurchaseEvent::PlayPassStatus {
            active,
            token: token.to_string(),
        });
    }

    fn notify_unconsumed_products(&self, product_list_json: &str) {
        match self.payloads.decode_product_list(product_list_json) {
            Ok(products) => self.post(PurchaseEvent::UnconsumedProductsUpdate { products }),
            // Advisory notification with no failure pair: drop it.
            Err(err) => warn!(%err, "unconsumed-products payload undecodable; dropped"),
        }
    }

    fn notify_promotion_order_fetched(&self, product_ids: &[String], error: &str) {
        self.post(PurchaseEvent::PromotionOrderFetched {
            product_ids: product_ids.to_vec(),
            error: error.to_string(),
        });
    }

    fn notify_promotion_visibility_fetched(&self, product_id: &str, visible: bool, error: &str) {
        self.post(PurchaseEvent::PromotionVisibilityFetched {
            product_id: product_id.to_string(),
            visible,
            error: error.to_string(),
        });
    }

    fn notify_promotion_order_updated(&self, error: &str) {
        self.post(PurchaseEvent::PromotionOrderUpdated {
            error: error.to_string(),
        });
    }

    fn notify_promotion_visibility_updated(&self, error: &str) {
        self.post(PurchaseEvent::PromotionVisibilityUpdated {
            error: error.to_string(),
        });
    }

    fn notify_should_add_store_payment(&self, product_id: &str) -> bool {
        self.post(PurchaseEvent::ShouldAddStorePayment {
            product_id: product_id.to_string(),
        });
        // The native caller cannot wait for the callback context, so the
        // static default policy answers: allow the purchase.
        true
    }
}

/// Invokes exactly one listener method for the envelope. Runs on the serial
/// dispatch task.
fn deliver(listener: &dyn PurchaseEventListener, event: PurchaseEvent) {
    match event {
        PurchaseEvent::Initialized { success } => listener.on_initialized(success),
        PurchaseEvent::ProductRequestSucceeded { products } => {
            listener.on_product_request_success(products)
        }
        PurchaseEvent::ProductRequestFailed { message } => {
            listener.on_product_request_failure(&message)
        }
        PurchaseEvent::PurchaseSucceeded { product } => listener.on_purchase_success(product),
        PurchaseEvent::PurchaseFailed {
            product,
            message,
            code,
        } => listener.on_purchase_failure(product, &message, code),
        PurchaseEvent::PurchaseCanceled { product } => listener.on_purchase_canceled(product),
        PurchaseEvent::ConsumeSucceeded { product } => listener.on_consume_success(product),
        PurchaseEvent::ConsumeFailed {
            product,
            message,
            code,
        } => listener.on_consume_failure(product, &message, code),
        PurchaseEvent::Restored { product } => listener.on_restored(product),
        PurchaseEvent::RestoreFailed {
            product,
            message,
            code,
        } => listener.on_restore_failure(product, &message, code),
        PurchaseEvent::QueryPurchasesSucceeded { products } => {
            listener.on_query_purchases_success(products)
        }
        PurchaseEvent::QueryPurchasesFailed { code, message } => {
            listener.on_query_purchases_failure(code, &message)
        }
        PurchaseEvent::PurchaseHistory { raw } => listener.on_purchase_history(&raw),
        PurchaseEvent::PlayPassStatus { active, token } => {
            listener.on_play_pass_status_update(active, &token)
        }
        PurchaseEvent::UnconsumedProductsUpdate { products } => {
            listener.on_unconsumed_products_update(products)
        }
        PurchaseEvent::ShouldAddStorePayment { product_id } => {
            // Observation only; the policy answer already went back to the
            // native caller.
            let _ = listener.on_should_add_store_payment(&product_id);
        }
        PurchaseEvent::PromotionOrderFetched { product_ids, error } => {
            listener.on_promotion_order_fetched(product_ids, &error)
        }
        PurchaseEvent::PromotionVisibilityFetched {
            product_id,
            visible,
            error,
        } => listener.on_promotion_visibility_fetched(&product_id, visible, &error),
        PurchaseEvent::PromotionOrderUpdated { error } => {
            listener.on_promotion_order_updated(&error)
        }
        PurchaseEvent::PromotionVisibilityUpdated { error } => {
            listener.on_promotion_visibility_updated(&error)
        }
    }
}
