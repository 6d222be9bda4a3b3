use std::sync::{Arc, Mutex};

use tracing::debug;

use super::purchase_event_listener::PurchaseEventListener;

/// Single-slot holder of the currently active listener.
///
/// At most one listener is addressable at a time; this is a deliberate
/// simplification of the domain, not a pub/sub fan-out. Replacing the
/// listener while a dispatch is in flight may deliver that outcome to either
/// the old or the new listener depending on timing — accepted, since every
/// outcome carries enough context to be processed idempotently by any
/// listener instance.
#[derive(Default)]
pub struct ListenerRegistry {
    slot: Mutex<Option<Arc<dyn PurchaseEventListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `listener`, returning the displaced one if the slot was
    /// occupied. The previous listener is released by dropping the returned
    /// `Arc` (or the caller may keep it alive).
    pub fn set(&self, listener: Arc<dyn PurchaseEventListener>) -> Option<Arc<dyn PurchaseEventListener>> {
        let mut slot = self.slot.lock().expect("listener slot poisoned");
        let previous = slot.replace(listener);
        if previous.is_some() {
            debug!("active purchase listener replaced");
        }
        previous
    }

    /// Clears the slot, returning the listener that was active.
    pub fn clear(&self) -> Option<Arc<dyn PurchaseEventListener>> {
        self.slot.lock().expect("listener slot poisoned").take()
    }

    /// The listener dispatch should currently deliver to, if any.
    pub fn current(&self) -> Option<Arc<dyn PurchaseEventListener>> {
        self.slot.lock().expect("listener slot poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::product::Product;

    struct NoopListener;

    impl PurchaseEventListener for NoopListener {
        fn on_initialized(&self, _success: bool) {}
        fn on_product_request_success(&self, _products: Vec<Product>) {}
        fn on_product_request_failure(&self, _message: &str) {}
        fn on_purchase_success(&self, _product: Product) {}
        fn on_purchase_failure(&self, _product: Product, _message: &str, _code: i32) {}
        fn on_purchase_canceled(&self, _product: Product) {}
        fn on_consume_success(&self, _product: Product) {}
        fn on_consume_failure(&self, _product: Product, _message: &str, _code: i32) {}
        fn on_restored(&self, _product: Product) {}
        fn on_restore_failure(&self, _product: Product, _message: &str, _code: i32) {}
        fn on_query_purchases_success(&self, _products: Vec<Product>) {}
        fn on_query_purchases_failure(&self, _code: i32, _message: &str) {}
    }

    #[test]
    fn starts_empty() {
        let registry = ListenerRegistry::new();
        assert!(registry.current().is_none());
    }

    #[test]
    fn set_then_set_leaves_exactly_one_current() {
        let registry = ListenerRegistry::new();
        let a: Arc<dyn PurchaseEventListener> = Arc::new(NoopListener);
        let b: Arc<dyn PurchaseEventListener> = Arc::new(NoopListener);

        assert!(registry.set(a.clone()).is_none());
        let displaced = registry.set(b.clone()).expect("a should be displaced");
        assert!(Arc::ptr_eq(&displaced, &a));

        let current = registry.current().expect("b should be current");
        assert!(Arc::ptr_eq(&current, &b));
    }

    #[test]
    fn clear_empties_the_slot() {
        let registry = ListenerRegistry::new();
        let a: Arc<dyn PurchaseEventListener> = Arc::new(NoopListener);
        registry.set(a.clone());

        let removed = registry.clear().expect("a should be returned");
        assert!(Arc::ptr_eq(&removed, &a));
        assert!(registry.current().is_none());
        assert!(registry.clear().is_none());
    }
}
