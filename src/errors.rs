use thiserror::Error;

/// Errors raised while decoding wire payloads handed over by the native
/// store layer.
///
/// These never cross the listener boundary as errors: the dispatch layer
/// remaps them to the matching failure callback (see
/// `data::repositories::event_bridge_impl`).
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A record was missing a required field, or the outer shape of the
    /// payload was not what the notification kind requires. The serde error
    /// names the offending key.
    #[error("malformed {context} payload: {source}")]
    MalformedPayload {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The store configuration JSON handed to `PurchaseManager::init` could
    /// not be decoded.
    #[error("invalid store configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
