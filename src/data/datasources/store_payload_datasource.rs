use crate::{
    data::models::store_billing::{
        config_model::ConfigModel, product_model::ProductModel,
        purchase_history_model::PurchaseHistoryRecordModel,
    },
    domain::entities::{product::Product, purchase_record::PurchaseRecord, store_config::StoreConfig},
    errors::BridgeError,
};

/// Decodes wire JSON handed over by the native store layer into domain
/// entities.
///
/// Decoding is a pure function over its input: no shared state, safe to call
/// concurrently from any number of notification threads. Each call is a
/// single pass over the input structure.
pub(crate) trait StorePayloadDatasource: Send + Sync {
    /// Decodes a single product record. A missing required field fails the
    /// decode with `BridgeError::MalformedPayload` naming the key.
    fn decode_product(&self, raw: &str) -> Result<Product, BridgeError>;

    /// Decodes an array of product records, preserving source order. If the
    /// outer shape is not an array the whole decode fails; callers must
    /// treat that as a transport-level failure rather than attempt
    /// element-wise recovery.
    fn decode_product_list(&self, raw: &str) -> Result<Vec<Product>, BridgeError>;

    /// Decodes the combined purchase-history list.
    fn decode_purchase_history(&self, raw: &str) -> Result<Vec<PurchaseRecord>, BridgeError>;

    /// Decodes the store configuration JSON.
    fn decode_store_config(&self, raw: &str) -> Result<StoreConfig, BridgeError>;
}

pub(crate) struct StorePayloadDatasourceImpl;

impl StorePayloadDatasource for StorePayloadDatasourceImpl {
    fn decode_product(&self, raw: &str) -> Result<Product, BridgeError> {
        let model: ProductModel =
            serde_json::from_str(raw).map_err(|e| BridgeError::MalformedPayload {
                context: "product record",
                source: e,
            })?;
        Ok(model.into())
    }

    fn decode_product_list(&self, raw: &str) -> Result<Vec<Product>, BridgeError> {
        let models: Vec<ProductModel> =
            serde_json::from_str(raw).map_err(|e| BridgeError::MalformedPayload {
                context: "product list",
                source: e,
            })?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    fn decode_purchase_history(&self, raw: &str) -> Result<Vec<PurchaseRecord>, BridgeError> {
        let models: Vec<PurchaseHistoryRecordModel> =
            serde_json::from_str(raw).map_err(|e| BridgeError::MalformedPayload {
                context: "purchase history",
                source: e,
            })?;
        Ok(models.into_iter().map(PurchaseRecord::from).collect())
    }

    fn decode_store_config(&self, raw: &str) -> Result<StoreConfig, BridgeError> {
        let model: ConfigModel =
            serde_json::from_str(raw).map_err(BridgeError::InvalidConfig)?;
        Ok(model.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::product::ProductType;
    use crate::domain::entities::purchase_record::PurchaseState;

    fn product_json(id: &str, product_type: &str) -> String {
        format!(
            concat!(
                r#"{{"id":"{}","type":"{}","title":"Gem Pack","description":"A pack of gems","#,
                r#""price":"$4.99","priceValue":4.99,"currencyCode":"USD","#,
                r#""receipt":"rcpt","receiptCipheredPayload":"sig","transactionID":"GPA.123","#,
                r#""purchaseToken":"tok"}}"#
            ),
            id, product_type
        )
    }

    #[test]
    fn well_formed_record_round_trips_every_field() {
        let product = StorePayloadDatasourceImpl
            .decode_product(&product_json("gem_pack_100", "consumable"))
            .unwrap();

        assert_eq!(product.id, "gem_pack_100");
        assert_eq!(product.product_type, ProductType::Consumable);
        assert_eq!(product.title, "Gem Pack");
        assert_eq!(product.description, "A pack of gems");
        assert_eq!(product.price, "$4.99");
        assert_eq!(product.price_value, 4.99);
        assert_eq!(product.currency_code, "USD");
        assert_eq!(product.receipt, "rcpt");
        assert_eq!(product.receipt_ciphered_payload, "sig");
        assert_eq!(product.transaction_id, "GPA.123");
        assert_eq!(product.purchase_token, "tok");
    }

    #[test]
    fn purchase_fields_default_to_empty_when_absent() {
        let raw = r#"{"id":"no_ads","type":"non_consumable","title":"No Ads",
            "description":"Removes ads","price":"$1.99","priceValue":1.99,
            "currencyCode":"USD"}"#;
        let product = StorePayloadDatasourceImpl.decode_product(raw).unwrap();

        assert_eq!(product.product_type, ProductType::NonConsumable);
        assert_eq!(product.receipt, "");
        assert_eq!(product.transaction_id, "");
        assert_eq!(product.purchase_token, "");
    }

    #[test]
    fn unrecognized_type_tag_decodes_as_non_consumable() {
        let product = StorePayloadDatasourceImpl
            .decode_product(&product_json("x", "t_y_p_e"))
            .unwrap();
        assert_eq!(product.product_type, ProductType::NonConsumable);
    }

    #[test]
    fn missing_required_field_fails_naming_the_key() {
        let raw = r#"{"id":"x","type":"consumable","title":"t","description":"d",
            "price":"$1","currencyCode":"USD"}"#;
        let err = StorePayloadDatasourceImpl.decode_product(raw).unwrap_err();

        assert!(matches!(err, BridgeError::MalformedPayload { .. }));
        assert!(err.to_string().contains("priceValue"), "got: {err}");
    }

    #[test]
    fn empty_array_decodes_to_empty_sequence() {
        let products = StorePayloadDatasourceImpl.decode_product_list("[]").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn list_preserves_source_order() {
        let raw = format!(
            "[{},{},{}]",
            product_json("first", "consumable"),
            product_json("second", "non_consumable"),
            product_json("third", "consumable"),
        );
        let products = StorePayloadDatasourceImpl.decode_product_list(&raw).unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn non_array_list_payload_is_malformed() {
        let err = StorePayloadDatasourceImpl
            .decode_product_list(&product_json("x", "consumable"))
            .unwrap_err();
        assert!(matches!(err, BridgeError::MalformedPayload { .. }));
    }

    #[test]
    fn one_malformed_element_fails_the_whole_list() {
        let raw = format!(r#"[{},{{"id":"broken"}}]"#, product_json("ok", "consumable"));
        let err = StorePayloadDatasourceImpl.decode_product_list(&raw).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedPayload { .. }));
    }

    #[test]
    fn history_decodes_full_and_partial_records() {
        let raw = r#"[
            {"productId":"gem_pack_100","orderId":"GPA.123","purchaseTime":1700000000000,
             "purchaseToken":"tok1","originalJson":"{}","signature":"sig1","quantity":1,
             "purchaseState":"PURCHASED"},
            {"productId":"no_ads","purchaseTime":1600000000000,"purchaseToken":"tok2",
             "originalJson":"{}","signature":"sig2","quantity":2}
        ]"#;
        let records = StorePayloadDatasourceImpl.decode_purchase_history(raw).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product_id, "gem_pack_100");
        assert_eq!(records[0].order_id.as_deref(), Some("GPA.123"));
        assert_eq!(records[0].purchase_state, Some(PurchaseState::Purchased));
        assert_eq!(records[0].purchase_time.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(records[1].order_id, None);
        assert_eq!(records[1].purchase_state, None);
        assert_eq!(records[1].quantity, 2);
    }

    #[test]
    fn store_config_decodes_key_and_catalog() {
        let raw = r#"{"android":{"iap":{"key":"license-key","items":{
            "gems":{"id":"gem_pack_100","type":"consumable"},
            "no_ads":{"id":"no_ads","type":"non_consumable"}
        }}}}"#;
        let config = StorePayloadDatasourceImpl.decode_store_config(raw).unwrap();

        assert_eq!(config.license_key, "license-key");
        assert_eq!(config.items.len(), 2);
        let gems = config.items.iter().find(|i| i.name == "gems").unwrap();
        assert_eq!(gems.id, "gem_pack_100");
        assert_eq!(gems.product_type, ProductType::Consumable);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = StorePayloadDatasourceImpl
            .decode_store_config(r#"{"android":{}}"#)
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidConfig(_)));
    }
}
