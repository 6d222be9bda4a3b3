use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::product::ProductType;
use crate::domain::entities::store_config::{CatalogItem, StoreConfig};

/// Store configuration JSON handed to `PurchaseManager::init`.
///
/// Shape: `{"android": {"iap": {"key": ..., "items": {<name>: {"id", "type"}}}}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ConfigModel {
    pub(crate) android: AndroidConfigModel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AndroidConfigModel {
    pub(crate) iap: IapConfigModel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IapConfigModel {
    /// Store licensing/public key.
    pub(crate) key: String,
    pub(crate) items: BTreeMap<String, CatalogItemModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogItemModel {
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) item_type: String,
}

impl From<ConfigModel> for StoreConfig {
    fn from(m: ConfigModel) -> Self {
        StoreConfig {
            license_key: m.android.iap.key,
            items: m
                .android
                .iap
                .items
                .into_iter()
                .map(|(name, item)| CatalogItem {
                    name,
                    id: item.id,
                    product_type: ProductType::from_wire(&item.item_type),
                })
                .collect(),
        }
    }
}
