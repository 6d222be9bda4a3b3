use super::product::ProductType;

/// Decoded store configuration, handed to the store client at connection
/// time. Loading the configuration file is the host's job; the bridge only
/// decodes the JSON it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Store licensing/public key from the configuration.
    pub license_key: String,
    pub items: Vec<CatalogItem>,
}

/// One catalog entry the application intends to sell.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// Application-facing name of the entry in the configuration.
    pub name: String,
    /// Store catalog identifier.
    pub id: String,
    pub product_type: ProductType,
}
