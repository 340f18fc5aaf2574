use std::borrow::Cow;

use async_trait::async_trait;

use super::error::CatalogError;
use super::model::CatalogDocument;

const BUNDLED_CATALOG: &str = include_str!("catalog.json");

/// Anything that can hand the loader a catalog document.
///
/// The loader awaits exactly one call per load. Implementations may resolve
/// immediately or suspend; there is no pagination or streaming.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument, CatalogError>;
}

/// Catalog decoded from a JSON string held in memory.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    json: Cow<'static, str>,
}

impl JsonCatalogSource {
    /// The catalog compiled into the site.
    pub fn bundled() -> Self {
        Self {
            json: Cow::Borrowed(BUNDLED_CATALOG),
        }
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            json: Cow::Owned(json.into()),
        }
    }

    pub fn from_value(value: serde_json::Value) -> Self {
        Self::from_json(value.to_string())
    }
}

impl Default for JsonCatalogSource {
    fn default() -> Self {
        Self::bundled()
    }
}

#[async_trait(?Send)]
impl CatalogSource for JsonCatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument, CatalogError> {
        // Decoded on every call; nothing is cached between loads.
        let document = serde_json::from_str::<CatalogDocument>(&self.json)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn bundled_catalog_decodes() {
        let config = block_on(JsonCatalogSource::bundled().fetch_catalog())
            .unwrap()
            .validate()
            .unwrap();

        assert_eq!(config.header.version, "20250711");
        assert_eq!(config.data.free_list.len(), 12);
        assert_eq!(config.data.recommended_list.len(), 7);
        assert_eq!(config.data.free_list[0].id, "12306mcp");

        let custom = config.data.recommended_list.last().unwrap();
        assert_eq!(custom.id, "custom");
        assert!(custom.endpoint.is_empty());
    }

    #[test]
    fn malformed_json_is_unexpected() {
        let result = block_on(JsonCatalogSource::from_json("{ not json").fetch_catalog());
        assert!(matches!(result, Err(CatalogError::Unexpected(_))));
    }

    #[test]
    fn wrong_list_type_is_unexpected() {
        let source = JsonCatalogSource::from_value(serde_json::json!({
            "data": { "freeList": "nope" }
        }));
        let result = block_on(source.fetch_catalog());
        assert!(matches!(result, Err(CatalogError::Unexpected(_))));
    }
}
