use serde::{Deserialize, Deserializer, Serialize};

use super::error::CatalogError;

/// One entry in the service catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Opaque URI. Empty for the "custom" placeholder entry.
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogHeader {
    #[serde(default, alias = "vs")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFlags {
    /// Parsed and carried, never consulted when rendering.
    #[serde(default, deserialize_with = "flag")]
    pub show_free: bool,
}

/// Older catalogs store flags as `0`/`1` rather than booleans.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// The catalog as it arrives from a source, before shape validation.
///
/// Every section is optional here so that a document with a missing `data`
/// block still decodes and can be rejected as a shape error instead of a
/// decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub header: Option<CatalogHeader>,
    #[serde(default)]
    pub data: Option<CatalogDocumentData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocumentData {
    #[serde(default)]
    pub active: Option<ActiveFlags>,
    #[serde(default, alias = "freeMCP")]
    pub free_list: Option<Vec<Service>>,
    #[serde(default, alias = "recMCP")]
    pub recommended_list: Option<Vec<Service>>,
}

impl CatalogDocument {
    /// Checks the document shape and produces the immutable config.
    ///
    /// Absent lists become empty lists; an absent `data` section is the only
    /// shape error.
    pub fn validate(self) -> Result<CatalogConfig, CatalogError> {
        let data = self.data.ok_or(CatalogError::Shape)?;
        Ok(CatalogConfig {
            header: self.header.unwrap_or_default(),
            data: CatalogData {
                active: data.active.unwrap_or_default(),
                free_list: data.free_list.unwrap_or_default(),
                recommended_list: data.recommended_list.unwrap_or_default(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub header: CatalogHeader,
    pub data: CatalogData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogData {
    pub active: ActiveFlags,
    pub free_list: Vec<Service>,
    pub recommended_list: Vec<Service>,
}

impl CatalogData {
    pub fn list(&self, kind: ListKind) -> &[Service] {
        match kind {
            ListKind::Free => &self.free_list,
            ListKind::Recommended => &self.recommended_list,
        }
    }
}

/// Which of the two catalog lists a card or target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Free,
    Recommended,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Free, ListKind::Recommended];

    pub fn target_id(self) -> &'static str {
        match self {
            ListKind::Free => "free-mcp-grid",
            ListKind::Recommended => "recommended-mcp-grid",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ListKind::Free => "free-service-badge",
            ListKind::Recommended => "recommended-service-badge",
        }
    }

    pub fn placeholder_text(self) -> &'static str {
        match self {
            ListKind::Free => "暂无免费服务",
            ListKind::Recommended => "暂无推荐服务",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListKind::Free => "free",
            ListKind::Recommended => "recommended",
        }
    }
}
