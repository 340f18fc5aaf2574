use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The document has no `data` section.
    #[error("配置数据格式错误")]
    Shape,

    /// The source could not produce a document at all.
    #[error("获取配置失败: {0}")]
    Fetch(String),

    #[error("{0}")]
    Unexpected(String),
}

impl CatalogError {
    /// Text shown inside the error panel.
    pub fn panel_message(&self) -> String {
        match self {
            CatalogError::Shape => self.to_string(),
            other => format!("加载MCP服务失败: {}", other),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Unexpected(format!("catalog decode error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_messages() {
        assert_eq!(CatalogError::Shape.panel_message(), "配置数据格式错误");
        assert_eq!(
            CatalogError::Unexpected("boom".into()).panel_message(),
            "加载MCP服务失败: boom"
        );
        assert_eq!(
            CatalogError::Fetch("offline".into()).panel_message(),
            "加载MCP服务失败: 获取配置失败: offline"
        );
    }
}
