use crate::shared::SyncError;
use serde::{Deserialize, Deserializer, Serialize};

/// Multipart field carrying the document
pub const DOCUMENT_FIELD: &str = "document";

/// Result of a document analysis: the page count, or why there is none.
pub type UploadOutcome = Result<u32, SyncError>;

/// Body returned by the page-count endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    /// Sent as a number by current backends, as a numeric string by older ones
    #[serde(default, deserialize_with = "lenient_pages")]
    pub pages: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    pub fn into_outcome(self) -> UploadOutcome {
        match (self.success, self.pages) {
            (true, Some(pages)) => Ok(pages),
            (true, None) => Err(SyncError::transport("analysis succeeded without a page count")),
            (false, _) => Err(SyncError::Application(self.message)),
        }
    }
}

fn lenient_pages<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UploadResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_with_numeric_pages() {
        let response = parse(r#"{"success": true, "pages": 12}"#);
        assert_eq!(response.into_outcome(), Ok(12));
    }

    #[test]
    fn test_success_with_string_pages() {
        let response = parse(r#"{"success": true, "pages": "40"}"#);
        assert_eq!(response.into_outcome(), Ok(40));
    }

    #[test]
    fn test_rejection_keeps_message() {
        let response = parse(r#"{"success": false, "message": "Only PDF files are supported"}"#);
        assert_eq!(
            response.into_outcome(),
            Err(SyncError::Application(Some(
                "Only PDF files are supported".to_string()
            )))
        );
    }

    #[test]
    fn test_rejection_without_message() {
        let response = parse(r#"{"success": false}"#);
        assert_eq!(response.into_outcome(), Err(SyncError::Application(None)));
    }

    #[test]
    fn test_success_without_pages_is_transport_error() {
        let response = parse(r#"{"success": true, "pages": null}"#);
        assert!(matches!(
            response.into_outcome(),
            Err(SyncError::Transport(_))
        ));
    }
}
