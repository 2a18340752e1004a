pub mod exa;

pub use exa::ExaClient;

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::SearchDocument;

/// A neural-search request. Wire field names follow the provider's
/// camelCase convention.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: String,
    pub use_autoprompt: bool,
    pub num_results: usize,
    pub text: bool,
    pub highlights: HighlightConfig,
    pub include_domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    pub num_sentences: usize,
    pub highlights_per_url: usize,
}

impl SearchRequest {
    /// Neural search with full text and three 3-sentence highlights per
    /// document, restricted to the given domains.
    pub fn neural(query: String, num_results: usize, include_domains: Vec<String>) -> Self {
        Self {
            query,
            search_type: "neural".to_string(),
            use_autoprompt: true,
            num_results,
            text: true,
            highlights: HighlightConfig {
                num_sentences: 3,
                highlights_per_url: 3,
            },
            include_domains,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchDocument>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = SearchRequest::neural(
            "voice AI engineers".to_string(),
            30,
            vec!["linkedin.com".to_string()],
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "neural");
        assert_eq!(json["useAutoprompt"], true);
        assert_eq!(json["numResults"], 30);
        assert_eq!(json["highlights"]["numSentences"], 3);
        assert_eq!(json["highlights"]["highlightsPerUrl"], 3);
        assert_eq!(json["includeDomains"][0], "linkedin.com");
    }

    #[test]
    fn test_response_documents_default_missing_fields() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results": [{"url": "https://github.com/someone"}]}"#,
        )
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "");
        assert!(response.results[0].highlights.is_empty());
    }
}
