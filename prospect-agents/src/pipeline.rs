use crate::llm::{anthropic, CompletionRequest, LlmClient, Message};
use crate::outreach::{build_email_prompt, parse_email_draft};
use crate::search::{SearchProvider, SearchRequest};
use crate::storage::LeadStore;
use anyhow::{Context, Result};
use extractors::{qualify_leads, ContactInfoExtractor};
use shared_types::{EmailDraft, EmailType, GeneratedEmail, Lead, LeadSummary};
use std::sync::Arc;
use std::time::Duration;

/// Domains lead search is restricted to.
const ALLOWED_DOMAINS: [&str; 4] = ["linkedin.com", "github.com", "twitter.com", "medium.com"];

/// Results are over-fetched by this factor to absorb extraction and
/// qualification loss.
const OVERFETCH_FACTOR: usize = 3;

/// Pause between consecutive draft requests. Drafting is strictly
/// sequential; this pacing is what keeps the batch inside the completion
/// provider's rate limit.
pub const DEFAULT_EMAIL_DELAY: Duration = Duration::from_secs(1);

/// Orchestrates the lead pipeline: search, extract, qualify, draft,
/// persist. Both the HTTP server and the batch CLI drive this.
pub struct OutreachPipeline {
    search: Arc<dyn SearchProvider>,
    llm: Arc<dyn LlmClient>,
    store: LeadStore,
    extractor: ContactInfoExtractor,
    email_delay: Duration,
}

impl OutreachPipeline {
    pub fn new(search: Arc<dyn SearchProvider>, llm: Arc<dyn LlmClient>, store: LeadStore) -> Self {
        Self {
            search,
            llm,
            store,
            extractor: ContactInfoExtractor::new(),
            email_delay: DEFAULT_EMAIL_DELAY,
        }
    }

    pub fn with_email_delay(mut self, delay: Duration) -> Self {
        self.email_delay = delay;
        self
    }

    pub fn store(&self) -> &LeadStore {
        &self.store
    }

    /// Searches for candidates, extracts contact info from every result,
    /// qualifies, and persists `leads.json` + `leads.csv`. A search
    /// failure aborts the run; there is no partial result to salvage.
    pub async fn generate_leads(
        &self,
        query: &str,
        criteria: &[String],
        lead_count: usize,
    ) -> Result<Vec<Lead>> {
        let search_query = format!("{} {}", query, criteria.join(" "));
        tracing::info!("Searching for leads: {:.150}...", search_query);

        let request = SearchRequest::neural(
            search_query,
            lead_count * OVERFETCH_FACTOR,
            ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect(),
        );

        let response = self.search.search(request).await.context("Lead search failed")?;

        tracing::info!(
            "Found {} raw results, extracting contact info",
            response.results.len()
        );

        let extracted: Vec<Lead> = response
            .results
            .iter()
            .map(|result| self.extractor.extract(result))
            .collect();
        let leads = qualify_leads(extracted, lead_count);

        tracing::info!("Extracted {} qualified leads", leads.len());

        self.store
            .write_leads(&leads)
            .context("Failed to persist leads")?;

        Ok(leads)
    }

    /// Drafts one email for one lead. Provider failures propagate; the
    /// caller decides whether to skip or abort.
    pub async fn generate_email(&self, lead: &Lead, email_type: EmailType) -> Result<EmailDraft> {
        let prompt = build_email_prompt(lead, email_type);

        let request = CompletionRequest {
            model: anthropic::DEFAULT_MODEL.to_string(),
            max_tokens: anthropic::DRAFT_MAX_TOKENS,
            messages: vec![Message::user(&prompt)],
        };

        let response = self.llm.complete(request).await?;
        let text = response
            .first_text()
            .ok_or(crate::error::ProviderError::EmptyCompletion)?;

        Ok(parse_email_draft(text, email_type))
    }

    /// Drafts emails for every lead, strictly sequentially, pausing
    /// between calls. A failed lead is logged and skipped; the batch
    /// never aborts on a per-lead failure. Persists `emails.json`.
    pub async fn generate_emails(
        &self,
        leads: &[Lead],
        email_type: EmailType,
    ) -> Result<Vec<GeneratedEmail>> {
        tracing::info!("Generating {} emails for {} leads", email_type, leads.len());

        let mut emails = Vec::new();

        for (i, lead) in leads.iter().enumerate() {
            tracing::info!("Processing {}/{}: {}", i + 1, leads.len(), lead.name);

            match self.generate_email(lead, email_type).await {
                Ok(email) => {
                    emails.push(GeneratedEmail {
                        lead: LeadSummary::from(lead),
                        email,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: draft generation failed: {:#}", lead.name, e);
                }
            }

            if i < leads.len() - 1 {
                tokio::time::sleep(self.email_delay).await;
            }
        }

        self.store
            .write_emails(&emails)
            .context("Failed to persist emails")?;

        Ok(emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::llm::{CompletionResponse, ContentBlock};
    use crate::search::SearchResponse;
    use async_trait::async_trait;
    use shared_types::SearchDocument;
    use std::sync::Mutex;

    struct FakeSearch {
        documents: Vec<SearchDocument>,
        fail: bool,
        last_request: Mutex<Option<SearchRequest>>,
    }

    impl FakeSearch {
        fn with_documents(documents: Vec<SearchDocument>) -> Self {
            Self {
                documents,
                fail: false,
                last_request: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                documents: Vec::new(),
                fail: true,
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SearchProvider for FakeSearch {
        async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ProviderError> {
            *self.last_request.lock().unwrap() = Some(request);

            if self.fail {
                return Err(ProviderError::Api {
                    status: 401,
                    message: "invalid api key".to_string(),
                });
            }

            Ok(SearchResponse {
                results: self.documents.clone(),
            })
        }
    }

    /// Completion provider that fails on the given call indexes.
    struct FakeLlm {
        fail_on: Vec<usize>,
        calls: Mutex<usize>,
    }

    impl FakeLlm {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                fail_on,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl LlmClient for FakeLlm {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, ProviderError> {
            let mut calls = self.calls.lock().unwrap();
            let index = *calls;
            *calls += 1;

            if self.fail_on.contains(&index) {
                return Err(ProviderError::Api {
                    status: 429,
                    message: "rate limited".to_string(),
                });
            }

            Ok(CompletionResponse {
                content: vec![ContentBlock::Text {
                    text: format!("SUBJECT: Draft {}\n\nBODY:\nHello.", index),
                }],
            })
        }
    }

    fn doc(title: &str, text: &str) -> SearchDocument {
        SearchDocument {
            title: title.to_string(),
            url: "https://linkedin.com/in/someone".to_string(),
            text: text.to_string(),
            highlights: vec![],
        }
    }

    fn lead(name: &str) -> Lead {
        let extractor = ContactInfoExtractor::new();
        extractor.extract(&doc(name, "works on voice AI"))
    }

    fn pipeline(search: FakeSearch, llm: FakeLlm, dir: &std::path::Path) -> OutreachPipeline {
        OutreachPipeline::new(Arc::new(search), Arc::new(llm), LeadStore::new(dir))
            .with_email_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_generate_leads_overfetches_and_qualifies() {
        let dir = tempfile::tempdir().unwrap();
        let search = FakeSearch::with_documents(vec![
            doc("Jane Smith", "CTO at Acme Corp"),
            doc("A page about nothing", ""),
            doc("Bob Jones", "ML Engineer at Beta Inc"),
            doc("Carol White", "Founder"),
        ]);
        let pipeline = pipeline(search, FakeLlm::new(vec![]), dir.path());

        let leads = pipeline
            .generate_leads("voice AI leaders", &["criteria one".to_string()], 2)
            .await
            .unwrap();

        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].name, "Jane Smith");
        assert_eq!(leads[1].name, "Bob Jones");

        // Persisted alongside the return value
        assert!(pipeline.store().leads_path().exists());
        assert!(pipeline.store().leads_csv_path().exists());
    }

    #[tokio::test]
    async fn test_generate_leads_sends_expected_request() {
        let dir = tempfile::tempdir().unwrap();
        let search = Arc::new(FakeSearch::with_documents(vec![]));
        let pipeline = OutreachPipeline::new(
            search.clone(),
            Arc::new(FakeLlm::new(vec![])),
            LeadStore::new(dir.path()),
        );

        pipeline
            .generate_leads("query", &["a".to_string(), "b".to_string()], 5)
            .await
            .unwrap();

        let request = search.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.query, "query a b");
        assert_eq!(request.num_results, 15);
        assert_eq!(
            request.include_domains,
            vec!["linkedin.com", "github.com", "twitter.com", "medium.com"]
        );
    }

    #[tokio::test]
    async fn test_generate_leads_aborts_on_search_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(FakeSearch::failing(), FakeLlm::new(vec![]), dir.path());

        let result = pipeline.generate_leads("query", &[], 5).await;
        assert!(result.is_err());
        assert!(!pipeline.store().leads_path().exists());
    }

    #[tokio::test]
    async fn test_generate_emails_skips_failed_lead() {
        let dir = tempfile::tempdir().unwrap();
        let leads: Vec<Lead> = ["Alice Ames", "Bob Brown", "Carol Cole", "Dan Drake", "Eve Evans"]
            .iter()
            .map(|name| lead(name))
            .collect();

        // Fails for lead index 2 only
        let pipeline = pipeline(
            FakeSearch::with_documents(vec![]),
            FakeLlm::new(vec![2]),
            dir.path(),
        );

        let emails = pipeline
            .generate_emails(&leads, EmailType::ColdOutreach)
            .await
            .unwrap();

        assert_eq!(emails.len(), 4);
        let names: Vec<&str> = emails.iter().map(|e| e.lead.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Ames", "Bob Brown", "Dan Drake", "Eve Evans"]);
    }

    #[tokio::test]
    async fn test_generate_emails_persists_results() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(
            FakeSearch::with_documents(vec![]),
            FakeLlm::new(vec![]),
            dir.path(),
        );

        let leads = vec![lead("Jane Smith")];
        let emails = pipeline
            .generate_emails(&leads, EmailType::FollowUp)
            .await
            .unwrap();

        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].email.subject, "Draft 0");
        assert_eq!(emails[0].email.email_type, EmailType::FollowUp);
        assert!(pipeline.store().emails_path().exists());
    }
}
