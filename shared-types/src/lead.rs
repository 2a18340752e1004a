use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Placeholder name for results where no person could be identified.
/// Leads carrying this name are dropped during qualification.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Placeholder for string fields the extractor found no match for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder summary for documents with no usable text.
pub const NO_SUMMARY: &str = "No summary available";

/// A prospective contact extracted from one search result document.
///
/// Every field is populated: unmatched string fields carry a sentinel,
/// unmatched profile sub-objects serialize as explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lead {
    pub name: String,
    pub title: String,
    pub company: CompanyRef,
    pub email: Option<String>,
    pub linkedin: Option<LinkedinProfile>,
    pub twitter: Option<TwitterProfile>,
    pub github: Option<GithubProfile>,
    pub personal_website: String,
    pub summary: String,
    pub source_url: String,
    pub raw_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LinkedinProfile {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TwitterProfile {
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GithubProfile {
    pub username: String,
    pub url: String,
}

/// Flattened lead projection stored next to each generated email.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeadSummary {
    pub name: String,
    pub email: Option<String>,
    pub title: String,
    pub company: String,
    pub linkedin: Option<String>,
}

impl From<&Lead> for LeadSummary {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            title: lead.title.clone(),
            company: lead.company.name.clone(),
            linkedin: lead.linkedin.as_ref().map(|l| l.url.clone()),
        }
    }
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLeadsRequest {
    pub query: String,
    pub criteria: Vec<String>,
    pub lead_count: usize,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct GenerateLeadsResponse {
    pub leads: Vec<Lead>,
    pub count: usize,
}
