use serde::{Deserialize, Serialize};

pub mod draft;
pub mod lead;
pub mod search;

pub use draft::{
    EmailDraft, EmailType, GenerateEmailRequest, GenerateEmailResponse, GenerateEmailsRequest,
    GenerateEmailsResponse, GeneratedEmail, UnknownEmailType,
};
pub use lead::{
    CompanyRef, GenerateLeadsRequest, GenerateLeadsResponse, GithubProfile, Lead, LeadSummary,
    LinkedinProfile, TwitterProfile, NOT_AVAILABLE, NO_SUMMARY, UNKNOWN_NAME,
};
pub use search::{ProfileListItem, ProfilesResponse, SearchDocument, SearchProfile};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
