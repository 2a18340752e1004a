use crate::lead::{Lead, LeadSummary};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Outreach strategy. Selects the prompt template and target length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    ColdOutreach,
    FollowUp,
    ValueAdd,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown email type: {0}")]
pub struct UnknownEmailType(pub String);

impl FromStr for EmailType {
    type Err = UnknownEmailType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cold_outreach" => Ok(EmailType::ColdOutreach),
            "follow_up" => Ok(EmailType::FollowUp),
            "value_add" => Ok(EmailType::ValueAdd),
            other => Err(UnknownEmailType(other.to_string())),
        }
    }
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmailType::ColdOutreach => "cold_outreach",
            EmailType::FollowUp => "follow_up",
            EmailType::ValueAdd => "value_add",
        };
        write!(f, "{}", s)
    }
}

/// One generated outreach email. Immutable after creation; regeneration
/// replaces the draft rather than editing it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    pub generated_at: i64,
}

/// A draft paired with the lead it was written for, as persisted in
/// `emails.json`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedEmail {
    pub lead: LeadSummary,
    pub email: EmailDraft,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailRequest {
    pub lead: Lead,
    pub email_type: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct GenerateEmailResponse {
    pub email: EmailDraft,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailsRequest {
    pub leads: Vec<Lead>,
    pub email_type: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct GenerateEmailsResponse {
    pub emails: Vec<GeneratedEmail>,
    pub count: usize,
}
