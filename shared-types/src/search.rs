use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One document returned by the neural search provider. The provider omits
/// fields it has no content for, so everything defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A named search configuration: what to look for and how many leads to
/// keep. Profiles live in the config file; the CLI falls back to
/// `SearchProfile::default()` when none can be read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchProfile {
    pub name: String,
    pub description: String,
    pub lead_count: usize,
    pub query: String,
    pub criteria: Vec<String>,
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self {
            name: "Default Profile".to_string(),
            description: "AI Engineers & CTOs (Voice/Speech Focus)".to_string(),
            lead_count: 50,
            query: "AI engineers, CTOs, and technical decision makers focused on \
                    speech-to-text, voice AI, and conversational AI applications. \
                    They build voice agents, meeting transcription tools, phone \
                    support automation, and sales call analysis tools."
                .to_string(),
            criteria: vec![
                "currently employed as an ai engineer, cto, vp of engineering, or technical decision maker".to_string(),
                "professional focus on speech-to-text, voice ai, conversational ai, or audio processing".to_string(),
                "builds or maintains products involving: ai voice agents, meeting transcription, phone support automation, or voice-enabled applications".to_string(),
                "works at a company with 10-1000 employees (not enterprise, not solo)".to_string(),
                "likely in the market for speech-to-text apis or looking to improve their current solution".to_string(),
                "active in the ai/developer community (github, twitter, linkedin, blog posts)".to_string(),
            ],
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesResponse {
    pub profiles: Vec<ProfileListItem>,
    pub active_profile: String,
}

/// A profile plus the config key it is registered under.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ProfileListItem {
    pub id: String,
    #[serde(flatten)]
    pub profile: SearchProfile,
}
