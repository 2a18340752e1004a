mod extractor;

pub use extractor::ContactInfoExtractor;

use regex::Regex;
use shared_types::{Lead, UNKNOWN_NAME};

/// One entry in an ordered fallback table. Patterns are tried in order;
/// the first one that matches wins and its capture group supplies the
/// field value.
pub struct FieldPattern {
    pub name: String,
    pub regex: Regex,
    pub group: usize,
}

impl FieldPattern {
    pub fn capture<'t>(&self, haystack: &'t str) -> Option<&'t str> {
        self.regex
            .captures(haystack)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str())
    }
}

fn create_role_patterns() -> Vec<FieldPattern> {
    vec![
        // Fixed vocabulary of role titles, anywhere in the document
        FieldPattern {
            name: "known_role_title".to_string(),
            regex: Regex::new(
                r"(?i)(?:^|\s)(CTO|CEO|VP of Engineering|Head of AI|AI Engineer|ML Engineer|Engineering Manager|Founder|Co-Founder|Chief Technology Officer|Technical Lead|Engineering Director)",
            )
            .unwrap(),
            group: 1,
        },
        FieldPattern {
            name: "labeled_role".to_string(),
            regex: Regex::new(r"(?i)(?:title|role|position):\s*([^,\n]+)").unwrap(),
            group: 1,
        },
    ]
}

fn create_company_patterns() -> Vec<FieldPattern> {
    vec![
        FieldPattern {
            name: "at_company".to_string(),
            regex: Regex::new(r"(?:at|@)\s+([A-Z][a-zA-Z0-9\s&]+(?:Inc|LLC|Ltd|Corporation|Corp)?)")
                .unwrap(),
            group: 1,
        },
        FieldPattern {
            name: "works_at_company".to_string(),
            regex: Regex::new(r"(?i)(?:works? at|working at|employed at)\s+([A-Z][a-zA-Z0-9\s&]+)")
                .unwrap(),
            group: 1,
        },
        FieldPattern {
            name: "labeled_company".to_string(),
            regex: Regex::new(r"(?i)(?:company|organization):\s*([^,\n]+)").unwrap(),
            group: 1,
        },
    ]
}

/// Drops leads whose name could not be resolved and truncates to the
/// requested count. Relative order is whatever the search provider
/// returned.
pub fn qualify_leads(leads: Vec<Lead>, limit: usize) -> Vec<Lead> {
    leads
        .into_iter()
        .filter(|lead| lead.name != UNKNOWN_NAME)
        .take(limit)
        .collect()
}
