use crate::contact_info::{create_company_patterns, create_role_patterns, FieldPattern};
use regex::Regex;
use shared_types::{
    CompanyRef, GithubProfile, Lead, LinkedinProfile, SearchDocument, TwitterProfile,
    NOT_AVAILABLE, NO_SUMMARY, UNKNOWN_NAME,
};

const SUMMARY_CHARS: usize = 300;

/// Best-effort extraction of contact fields from one search result.
///
/// Search results are unstructured web content with no common schema, so
/// every field is matched through its own fallback table and unmatched
/// fields get a sentinel. Output is filtered downstream on `name` only.
pub struct ContactInfoExtractor {
    name_pattern: Regex,
    role_patterns: Vec<FieldPattern>,
    company_patterns: Vec<FieldPattern>,
    linkedin_pattern: Regex,
    twitter_pattern: Regex,
    github_pattern: Regex,
    email_pattern: Regex,
}

impl ContactInfoExtractor {
    pub fn new() -> Self {
        Self {
            // Two or more consecutive capitalized words at the start of
            // the document title
            name_pattern: Regex::new(r"^([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)").unwrap(),
            role_patterns: create_role_patterns(),
            company_patterns: create_company_patterns(),
            linkedin_pattern: Regex::new(r"linkedin\.com/in/([a-zA-Z0-9-]+)").unwrap(),
            twitter_pattern: Regex::new(r"(?:twitter\.com|x\.com)/([a-zA-Z0-9_]+)").unwrap(),
            // Single path segment only, so user/org roots match but repo
            // sub-paths do not
            github_pattern: Regex::new(r"github\.com/([a-zA-Z0-9-]+)").unwrap(),
            email_pattern: Regex::new(r"([a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+)")
                .unwrap(),
        }
    }

    /// Total function: never fails, every branch has a sentinel fallback.
    pub fn extract(&self, doc: &SearchDocument) -> Lead {
        // Combine text and highlights for better matching
        let content = std::iter::once(doc.text.as_str())
            .chain(doc.highlights.iter().map(|h| h.as_str()))
            .collect::<Vec<_>>()
            .join(" ");
        let haystack = format!("{} {}", doc.title, content);

        let name = self
            .name_pattern
            .captures(&doc.title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let title = first_capture(&self.role_patterns, &haystack)
            .map(|s| s.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let company = first_capture(&self.company_patterns, &haystack)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let linkedin = self.extract_linkedin(&doc.url, &content);
        let twitter = self.extract_twitter(&content);
        let github = self.extract_github(&content);

        let email = self
            .email_pattern
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let summary = self.extract_summary(doc);

        Lead {
            name,
            title,
            company: CompanyRef { name: company },
            email,
            linkedin,
            twitter,
            github,
            personal_website: doc.url.clone(),
            summary,
            source_url: doc.url.clone(),
            raw_title: doc.title.clone(),
        }
    }

    fn extract_linkedin(&self, url: &str, content: &str) -> Option<LinkedinProfile> {
        // A linkedin result page is its own best profile link
        if url.contains("linkedin.com") {
            return Some(LinkedinProfile {
                url: url.to_string(),
            });
        }

        self.linkedin_pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|slug| LinkedinProfile {
                url: format!("https://linkedin.com/in/{}", slug.as_str()),
            })
    }

    fn extract_twitter(&self, content: &str) -> Option<TwitterProfile> {
        self.twitter_pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|handle| TwitterProfile {
                handle: format!("@{}", handle.as_str()),
                url: format!("https://twitter.com/{}", handle.as_str()),
            })
    }

    fn extract_github(&self, content: &str) -> Option<GithubProfile> {
        self.github_pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|username| GithubProfile {
                username: username.as_str().to_string(),
                url: format!("https://github.com/{}", username.as_str()),
            })
    }

    fn extract_summary(&self, doc: &SearchDocument) -> String {
        if !doc.text.is_empty() {
            return truncate_chars(&doc.text, SUMMARY_CHARS);
        }

        match doc.highlights.first() {
            Some(first) if !first.is_empty() => truncate_chars(first, SUMMARY_CHARS),
            _ => NO_SUMMARY.to_string(),
        }
    }
}

impl Default for ContactInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn first_capture<'t>(patterns: &[FieldPattern], haystack: &'t str) -> Option<&'t str> {
    patterns.iter().find_map(|p| p.capture(haystack))
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
