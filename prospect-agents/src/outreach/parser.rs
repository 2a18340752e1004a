use chrono::Utc;
use regex::Regex;
use shared_types::{EmailDraft, EmailType};

/// Subject used when the completion carries no SUBJECT: label.
pub const FALLBACK_SUBJECT: &str = "EchoScribe - Speech-to-Text API";

/// Parses a completion into a draft. Total: a completion without the
/// expected labels becomes a draft with the fallback subject and the
/// whole completion as body.
pub fn parse_email_draft(completion: &str, email_type: EmailType) -> EmailDraft {
    let subject_re = Regex::new(r"(?i)SUBJECT:\s*(.+)").unwrap();
    let body_re = Regex::new(r"(?is)BODY:\s*(.+)").unwrap();

    let subject = subject_re
        .captures(completion)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| FALLBACK_SUBJECT.to_string());

    let body = body_re
        .captures(completion)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| completion.to_string());

    EmailDraft {
        subject,
        body,
        email_type,
        generated_at: Utc::now().timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labeled_completion() {
        let completion = "SUBJECT: Quick question\n\nBODY:\nHi there,\nThanks.";
        let draft = parse_email_draft(completion, EmailType::ColdOutreach);

        assert_eq!(draft.subject, "Quick question");
        assert_eq!(draft.body, "Hi there,\nThanks.");
        assert_eq!(draft.email_type, EmailType::ColdOutreach);
        assert!(draft.generated_at > 0);
    }

    #[test]
    fn test_missing_body_label_keeps_whole_completion() {
        let completion = "Here is an email I wrote for you.";
        let draft = parse_email_draft(completion, EmailType::FollowUp);

        assert_eq!(draft.subject, FALLBACK_SUBJECT);
        assert_eq!(draft.body, completion);
    }

    #[test]
    fn test_missing_subject_label_uses_fallback() {
        let completion = "BODY:\nJust the body.";
        let draft = parse_email_draft(completion, EmailType::ValueAdd);

        assert_eq!(draft.subject, FALLBACK_SUBJECT);
        assert_eq!(draft.body, "Just the body.");
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let completion = "subject: Hello\n\nbody:\nHi.";
        let draft = parse_email_draft(completion, EmailType::ColdOutreach);

        assert_eq!(draft.subject, "Hello");
        assert_eq!(draft.body, "Hi.");
    }
}
