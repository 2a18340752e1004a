use shared_types::{EmailType, Lead};

/// Product pitch embedded in every outreach prompt.
const PRODUCT_CONTEXT: &str = "
EchoScribe is a speech-to-text API that offers:
- High accuracy transcription with speaker diarization
- Support for 100+ languages
- Real-time and batch processing
- Audio intelligence features (summarization, sentiment analysis, topic detection)
- Easy integration with modern tech stacks
- Competitive pricing with generous free tier
- Built for developers with excellent documentation
";

const NOT_SPECIFIED: &str = "Not specified";

/// Builds the drafting prompt for one lead. Template selection is total
/// over the enum; unknown strategy strings are rejected where they enter
/// the system, before any prompt is built.
pub fn build_email_prompt(lead: &Lead, email_type: EmailType) -> String {
    match email_type {
        EmailType::ColdOutreach => cold_outreach_prompt(lead),
        EmailType::FollowUp => follow_up_prompt(lead),
        EmailType::ValueAdd => value_add_prompt(lead),
    }
}

fn cold_outreach_prompt(lead: &Lead) -> String {
    format!(
        r#"You are writing a personalized cold outreach email for EchoScribe, a speech-to-text API company.

Lead Information:
- Name: {}
- Title: {}
- Company: {}
- Summary: {}
- LinkedIn: {}
- GitHub: {}

EchoScribe Context:
{}

Write a personalized cold email that:
1. References something specific about their work/company (use the summary and profile info)
2. Clearly explains how EchoScribe can solve a pain point they likely have
3. Includes a clear, low-pressure call-to-action
4. Is concise (150-200 words max)
5. Feels personal, not templated
6. Has a compelling subject line

Format your response as:
SUBJECT: [subject line]

BODY:
[email body]"#,
        lead.name,
        or_not_specified(&lead.title),
        or_not_specified(&lead.company.name),
        or_not_specified(&lead.summary),
        lead.linkedin
            .as_ref()
            .map(|l| l.url.as_str())
            .unwrap_or(NOT_SPECIFIED),
        lead.github
            .as_ref()
            .map(|g| g.username.as_str())
            .unwrap_or(NOT_SPECIFIED),
        PRODUCT_CONTEXT,
    )
}

fn follow_up_prompt(lead: &Lead) -> String {
    format!(
        r#"You are writing a follow-up email for EchoScribe to someone who hasn't responded to initial outreach.

Lead Information:
- Name: {}
- Title: {}
- Company: {}

Write a brief follow-up email that:
1. Adds new value (a relevant case study, feature, or insight)
2. Acknowledges they're busy
3. Makes it easy to respond with a simple yes/no question
4. Is very short (75-100 words)

Format your response as:
SUBJECT: [subject line]

BODY:
[email body]"#,
        lead.name,
        or_not_specified(&lead.title),
        or_not_specified(&lead.company.name),
    )
}

fn value_add_prompt(lead: &Lead) -> String {
    format!(
        r#"You are writing a value-add email for EchoScribe that provides useful content first, asks for nothing.

Lead Information:
- Name: {}
- Title: {}
- Company: {}
- Summary: {}

Write an email that:
1. Shares a relevant technical insight, benchmark, or resource about speech-to-text
2. References their specific use case or industry
3. Positions you as helpful, not salesy
4. Has no explicit CTA (just "hope this helps" vibe)
5. Is 100-150 words

Format your response as:
SUBJECT: [subject line]

BODY:
[email body]"#,
        lead.name,
        or_not_specified(&lead.title),
        or_not_specified(&lead.company.name),
        or_not_specified(&lead.summary),
    )
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CompanyRef, LinkedinProfile};

    fn sample_lead() -> Lead {
        Lead {
            name: "Jane Smith".to_string(),
            title: "CTO".to_string(),
            company: CompanyRef {
                name: "Acme Corp".to_string(),
            },
            email: Some("jane@acme.com".to_string()),
            linkedin: Some(LinkedinProfile {
                url: "https://linkedin.com/in/janesmith".to_string(),
            }),
            twitter: None,
            github: None,
            personal_website: "https://linkedin.com/in/janesmith".to_string(),
            summary: "Jane Smith is CTO at Acme Corp".to_string(),
            source_url: "https://linkedin.com/in/janesmith".to_string(),
            raw_title: "Jane Smith".to_string(),
        }
    }

    #[test]
    fn test_cold_outreach_references_profile_fields() {
        let prompt = build_email_prompt(&sample_lead(), EmailType::ColdOutreach);

        assert!(prompt.contains("Name: Jane Smith"));
        assert!(prompt.contains("LinkedIn: https://linkedin.com/in/janesmith"));
        assert!(prompt.contains("GitHub: Not specified"));
        assert!(prompt.contains("150-200 words"));
        assert!(prompt.contains("SUBJECT:"));
        assert!(prompt.contains("BODY:"));
    }

    #[test]
    fn test_follow_up_is_short_and_omits_summary() {
        let prompt = build_email_prompt(&sample_lead(), EmailType::FollowUp);

        assert!(prompt.contains("75-100 words"));
        assert!(!prompt.contains("Summary:"));
        assert!(!prompt.contains("LinkedIn:"));
    }

    #[test]
    fn test_value_add_has_no_cta() {
        let prompt = build_email_prompt(&sample_lead(), EmailType::ValueAdd);

        assert!(prompt.contains("100-150 words"));
        assert!(prompt.contains("no explicit CTA"));
        assert!(prompt.contains("Summary: Jane Smith is CTO at Acme Corp"));
    }

    #[test]
    fn test_every_template_embeds_product_name() {
        for email_type in [
            EmailType::ColdOutreach,
            EmailType::FollowUp,
            EmailType::ValueAdd,
        ] {
            let prompt = build_email_prompt(&sample_lead(), email_type);
            assert!(prompt.contains("EchoScribe"), "type: {}", email_type);
        }
    }
}
