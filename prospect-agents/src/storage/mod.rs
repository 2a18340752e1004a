use anyhow::{Context, Result};
use shared_types::{GeneratedEmail, Lead, NOT_AVAILABLE};
use std::fs;
use std::path::{Path, PathBuf};

const LEADS_FILE: &str = "leads.json";
const LEADS_CSV_FILE: &str = "leads.csv";
const EMAILS_FILE: &str = "emails.json";

const CSV_SUMMARY_CHARS: usize = 200;

/// File-backed snapshot of a pipeline run. Every write replaces the
/// whole file; nothing is appended or merged.
pub struct LeadStore {
    output_dir: PathBuf,
}

impl LeadStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn leads_path(&self) -> PathBuf {
        self.output_dir.join(LEADS_FILE)
    }

    pub fn leads_csv_path(&self) -> PathBuf {
        self.output_dir.join(LEADS_CSV_FILE)
    }

    pub fn emails_path(&self) -> PathBuf {
        self.output_dir.join(EMAILS_FILE)
    }

    /// Writes `leads.json` plus the spreadsheet projection `leads.csv`.
    pub fn write_leads(&self, leads: &[Lead]) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {:?}", self.output_dir)
        })?;

        let json = serde_json::to_string_pretty(leads)?;
        fs::write(self.leads_path(), json)
            .with_context(|| format!("Failed to write {:?}", self.leads_path()))?;

        self.write_leads_csv(leads)?;

        Ok(())
    }

    fn write_leads_csv(&self, leads: &[Lead]) -> Result<()> {
        let path = self.leads_csv_path();
        let mut writer =
            csv::Writer::from_path(&path).with_context(|| format!("Failed to open {:?}", path))?;

        writer.write_record([
            "Name", "Title", "Company", "Email", "LinkedIn", "Twitter", "GitHub", "Website",
            "Summary",
        ])?;

        for lead in leads {
            let summary = truncate_chars(&lead.summary, CSV_SUMMARY_CHARS);
            writer.write_record([
                lead.name.as_str(),
                lead.title.as_str(),
                lead.company.name.as_str(),
                lead.email.as_deref().unwrap_or(NOT_AVAILABLE),
                lead.linkedin
                    .as_ref()
                    .map(|l| l.url.as_str())
                    .unwrap_or(NOT_AVAILABLE),
                lead.twitter
                    .as_ref()
                    .map(|t| t.handle.as_str())
                    .unwrap_or(NOT_AVAILABLE),
                lead.github
                    .as_ref()
                    .map(|g| g.username.as_str())
                    .unwrap_or(NOT_AVAILABLE),
                lead.personal_website.as_str(),
                summary.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn write_emails(&self, emails: &[GeneratedEmail]) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {:?}", self.output_dir)
        })?;

        let json = serde_json::to_string_pretty(emails)?;
        fs::write(self.emails_path(), json)
            .with_context(|| format!("Failed to write {:?}", self.emails_path()))?;

        Ok(())
    }

    /// Loads a previously persisted lead list, for regeneration runs.
    pub fn read_leads(&self) -> Result<Vec<Lead>> {
        let path = self.leads_path();
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let leads = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(leads)
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CompanyRef, EmailDraft, EmailType, LeadSummary, TwitterProfile};

    fn sample_lead(name: &str) -> Lead {
        Lead {
            name: name.to_string(),
            title: "CTO".to_string(),
            company: CompanyRef {
                name: "Acme Corp".to_string(),
            },
            email: None,
            linkedin: None,
            twitter: Some(TwitterProfile {
                handle: "@jane".to_string(),
                url: "https://twitter.com/jane".to_string(),
            }),
            github: None,
            personal_website: "https://acme.com".to_string(),
            summary: "s".repeat(300),
            source_url: "https://acme.com".to_string(),
            raw_title: name.to_string(),
        }
    }

    #[test]
    fn test_write_and_read_leads_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LeadStore::new(dir.path());

        let leads = vec![sample_lead("Jane Smith"), sample_lead("Bob Jones")];
        store.write_leads(&leads).unwrap();

        let loaded = store.read_leads().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Jane Smith");
        assert_eq!(loaded[1].twitter.as_ref().unwrap().handle, "@jane");
    }

    #[test]
    fn test_csv_projection_substitutes_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let store = LeadStore::new(dir.path());

        store.write_leads(&[sample_lead("Jane Smith")]).unwrap();

        let csv = fs::read_to_string(store.leads_csv_path()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Name,Title,Company,Email,LinkedIn,Twitter,GitHub,Website,Summary"
        );

        let row = lines.next().unwrap();
        assert!(row.contains("N/A")); // email, linkedin, github
        assert!(row.contains("@jane"));
        assert!(row.contains(&"s".repeat(200)));
        assert!(!row.contains(&"s".repeat(201)));
    }

    #[test]
    fn test_write_emails_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LeadStore::new(dir.path());

        let lead = sample_lead("Jane Smith");
        let email = GeneratedEmail {
            lead: LeadSummary::from(&lead),
            email: EmailDraft {
                subject: "Hi".to_string(),
                body: "Hello".to_string(),
                email_type: EmailType::ColdOutreach,
                generated_at: 1700000000,
            },
        };

        store.write_emails(&[email.clone(), email]).unwrap();
        store.write_emails(&[]).unwrap();

        let data = fs::read_to_string(store.emails_path()).unwrap();
        let parsed: Vec<GeneratedEmail> = serde_json::from_str(&data).unwrap();
        assert!(parsed.is_empty());
    }
}
