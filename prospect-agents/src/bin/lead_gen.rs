use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, File};
use serde::Deserialize;
use shared_types::{EmailType, GeneratedEmail, SearchProfile};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use prospect_agents::llm::AnthropicClient;
use prospect_agents::search::ExaClient;
use prospect_agents::{LeadStore, OutreachPipeline};

#[derive(Parser, Debug)]
#[command(name = "lead-gen", about = "Generate leads and draft outreach emails for them")]
struct Cli {
    /// Outreach strategy: cold_outreach, follow_up or value_add
    #[arg(long, default_value = "cold_outreach")]
    email_type: String,

    /// Skip the search and redraft emails for the previously saved leads
    #[arg(long)]
    regenerate: bool,

    /// Search profile name from the config file
    #[arg(long)]
    profile: Option<String>,

    /// Directory the lead and email files are written to
    #[arg(long, default_value = "./leads")]
    output_dir: PathBuf,

    /// How many generated drafts to print at the end
    #[arg(long, default_value_t = 5)]
    sample: usize,
}

#[derive(Debug, Deserialize, Clone)]
struct CliConfig {
    search: Option<SearchConfig>,
}

#[derive(Debug, Deserialize, Clone)]
struct SearchConfig {
    active_profile: Option<String>,
    #[serde(default)]
    profiles: HashMap<String, SearchProfile>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let email_type = EmailType::from_str(&cli.email_type)?;

    let anthropic_key = std::env::var("ANTHROPIC_API_KEY")
        .context("ANTHROPIC_API_KEY environment variable is not set")?;
    let exa_key = if cli.regenerate {
        std::env::var("EXA_API_KEY").unwrap_or_default()
    } else {
        std::env::var("EXA_API_KEY")
            .context("EXA_API_KEY environment variable is not set")?
    };

    let store = LeadStore::new(&cli.output_dir);
    let pipeline = OutreachPipeline::new(
        Arc::new(ExaClient::new(exa_key)),
        Arc::new(AnthropicClient::new(anthropic_key)),
        store,
    );

    let leads = if cli.regenerate {
        let leads = pipeline
            .store()
            .read_leads()
            .context("No saved leads to regenerate from")?;
        println!("Regenerating emails for {} existing leads", leads.len());
        leads
    } else {
        let profile = load_search_profile(cli.profile.as_deref());
        println!("Using profile: \"{}\"", profile.name);
        println!("Description: {}", profile.description);
        println!("Target leads: {}\n", profile.lead_count);

        pipeline
            .generate_leads(&profile.query, &profile.criteria, profile.lead_count)
            .await?
    };

    if leads.is_empty() {
        println!("No leads found. Try adjusting the search criteria in your profile.");
        return Ok(());
    }

    let emails = pipeline.generate_emails(&leads, email_type).await?;

    print_sample(&emails, cli.sample);

    println!("Complete. Check the following files:");
    println!("  - {} (raw lead data)", pipeline.store().leads_path().display());
    println!("  - {} (leads in spreadsheet format)", pipeline.store().leads_csv_path().display());
    println!("  - {} (generated emails)", pipeline.store().emails_path().display());

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

/// Reads the requested (or active) profile from the shared config file.
/// Any failure falls back to the built-in default profile; the CLI never
/// refuses to run over a missing or malformed config.
fn load_search_profile(requested: Option<&str>) -> SearchProfile {
    let config_path = get_config_path();

    let config: CliConfig = match Config::builder()
        .add_source(File::from(config_path.clone()))
        .build()
        .and_then(|c| c.try_deserialize())
    {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Could not load search config from {:?}: {}. Using default profile.",
                config_path,
                e
            );
            return SearchProfile::default();
        }
    };

    let search = match config.search {
        Some(search) => search,
        None => {
            tracing::warn!("Config has no [search] section. Using default profile.");
            return SearchProfile::default();
        }
    };

    let profile_name = requested
        .map(|p| p.to_string())
        .or(search.active_profile)
        .unwrap_or_else(|| "default".to_string());

    match search.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None => {
            tracing::warn!(
                "Profile \"{}\" not found in config. Using default profile.",
                profile_name
            );
            SearchProfile::default()
        }
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("prospect").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn print_sample(emails: &[GeneratedEmail], count: usize) {
    println!("\n{}", "=".repeat(80));
    println!("SAMPLE EMAILS (first {})", count.min(emails.len()));
    println!("{}", "=".repeat(80));

    for GeneratedEmail { lead, email } in emails.iter().take(count) {
        println!("\n{}", "-".repeat(80));
        println!(
            "To: {} <{}>",
            lead.name,
            lead.email.as_deref().unwrap_or("No email found")
        );
        println!("Company: {} | Title: {}", lead.company, lead.title);
        println!("{}", "-".repeat(80));
        println!("Subject: {}", email.subject);
        println!("\n{}", email.body);
        println!("{}\n", "-".repeat(80));
    }
}
