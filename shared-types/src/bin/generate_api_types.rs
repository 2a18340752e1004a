use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Lead types
    types.push(clean_type(Lead::export_to_string()?));
    types.push(clean_type(CompanyRef::export_to_string()?));
    types.push(clean_type(LinkedinProfile::export_to_string()?));
    types.push(clean_type(TwitterProfile::export_to_string()?));
    types.push(clean_type(GithubProfile::export_to_string()?));
    types.push(clean_type(LeadSummary::export_to_string()?));
    types.push(clean_type(GenerateLeadsRequest::export_to_string()?));
    types.push(clean_type(GenerateLeadsResponse::export_to_string()?));

    // Draft types
    types.push(clean_type(EmailType::export_to_string()?));
    types.push(clean_type(EmailDraft::export_to_string()?));
    types.push(clean_type(GeneratedEmail::export_to_string()?));
    types.push(clean_type(GenerateEmailRequest::export_to_string()?));
    types.push(clean_type(GenerateEmailResponse::export_to_string()?));
    types.push(clean_type(GenerateEmailsRequest::export_to_string()?));
    types.push(clean_type(GenerateEmailsResponse::export_to_string()?));

    // Profile types
    types.push(clean_type(SearchProfile::export_to_string()?));
    types.push(clean_type(ProfileListItem::export_to_string()?));
    types.push(clean_type(ProfilesResponse::export_to_string()?));

    let output_dir = Path::new("../web/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            // Keep import lines if they're part of a type definition
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
