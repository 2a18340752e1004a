use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use prospect_agents::llm::AnthropicClient;
use prospect_agents::search::ExaClient;
use prospect_agents::{LeadStore, OutreachPipeline};
use prospect_api::config::ApiConfig;
use prospect_api::handlers;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("prospect-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config; the server refuses to start over a broken config
    let (config, config_path) = ApiConfig::load().expect("Failed to load config");
    tracing::info!("Loaded config from {:?}", config_path);
    let config = Arc::new(config);

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    let exa_key = config.resolve_exa_key().unwrap_or_else(|| {
        tracing::warn!("No Exa API key configured; lead search will fail");
        String::new()
    });
    let anthropic_key = config.resolve_anthropic_key().unwrap_or_else(|| {
        tracing::warn!("No Anthropic API key configured; email drafting will fail");
        String::new()
    });

    let pipeline = Arc::new(OutreachPipeline::new(
        Arc::new(ExaClient::new(exa_key)),
        Arc::new(AnthropicClient::new(anthropic_key)),
        LeadStore::new(config.output_dir()),
    ));

    println!("Starting server on {}:{}", host, port);

    let config_for_server = config.clone();
    HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config_for_server.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(config_for_server.clone()))
            .app_data(web::Data::new(pipeline.clone()))
            .service(health)
            .route("/api/profiles", web::get().to(handlers::profiles::list_profiles))
            .route(
                "/api/generate-leads",
                web::post().to(handlers::leads::generate_leads),
            )
            .route(
                "/api/generate-email",
                web::post().to(handlers::emails::generate_email),
            )
            .route(
                "/api/generate-emails",
                web::post().to(handlers::emails::generate_emails),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
