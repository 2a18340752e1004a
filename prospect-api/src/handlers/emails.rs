use actix_web::{web, HttpResponse, Result as ActixResult};
use prospect_agents::OutreachPipeline;
use shared_types::{
    EmailType, ErrorResponse, GenerateEmailRequest, GenerateEmailResponse, GenerateEmailsRequest,
    GenerateEmailsResponse,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

pub async fn generate_email(
    pipeline: web::Data<Arc<OutreachPipeline>>,
    request: web::Json<GenerateEmailRequest>,
) -> ActixResult<HttpResponse> {
    let email_type = match EmailType::from_str(&request.email_type) {
        Ok(email_type) => email_type,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    };

    info!("Generating {} email for {}", email_type, request.lead.name);

    match pipeline.generate_email(&request.lead, email_type).await {
        Ok(email) => Ok(HttpResponse::Ok().json(GenerateEmailResponse { email })),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse {
            error: format!("{:#}", e),
        })),
    }
}

pub async fn generate_emails(
    pipeline: web::Data<Arc<OutreachPipeline>>,
    request: web::Json<GenerateEmailsRequest>,
) -> ActixResult<HttpResponse> {
    let email_type = match EmailType::from_str(&request.email_type) {
        Ok(email_type) => email_type,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    };

    info!(
        "Generating {} emails for {} leads",
        email_type,
        request.leads.len()
    );

    match pipeline.generate_emails(&request.leads, email_type).await {
        Ok(emails) => {
            let count = emails.len();
            Ok(HttpResponse::Ok().json(GenerateEmailsResponse { emails, count }))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse {
            error: format!("{:#}", e),
        })),
    }
}
