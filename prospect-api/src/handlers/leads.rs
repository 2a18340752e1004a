use actix_web::{web, HttpResponse, Result as ActixResult};
use prospect_agents::OutreachPipeline;
use shared_types::{ErrorResponse, GenerateLeadsRequest, GenerateLeadsResponse};
use std::sync::Arc;
use tracing::info;

pub async fn generate_leads(
    pipeline: web::Data<Arc<OutreachPipeline>>,
    request: web::Json<GenerateLeadsRequest>,
) -> ActixResult<HttpResponse> {
    info!(
        "Generating up to {} leads for query: {:.80}",
        request.lead_count, request.query
    );

    match pipeline
        .generate_leads(&request.query, &request.criteria, request.lead_count)
        .await
    {
        Ok(leads) => {
            let count = leads.len();
            Ok(HttpResponse::Ok().json(GenerateLeadsResponse { leads, count }))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse {
            error: format!("{:#}", e),
        })),
    }
}
