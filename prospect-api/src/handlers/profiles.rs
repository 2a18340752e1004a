use crate::config::ApiConfig;
use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{ErrorResponse, ProfileListItem, ProfilesResponse};
use std::sync::Arc;

pub async fn list_profiles(config: web::Data<Arc<ApiConfig>>) -> ActixResult<HttpResponse> {
    let search = match &config.search {
        Some(search) => search,
        None => {
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: "No search profiles configured".to_string(),
            }))
        }
    };

    let mut profiles: Vec<ProfileListItem> = search
        .profiles
        .iter()
        .map(|(id, profile)| ProfileListItem {
            id: id.clone(),
            profile: profile.clone(),
        })
        .collect();
    profiles.sort_by(|a, b| a.id.cmp(&b.id));

    let active_profile = search
        .active_profile
        .clone()
        .unwrap_or_else(|| "default".to_string());

    Ok(HttpResponse::Ok().json(ProfilesResponse {
        profiles,
        active_profile,
    }))
}
