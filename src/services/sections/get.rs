use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::sections::responses::SectionResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_section(
    service: &SectionService,
    section_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SectionResponse { section },
            "Section retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get section: {e}"),
            )),
        ),
    }
}
