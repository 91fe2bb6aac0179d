use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::{requests::UpdateSectionRequest, responses::SectionResponse},
};

pub async fn update_section(
    service: &SectionService,
    section_id: i64,
    update_data: UpdateSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors([("title", vec!["This field may not be blank.".to_string()])]),
            "Validation failed",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_section(section_id, update_data).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SectionResponse { section },
            "章节更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update section: {e}"),
            )),
        ),
    }
}
