use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SectionService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::{requests::CreateSectionRequest, responses::SectionResponse},
};

pub async fn create_section(
    service: &SectionService,
    section_data: CreateSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if section_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors([("title", vec!["This field may not be blank.".to_string()])]),
            "Validation failed",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_section(section_data).await {
        Ok(section) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SectionResponse { section },
            "章节创建成功",
        ))),
        Err(e) => {
            error!("Section creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Section creation failed: {e}"),
                )),
            )
        }
    }
}
