use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::requests::{SectionListParams, SectionListQuery},
};

pub async fn list_sections(
    service: &SectionService,
    query: SectionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SectionListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        title: query.title,
        search: query.search,
        ordering: query.ordering,
    };

    match storage.list_sections_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Section list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve section list: {e}"),
            )),
        ),
    }
}
