use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::{
    ApiResponse, ErrorCode,
    tests::requests::{TestListParams, TestListQuery},
};

pub async fn list_tests(
    service: &TestService,
    query: TestListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TestListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        material_id: query.material,
        title: query.title,
        search: query.search,
        ordering: query.ordering,
    };

    match storage.list_tests_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Test list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve test list: {e}"),
            )),
        ),
    }
}
