use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TestService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    tests::{
        requests::CreateTestRequest,
        responses::{TestDetail, TestResponse},
    },
};
use crate::services::materials::tree_cache;

pub async fn create_test(
    service: &TestService,
    test_data: CreateTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if test_data.title.trim().is_empty() {
        errors.push(("title", vec!["This field may not be blank.".to_string()]));
    }

    // 父引用必须指向已存在的学习资料
    match storage.get_material_by_id(test_data.material_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            errors.push((
                "material_id",
                vec![format!("Material {} does not exist", test_data.material_id)],
            ));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate material: {e}"),
                )),
            );
        }
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.create_test(test_data).await {
        Ok(test) => {
            // 所属资料的嵌套树变了
            if let Some(cache) = service.get_cache(request) {
                tree_cache::evict(&cache, test.material_id).await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TestResponse {
                    // 新建测验还没有任何题目
                    test: TestDetail {
                        test,
                        questions: Vec::new(),
                    },
                },
                "测验创建成功",
            )))
        }
        Err(e) => {
            error!("Test creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Test creation failed: {e}"),
                )),
            )
        }
    }
}
