use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::common::response::field_errors;
use crate::models::{
    ApiResponse, ErrorCode,
    tests::{requests::UpdateTestRequest, responses::TestResponse},
};
use crate::services::materials::tree_cache;

pub async fn update_test(
    service: &TestService,
    test_id: i64,
    update_data: UpdateTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先取旧记录，既做 404 判断也用于缓存失效
    let existing = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "Test not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get test: {e}"),
                )),
            );
        }
    };

    let mut errors: Vec<(&str, Vec<String>)> = Vec::new();

    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        errors.push(("title", vec!["This field may not be blank.".to_string()]));
    }

    // 若更新父引用，新的学习资料必须存在
    if let Some(material_id) = update_data.material_id {
        match storage.get_material_by_id(material_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                errors.push((
                    "material_id",
                    vec![format!("Material {material_id} does not exist")],
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
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            field_errors(errors),
            "Validation failed",
        )));
    }

    match storage.update_test(test_id, update_data).await {
        Ok(Some(updated)) => {
            // 原资料与（可能变更后的）新资料都要失效
            if let Some(cache) = service.get_cache(request) {
                tree_cache::evict(&cache, existing.material_id).await;
                if updated.material_id != existing.material_id {
                    tree_cache::evict(&cache, updated.material_id).await;
                }
            }

            // 更新成功后按嵌套表示返回
            match storage.get_test_detail(test_id).await {
                Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    TestResponse { test: detail },
                    "测验更新成功",
                ))),
                Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TestNotFound,
                    "Test not found",
                ))),
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to get test: {e}"),
                    )),
                ),
            }
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "Test not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update test: {e}"),
            )),
        ),
    }
}
