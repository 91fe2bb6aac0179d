use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::tests::requests::{CreateTestRequest, TestListParams, UpdateTestRequest};
use crate::services::TestService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TestService 实例
static TEST_SERVICE: Lazy<TestService> = Lazy::new(TestService::new_lazy);

// HTTP处理程序
pub async fn list_tests(
    req: HttpRequest,
    query: web::Query<TestListParams>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.list_tests(query.into_inner(), &req).await
}

pub async fn create_test(
    req: HttpRequest,
    test_data: web::Json<CreateTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.create_test(test_data.into_inner(), &req).await
}

pub async fn get_test(req: HttpRequest, test_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.get_test(test_id.0, &req).await
}

pub async fn update_test(
    req: HttpRequest,
    test_id: SafeIDI64,
    update_data: web::Json<UpdateTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .update_test(test_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_test(req: HttpRequest, test_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_test(test_id.0, &req).await
}

// 配置路由
pub fn configure_test_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tests")
            .route("", web::get().to(list_tests))
            .route("", web::post().to(create_test))
            .route("/{id}", web::get().to(get_test))
            .route("/{id}", web::put().to(update_test))
            .route("/{id}", web::patch().to(update_test))
            .route("/{id}", web::delete().to(delete_test)),
    );
}
