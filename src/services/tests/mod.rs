pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::tests::requests::{CreateTestRequest, TestListParams, UpdateTestRequest};
use crate::storage::Storage;

pub struct TestService {
    storage: Option<Arc<dyn Storage>>,
}

impl TestService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 缓存是可选的（测试环境不注册缓存后端）
    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .map(|cache| cache.get_ref().clone())
    }

    // 创建测验
    pub async fn create_test(
        &self,
        test_data: CreateTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_test(self, test_data, request).await
    }

    // 根据ID获取测验（嵌套读取）
    pub async fn get_test(&self, test_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_test(self, test_id, request).await
    }

    // 获取测验列表
    pub async fn list_tests(
        &self,
        query: TestListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_tests(self, query, request).await
    }

    // 更新测验信息
    pub async fn update_test(
        &self,
        test_id: i64,
        update_data: UpdateTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_test(self, test_id, update_data, request).await
    }

    // 删除测验
    pub async fn delete_test(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_test(self, test_id, request).await
    }
}
