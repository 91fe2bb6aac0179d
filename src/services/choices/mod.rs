pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::errors::Result;
use crate::models::choices::requests::{
    ChoiceListParams, CreateChoiceRequest, UpdateChoiceRequest,
};
use crate::storage::Storage;

pub struct ChoiceService {
    storage: Option<Arc<dyn Storage>>,
}

impl ChoiceService {
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

    // 选项 → 题目 → 测验 → 资料，解析缓存失效的目标
    pub(crate) async fn resolve_material_id(
        storage: &Arc<dyn Storage>,
        question_id: i64,
    ) -> Result<Option<i64>> {
        let Some(question) = storage.get_question_by_id(question_id).await? else {
            return Ok(None);
        };
        Ok(storage
            .get_test_by_id(question.test_id)
            .await?
            .map(|test| test.material_id))
    }

    // 创建选项
    pub async fn create_choice(
        &self,
        choice_data: CreateChoiceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_choice(self, choice_data, request).await
    }

    // 根据ID获取选项
    pub async fn get_choice(
        &self,
        choice_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_choice(self, choice_id, request).await
    }

    // 获取选项列表
    pub async fn list_choices(
        &self,
        query: ChoiceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_choices(self, query, request).await
    }

    // 更新选项信息
    pub async fn update_choice(
        &self,
        choice_id: i64,
        update_data: UpdateChoiceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_choice(self, choice_id, update_data, request).await
    }

    // 删除选项
    pub async fn delete_choice(
        &self,
        choice_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_choice(self, choice_id, request).await
    }
}
