pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::errors::Result;
use crate::models::questions::requests::{
    CreateQuestionRequest, QuestionListParams, UpdateQuestionRequest,
};
use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
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

    // 题目 → 测验 → 资料，解析缓存失效的目标
    pub(crate) async fn resolve_material_id(
        storage: &Arc<dyn Storage>,
        test_id: i64,
    ) -> Result<Option<i64>> {
        Ok(storage
            .get_test_by_id(test_id)
            .await?
            .map(|test| test.material_id))
    }

    // 创建题目
    pub async fn create_question(
        &self,
        question_data: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, question_data, request).await
    }

    // 根据ID获取题目（含选项）
    pub async fn get_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_question(self, question_id, request).await
    }

    // 获取题目列表
    pub async fn list_questions(
        &self,
        query: QuestionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, query, request).await
    }

    // 更新题目信息
    pub async fn update_question(
        &self,
        question_id: i64,
        update_data: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, question_id, update_data, request).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, question_id, request).await
    }
}
