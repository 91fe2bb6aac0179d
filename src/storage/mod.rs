use std::sync::Arc;

use crate::models::{
    answers::{
        entities::UserAnswer,
        requests::{AnswerListQuery, CreateAnswerRequest, UpdateAnswerRequest},
        responses::AnswerListResponse,
    },
    choices::{
        entities::Choice,
        requests::{ChoiceListQuery, CreateChoiceRequest, UpdateChoiceRequest},
        responses::ChoiceListResponse,
    },
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, MaterialListQuery, UpdateMaterialRequest},
        responses::{MaterialDetail, MaterialListResponse},
    },
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::{QuestionDetail, QuestionListResponse},
    },
    sections::{
        entities::Section,
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
    tests::{
        entities::Test,
        requests::{CreateTestRequest, TestListQuery, UpdateTestRequest},
        responses::{TestDetail, TestListResponse},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段必须已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;

    /// 章节管理方法
    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section>;
    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>>;
    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse>;
    async fn update_section(&self, id: i64, update: UpdateSectionRequest)
    -> Result<Option<Section>>;
    // 删除章节，级联删除其下所有资料/测验/题目/选项
    async fn delete_section(&self, id: i64) -> Result<bool>;

    /// 学习资料管理方法
    async fn create_material(&self, material: CreateMaterialRequest) -> Result<Material>;
    // 平铺读取（父链校验、缓存失效解析用）
    async fn get_material_by_id(&self, id: i64) -> Result<Option<Material>>;
    // 嵌套读取：资料 + 测验 + 题目 + 选项
    async fn get_material_detail(&self, id: i64) -> Result<Option<MaterialDetail>>;
    async fn list_materials_with_pagination(
        &self,
        query: MaterialListQuery,
    ) -> Result<MaterialListResponse>;
    async fn update_material(
        &self,
        id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>>;
    async fn delete_material(&self, id: i64) -> Result<bool>;

    /// 测验管理方法
    async fn create_test(&self, test: CreateTestRequest) -> Result<Test>;
    async fn get_test_by_id(&self, id: i64) -> Result<Option<Test>>;
    async fn get_test_detail(&self, id: i64) -> Result<Option<TestDetail>>;
    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse>;
    async fn update_test(&self, id: i64, update: UpdateTestRequest) -> Result<Option<Test>>;
    async fn delete_test(&self, id: i64) -> Result<bool>;

    /// 题目管理方法
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn get_question_detail(&self, id: i64) -> Result<Option<QuestionDetail>>;
    async fn list_questions_with_pagination(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 选项管理方法
    async fn create_choice(&self, choice: CreateChoiceRequest) -> Result<Choice>;
    async fn get_choice_by_id(&self, id: i64) -> Result<Option<Choice>>;
    async fn list_choices_with_pagination(
        &self,
        query: ChoiceListQuery,
    ) -> Result<ChoiceListResponse>;
    async fn update_choice(&self, id: i64, update: UpdateChoiceRequest) -> Result<Option<Choice>>;
    async fn delete_choice(&self, id: i64) -> Result<bool>;

    /// 答题记录管理方法
    async fn create_answer(&self, answer: CreateAnswerRequest) -> Result<UserAnswer>;
    async fn get_answer_by_id(&self, id: i64) -> Result<Option<UserAnswer>>;
    async fn list_answers_with_pagination(
        &self,
        query: AnswerListQuery,
    ) -> Result<AnswerListResponse>;
    async fn update_answer(
        &self,
        id: i64,
        update: UpdateAnswerRequest,
    ) -> Result<Option<UserAnswer>>;
    async fn delete_answer(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 使用显式数据库 URL 创建存储（集成测试用）
pub async fn create_storage_with_url(url: &str) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_with_url(url).await?;
    Ok(Arc::new(storage))
}
