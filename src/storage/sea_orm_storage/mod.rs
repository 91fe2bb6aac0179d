//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod answers;
mod choices;
mod materials;
mod questions;
mod sections;
mod tests;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, StudyHubError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_options(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 使用显式数据库 URL 创建存储实例（集成测试用）
    pub async fn new_with_url(url: &str) -> Result<Self> {
        Self::new_with_options(url, 5, 5).await
    }

    async fn new_with_options(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存库只能用单连接，否则每个连接各自一份空库
        let is_memory = url.contains(":memory:") || url.contains("mode=memory");

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| StudyHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            // 级联删除依赖外键约束
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        let mut pool_opts = SqlitePoolOptions::new()
            .max_connections(if is_memory { 1 } else { pool_size })
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout));

        if !is_memory {
            pool_opts = pool_opts.idle_timeout(Duration::from_secs(300));
        }

        let pool = pool_opts
            .connect_with(opt)
            .await
            .map_err(|e| StudyHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| StudyHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(StudyHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    // 章节模块
    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section> {
        self.create_section_impl(section).await
    }

    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(id).await
    }

    async fn list_sections_with_pagination(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        self.list_sections_with_pagination_impl(query).await
    }

    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        self.update_section_impl(id, update).await
    }

    async fn delete_section(&self, id: i64) -> Result<bool> {
        self.delete_section_impl(id).await
    }

    // 学习资料模块
    async fn create_material(&self, material: CreateMaterialRequest) -> Result<Material> {
        self.create_material_impl(material).await
    }

    async fn get_material_by_id(&self, id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(id).await
    }

    async fn get_material_detail(&self, id: i64) -> Result<Option<MaterialDetail>> {
        self.get_material_detail_impl(id).await
    }

    async fn list_materials_with_pagination(
        &self,
        query: MaterialListQuery,
    ) -> Result<MaterialListResponse> {
        self.list_materials_with_pagination_impl(query).await
    }

    async fn update_material(
        &self,
        id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        self.update_material_impl(id, update).await
    }

    async fn delete_material(&self, id: i64) -> Result<bool> {
        self.delete_material_impl(id).await
    }

    // 测验模块
    async fn create_test(&self, test: CreateTestRequest) -> Result<Test> {
        self.create_test_impl(test).await
    }

    async fn get_test_by_id(&self, id: i64) -> Result<Option<Test>> {
        self.get_test_by_id_impl(id).await
    }

    async fn get_test_detail(&self, id: i64) -> Result<Option<TestDetail>> {
        self.get_test_detail_impl(id).await
    }

    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse> {
        self.list_tests_with_pagination_impl(query).await
    }

    async fn update_test(&self, id: i64, update: UpdateTestRequest) -> Result<Option<Test>> {
        self.update_test_impl(id, update).await
    }

    async fn delete_test(&self, id: i64) -> Result<bool> {
        self.delete_test_impl(id).await
    }

    // 题目模块
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question> {
        self.create_question_impl(question).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn get_question_detail(&self, id: i64) -> Result<Option<QuestionDetail>> {
        self.get_question_detail_impl(id).await
    }

    async fn list_questions_with_pagination(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        self.list_questions_with_pagination_impl(query).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    // 选项模块
    async fn create_choice(&self, choice: CreateChoiceRequest) -> Result<Choice> {
        self.create_choice_impl(choice).await
    }

    async fn get_choice_by_id(&self, id: i64) -> Result<Option<Choice>> {
        self.get_choice_by_id_impl(id).await
    }

    async fn list_choices_with_pagination(
        &self,
        query: ChoiceListQuery,
    ) -> Result<ChoiceListResponse> {
        self.list_choices_with_pagination_impl(query).await
    }

    async fn update_choice(&self, id: i64, update: UpdateChoiceRequest) -> Result<Option<Choice>> {
        self.update_choice_impl(id, update).await
    }

    async fn delete_choice(&self, id: i64) -> Result<bool> {
        self.delete_choice_impl(id).await
    }

    // 答题记录模块
    async fn create_answer(&self, answer: CreateAnswerRequest) -> Result<UserAnswer> {
        self.create_answer_impl(answer).await
    }

    async fn get_answer_by_id(&self, id: i64) -> Result<Option<UserAnswer>> {
        self.get_answer_by_id_impl(id).await
    }

    async fn list_answers_with_pagination(
        &self,
        query: AnswerListQuery,
    ) -> Result<AnswerListResponse> {
        self.list_answers_with_pagination_impl(query).await
    }

    async fn update_answer(
        &self,
        id: i64,
        update: UpdateAnswerRequest,
    ) -> Result<Option<UserAnswer>> {
        self.update_answer_impl(id, update).await
    }

    async fn delete_answer(&self, id: i64) -> Result<bool> {
        self.delete_answer_impl(id).await
    }
}
