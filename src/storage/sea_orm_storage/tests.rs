//! 测验存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::entity::tests::{ActiveModel, Column, Entity as Tests, Model as TestModel};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    PaginationInfo,
    questions::responses::QuestionDetail,
    tests::{
        entities::Test,
        requests::{CreateTestRequest, TestListQuery, UpdateTestRequest},
        responses::{TestDetail, TestListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_test_impl(&self, req: CreateTestRequest) -> Result<Test> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            material_id: Set(req.material_id),
            title: Set(req.title),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_test())
    }

    /// 通过 ID 获取测验（平铺，不含子层级）
    pub async fn get_test_by_id_impl(&self, id: i64) -> Result<Option<Test>> {
        let result = Tests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_test()))
    }

    /// 通过 ID 获取测验的嵌套读取表示
    pub async fn get_test_detail_impl(&self, id: i64) -> Result<Option<TestDetail>> {
        let result = Tests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询测验失败: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut details = self.attach_questions(vec![model]).await?;
        Ok(details.pop())
    }

    /// 分页列出测验（每条都带完整嵌套子层级）
    pub async fn list_tests_with_pagination_impl(
        &self,
        query: TestListQuery,
    ) -> Result<TestListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Tests::find();

        // 资料过滤
        if let Some(material_id) = query.material_id {
            select = select.filter(Column::MaterialId.eq(material_id));
        }

        // 标题精确过滤
        if let Some(ref title) = query.title {
            select = select.filter(Column::Title.eq(title));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = Self::apply_test_ordering(select, query.ordering.as_deref());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询测验总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询测验页数失败: {e}")))?;

        let tests = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(TestListResponse {
            items: self.attach_questions(tests).await?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新测验
    pub async fn update_test_impl(
        &self,
        id: i64,
        update: UpdateTestRequest,
    ) -> Result<Option<Test>> {
        // 先检查测验是否存在
        let existing = self.get_test_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(material_id) = update.material_id {
            model.material_id = Set(material_id);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("更新测验失败: {e}")))?;

        self.get_test_by_id_impl(id).await
    }

    /// 删除测验（级联删除题目/选项）
    pub async fn delete_test_impl(&self, id: i64) -> Result<bool> {
        let result = Tests::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为一批测验批量挂载嵌套的题目（含选项）
    pub(crate) async fn attach_questions(&self, tests: Vec<TestModel>) -> Result<Vec<TestDetail>> {
        if tests.is_empty() {
            return Ok(Vec::new());
        }

        let test_ids: Vec<i64> = tests.iter().map(|t| t.id).collect();
        let questions = Questions::find()
            .filter(QuestionColumn::TestId.is_in(test_ids))
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询题目失败: {e}")))?;

        let question_details = self.attach_choices(questions).await?;

        let mut questions_by_test: HashMap<i64, Vec<QuestionDetail>> = HashMap::new();
        for detail in question_details {
            questions_by_test
                .entry(detail.question.test_id)
                .or_default()
                .push(detail);
        }

        Ok(tests
            .into_iter()
            .map(|t| {
                let questions = questions_by_test.remove(&t.id).unwrap_or_default();
                TestDetail {
                    test: t.into_test(),
                    questions,
                }
            })
            .collect())
    }

    fn apply_test_ordering(
        select: sea_orm::Select<Tests>,
        ordering: Option<&str>,
    ) -> sea_orm::Select<Tests> {
        if let Some(ordering) = ordering {
            let (field, desc) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let column = match field {
                "id" => Some(Column::Id),
                "title" => Some(Column::Title),
                "material" | "material_id" => Some(Column::MaterialId),
                "created_at" => Some(Column::CreatedAt),
                "updated_at" => Some(Column::UpdatedAt),
                _ => None,
            };
            if let Some(column) = column {
                return if desc {
                    select.order_by_desc(column)
                } else {
                    select.order_by_asc(column)
                };
            }
        }

        select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
    }
}
