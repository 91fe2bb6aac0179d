//! 题目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::choices::{Column as ChoiceColumn, Entity as Choices};
use crate::entity::questions::{ActiveModel, Column, Entity as Questions, Model as QuestionModel};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    PaginationInfo,
    choices::entities::Choice,
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::{QuestionDetail, QuestionListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建题目
    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            test_id: Set(req.test_id),
            text: Set(req.text),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取题目（平铺，不含选项）
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 通过 ID 获取题目的嵌套读取表示
    pub async fn get_question_detail_impl(&self, id: i64) -> Result<Option<QuestionDetail>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询题目失败: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut details = self.attach_choices(vec![model]).await?;
        Ok(details.pop())
    }

    /// 分页列出题目（每条都带选项）
    pub async fn list_questions_with_pagination_impl(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Questions::find();

        // 题干精确过滤
        if let Some(ref text) = query.text {
            select = select.filter(Column::Text.eq(text));
        }

        // 测验过滤
        if let Some(test_id) = query.test_id {
            select = select.filter(Column::TestId.eq(test_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Text.contains(&escaped));
        }

        // 排序
        select = Self::apply_question_ordering(select, query.ordering.as_deref());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询题目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询题目页数失败: {e}")))?;

        let questions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(QuestionListResponse {
            items: self.attach_choices(questions).await?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新题目
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        // 先检查题目是否存在
        let existing = self.get_question_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(test_id) = update.test_id {
            model.test_id = Set(test_id);
        }

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    /// 删除题目（级联删除选项）
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为一批题目批量挂载选项
    pub(crate) async fn attach_choices(
        &self,
        questions: Vec<QuestionModel>,
    ) -> Result<Vec<QuestionDetail>> {
        if questions.is_empty() {
            return Ok(Vec::new());
        }

        let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        let choices = Choices::find()
            .filter(ChoiceColumn::QuestionId.is_in(question_ids))
            .order_by_asc(ChoiceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询选项失败: {e}")))?;

        let mut choices_by_question: HashMap<i64, Vec<Choice>> = HashMap::new();
        for choice in choices {
            choices_by_question
                .entry(choice.question_id)
                .or_default()
                .push(choice.into_choice());
        }

        Ok(questions
            .into_iter()
            .map(|q| {
                let choices = choices_by_question.remove(&q.id).unwrap_or_default();
                QuestionDetail {
                    question: q.into_question(),
                    choices,
                }
            })
            .collect())
    }

    fn apply_question_ordering(
        select: sea_orm::Select<Questions>,
        ordering: Option<&str>,
    ) -> sea_orm::Select<Questions> {
        if let Some(ordering) = ordering {
            let (field, desc) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let column = match field {
                "id" => Some(Column::Id),
                "text" => Some(Column::Text),
                "test" | "test_id" => Some(Column::TestId),
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
