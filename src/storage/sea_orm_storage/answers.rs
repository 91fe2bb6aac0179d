//! 答题记录存储操作

use super::SeaOrmStorage;
use crate::entity::user_answers::{ActiveModel, Column, Entity as UserAnswers};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    PaginationInfo,
    answers::{
        entities::UserAnswer,
        requests::{AnswerListQuery, CreateAnswerRequest, UpdateAnswerRequest},
        responses::AnswerListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建答题记录
    pub async fn create_answer_impl(&self, req: CreateAnswerRequest) -> Result<UserAnswer> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            question_id: Set(req.question_id),
            choice_id: Set(req.choice_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建答题记录失败: {e}")))?;

        Ok(result.into_user_answer())
    }

    /// 通过 ID 获取答题记录
    pub async fn get_answer_by_id_impl(&self, id: i64) -> Result<Option<UserAnswer>> {
        let result = UserAnswers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(result.map(|m| m.into_user_answer()))
    }

    /// 分页列出答题记录
    pub async fn list_answers_with_pagination_impl(
        &self,
        query: AnswerListQuery,
    ) -> Result<AnswerListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = UserAnswers::find();

        // 用户过滤
        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        // 题目过滤
        if let Some(question_id) = query.question_id {
            select = select.filter(Column::QuestionId.eq(question_id));
        }

        // 选项过滤
        if let Some(choice_id) = query.choice_id {
            select = select.filter(Column::ChoiceId.eq(choice_id));
        }

        // 排序
        select = Self::apply_answer_ordering(select, query.ordering.as_deref());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            StudyHubError::database_operation(format!("查询答题记录总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            StudyHubError::database_operation(format!("查询答题记录页数失败: {e}"))
        })?;

        let answers = paginator.fetch_page(page - 1).await.map_err(|e| {
            StudyHubError::database_operation(format!("查询答题记录列表失败: {e}"))
        })?;

        Ok(AnswerListResponse {
            items: answers.into_iter().map(|m| m.into_user_answer()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新答题记录
    pub async fn update_answer_impl(
        &self,
        id: i64,
        update: UpdateAnswerRequest,
    ) -> Result<Option<UserAnswer>> {
        // 先检查记录是否存在
        let existing = self.get_answer_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(user_id) = update.user_id {
            model.user_id = Set(user_id);
        }

        if let Some(question_id) = update.question_id {
            model.question_id = Set(question_id);
        }

        if let Some(choice_id) = update.choice_id {
            model.choice_id = Set(choice_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("更新答题记录失败: {e}")))?;

        self.get_answer_by_id_impl(id).await
    }

    /// 删除答题记录
    pub async fn delete_answer_impl(&self, id: i64) -> Result<bool> {
        let result = UserAnswers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除答题记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    fn apply_answer_ordering(
        select: sea_orm::Select<UserAnswers>,
        ordering: Option<&str>,
    ) -> sea_orm::Select<UserAnswers> {
        if let Some(ordering) = ordering {
            let (field, desc) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let column = match field {
                "id" => Some(Column::Id),
                "user" | "user_id" => Some(Column::UserId),
                "question" | "question_id" => Some(Column::QuestionId),
                "choice" | "choice_id" => Some(Column::ChoiceId),
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
