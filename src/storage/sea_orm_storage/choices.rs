//! 选项存储操作

use super::SeaOrmStorage;
use crate::entity::choices::{ActiveModel, Column, Entity as Choices};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    PaginationInfo,
    choices::{
        entities::Choice,
        requests::{ChoiceListQuery, CreateChoiceRequest, UpdateChoiceRequest},
        responses::ChoiceListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选项
    pub async fn create_choice_impl(&self, req: CreateChoiceRequest) -> Result<Choice> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            question_id: Set(req.question_id),
            text: Set(req.text),
            is_correct: Set(req.is_correct),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建选项失败: {e}")))?;

        Ok(result.into_choice())
    }

    /// 通过 ID 获取选项
    pub async fn get_choice_by_id_impl(&self, id: i64) -> Result<Option<Choice>> {
        let result = Choices::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询选项失败: {e}")))?;

        Ok(result.map(|m| m.into_choice()))
    }

    /// 分页列出选项
    pub async fn list_choices_with_pagination_impl(
        &self,
        query: ChoiceListQuery,
    ) -> Result<ChoiceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Choices::find();

        // 题目过滤
        if let Some(question_id) = query.question_id {
            select = select.filter(Column::QuestionId.eq(question_id));
        }

        // 正确性过滤
        if let Some(is_correct) = query.is_correct {
            select = select.filter(Column::IsCorrect.eq(is_correct));
        }

        // 排序
        select = Self::apply_choice_ordering(select, query.ordering.as_deref());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询选项总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询选项页数失败: {e}")))?;

        let choices = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询选项列表失败: {e}")))?;

        Ok(ChoiceListResponse {
            items: choices.into_iter().map(|m| m.into_choice()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新选项
    pub async fn update_choice_impl(
        &self,
        id: i64,
        update: UpdateChoiceRequest,
    ) -> Result<Option<Choice>> {
        // 先检查选项是否存在
        let existing = self.get_choice_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(question_id) = update.question_id {
            model.question_id = Set(question_id);
        }

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        if let Some(is_correct) = update.is_correct {
            model.is_correct = Set(is_correct);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("更新选项失败: {e}")))?;

        self.get_choice_by_id_impl(id).await
    }

    /// 删除选项
    pub async fn delete_choice_impl(&self, id: i64) -> Result<bool> {
        let result = Choices::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除选项失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    fn apply_choice_ordering(
        select: sea_orm::Select<Choices>,
        ordering: Option<&str>,
    ) -> sea_orm::Select<Choices> {
        if let Some(ordering) = ordering {
            let (field, desc) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let column = match field {
                "id" => Some(Column::Id),
                "text" => Some(Column::Text),
                "question" | "question_id" => Some(Column::QuestionId),
                "is_correct" => Some(Column::IsCorrect),
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
