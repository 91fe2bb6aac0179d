//! 章节存储操作

use super::SeaOrmStorage;
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    PaginationInfo,
    sections::{
        entities::Section,
        requests::{CreateSectionRequest, SectionListQuery, UpdateSectionRequest},
        responses::SectionListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建章节
    pub async fn create_section_impl(&self, req: CreateSectionRequest) -> Result<Section> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建章节失败: {e}")))?;

        Ok(result.into_section())
    }

    /// 通过 ID 获取章节
    pub async fn get_section_by_id_impl(&self, id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询章节失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 分页列出章节
    pub async fn list_sections_with_pagination_impl(
        &self,
        query: SectionListQuery,
    ) -> Result<SectionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Sections::find();

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
        select = Self::apply_section_ordering(select, query.ordering.as_deref());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询章节总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询章节页数失败: {e}")))?;

        let sections = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询章节列表失败: {e}")))?;

        Ok(SectionListResponse {
            items: sections.into_iter().map(|m| m.into_section()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新章节信息
    pub async fn update_section_impl(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        // 先检查章节是否存在
        let existing = self.get_section_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("更新章节失败: {e}")))?;

        self.get_section_by_id_impl(id).await
    }

    /// 删除章节（级联删除所有下级内容）
    pub async fn delete_section_impl(&self, id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除章节失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    fn apply_section_ordering(
        select: sea_orm::Select<Sections>,
        ordering: Option<&str>,
    ) -> sea_orm::Select<Sections> {
        use sea_orm::QueryOrder;

        if let Some(ordering) = ordering {
            let (field, desc) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let column = match field {
                "id" => Some(Column::Id),
                "title" => Some(Column::Title),
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
