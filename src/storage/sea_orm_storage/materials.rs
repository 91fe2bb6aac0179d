//! 学习资料存储操作
//!
//! 读取表示是全深度嵌套的（资料 → 测验 → 题目 → 选项），
//! 组装时每个层级只发一条 `IN` 查询，然后在内存中按父 ID 分组，
//! 不做逐行子查询。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::materials::{ActiveModel, Column, Entity as Materials, Model as MaterialModel};
use crate::entity::tests::{Column as TestColumn, Entity as Tests};
use crate::errors::{Result, StudyHubError};
use crate::models::{
    PaginationInfo,
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, MaterialListQuery, UpdateMaterialRequest},
        responses::{MaterialDetail, MaterialListResponse},
    },
    tests::responses::TestDetail,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学习资料
    pub async fn create_material_impl(&self, req: CreateMaterialRequest) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_id: Set(req.section_id),
            title: Set(req.title),
            content: Set(req.content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("创建学习资料失败: {e}")))?;

        Ok(result.into_material())
    }

    /// 通过 ID 获取学习资料（平铺，不含子层级）
    pub async fn get_material_by_id_impl(&self, id: i64) -> Result<Option<Material>> {
        let result = Materials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询学习资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material()))
    }

    /// 通过 ID 获取学习资料的嵌套读取表示
    pub async fn get_material_detail_impl(&self, id: i64) -> Result<Option<MaterialDetail>> {
        let result = Materials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询学习资料失败: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut details = self.attach_tests(vec![model]).await?;
        Ok(details.pop())
    }

    /// 分页列出学习资料（每条都带完整嵌套子层级）
    pub async fn list_materials_with_pagination_impl(
        &self,
        query: MaterialListQuery,
    ) -> Result<MaterialListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Materials::find();

        // 标题精确过滤
        if let Some(ref title) = query.title {
            select = select.filter(Column::Title.eq(title));
        }

        // 章节过滤
        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = Self::apply_material_ordering(select, query.ordering.as_deref());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            StudyHubError::database_operation(format!("查询学习资料总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            StudyHubError::database_operation(format!("查询学习资料页数失败: {e}"))
        })?;

        let materials = paginator.fetch_page(page - 1).await.map_err(|e| {
            StudyHubError::database_operation(format!("查询学习资料列表失败: {e}"))
        })?;

        Ok(MaterialListResponse {
            items: self.attach_tests(materials).await?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学习资料
    pub async fn update_material_impl(
        &self,
        id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        // 先检查资料是否存在
        let existing = self.get_material_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(section_id) = update.section_id {
            model.section_id = Set(section_id);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("更新学习资料失败: {e}")))?;

        self.get_material_by_id_impl(id).await
    }

    /// 删除学习资料（级联删除测验/题目/选项）
    pub async fn delete_material_impl(&self, id: i64) -> Result<bool> {
        let result = Materials::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("删除学习资料失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为一批资料批量挂载嵌套的测验树
    pub(crate) async fn attach_tests(
        &self,
        materials: Vec<MaterialModel>,
    ) -> Result<Vec<MaterialDetail>> {
        if materials.is_empty() {
            return Ok(Vec::new());
        }

        let material_ids: Vec<i64> = materials.iter().map(|m| m.id).collect();
        let tests = Tests::find()
            .filter(TestColumn::MaterialId.is_in(material_ids))
            .order_by_asc(TestColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| StudyHubError::database_operation(format!("查询测验失败: {e}")))?;

        let test_details = self.attach_questions(tests).await?;

        let mut tests_by_material: HashMap<i64, Vec<TestDetail>> = HashMap::new();
        for detail in test_details {
            tests_by_material
                .entry(detail.test.material_id)
                .or_default()
                .push(detail);
        }

        Ok(materials
            .into_iter()
            .map(|m| {
                let tests = tests_by_material.remove(&m.id).unwrap_or_default();
                MaterialDetail {
                    material: m.into_material(),
                    tests,
                }
            })
            .collect())
    }

    fn apply_material_ordering(
        select: sea_orm::Select<Materials>,
        ordering: Option<&str>,
    ) -> sea_orm::Select<Materials> {
        if let Some(ordering) = ordering {
            let (field, desc) = match ordering.strip_prefix('-') {
                Some(field) => (field, true),
                None => (ordering, false),
            };
            let column = match field {
                "id" => Some(Column::Id),
                "title" => Some(Column::Title),
                "section" | "section_id" => Some(Column::SectionId),
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
