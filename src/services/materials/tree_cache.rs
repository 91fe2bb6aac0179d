//! 学习资料嵌套树缓存
//!
//! 嵌套读取（资料 → 测验 → 题目 → 选项）是最贵的读路径，
//! 组装结果按资料 ID 缓存。资料本身或任何下级内容的写操作
//! 都必须使对应资料的缓存条目失效；章节级联删除直接清空。

use std::sync::Arc;

use crate::cache::{CacheResult, ObjectCache};
use crate::models::materials::responses::MaterialDetail;

fn detail_key(material_id: i64) -> String {
    format!("material:detail:{material_id}")
}

/// 查缓存，命中返回已组装好的 JSON 表示
pub(crate) async fn lookup(
    cache: &Arc<dyn ObjectCache>,
    material_id: i64,
) -> Option<serde_json::Value> {
    match cache.get_raw(&detail_key(material_id)).await {
        CacheResult::Found(raw) => serde_json::from_str(&raw).ok(),
        _ => None,
    }
}

/// 写入缓存，序列化失败时跳过（只影响缓存命中率）
pub(crate) async fn store(cache: &Arc<dyn ObjectCache>, detail: &MaterialDetail) {
    if let Ok(raw) = serde_json::to_string(detail) {
        cache.insert_raw(detail_key(detail.material.id), raw, 0).await;
    }
}

/// 使单个资料的缓存条目失效
pub(crate) async fn evict(cache: &Arc<dyn ObjectCache>, material_id: i64) {
    cache.remove(&detail_key(material_id)).await;
}

/// 清空全部缓存（章节级联删除等影响面不确定的场景）
pub(crate) async fn evict_all(cache: &Arc<dyn ObjectCache>) {
    cache.invalidate_all().await;
}
