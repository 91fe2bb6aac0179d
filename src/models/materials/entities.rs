use serde::{Deserialize, Serialize};

// 学习资料实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    // 唯一 ID
    pub id: i64,
    // 所属章节 ID
    pub section_id: i64,
    // 资料标题
    pub title: String,
    // 资料正文
    pub content: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
