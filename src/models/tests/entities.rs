use serde::{Deserialize, Serialize};

// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    // 所属学习资料 ID
    pub material_id: i64,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
