use serde::{Deserialize, Serialize};

// 选项实体
//
// `is_correct` 只是普通布尔值，同一题目允许存在多个正确选项。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub id: i64,
    // 所属题目 ID
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
