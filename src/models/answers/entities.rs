use serde::{Deserialize, Serialize};

// 用户答题记录
//
// choice_id 不校验是否属于 question_id 指向的题目，与引用完整性无关的
// 一致性约束由上层自行处理。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnswer {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub choice_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
