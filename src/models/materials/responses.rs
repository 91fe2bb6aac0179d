use super::entities::Material;
use crate::models::common::PaginationInfo;
use crate::models::tests::responses::TestDetail;
use serde::Serialize;

// 学习资料的完整读取表示：资料本身加上内嵌的测验树。
// 读取（单条与列表）都返回这个形状，子层级一路嵌套到选项。
#[derive(Debug, Serialize)]
pub struct MaterialDetail {
    #[serde(flatten)]
    pub material: Material,
    pub tests: Vec<TestDetail>,
}

// 学习资料响应
#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    pub material: MaterialDetail,
}

// 学习资料列表响应
#[derive(Debug, Serialize)]
pub struct MaterialListResponse {
    pub items: Vec<MaterialDetail>,
    pub pagination: PaginationInfo,
}
