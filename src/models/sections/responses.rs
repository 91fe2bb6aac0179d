use super::entities::Section;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 章节响应
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: Section,
}

// 章节列表响应
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    pub items: Vec<Section>,
    pub pagination: PaginationInfo,
}
