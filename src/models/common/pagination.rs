use serde::{Deserialize, Serialize};
use ts_rs::TS;

const MAX_PAGE_SIZE: i64 = 100;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

impl PaginationQuery {
    /// 返回合法化后的 (page, size)，越界取边界值
    pub fn normalize(&self) -> (i64, i64) {
        let page = self.page.max(1);
        let size = self.size.clamp(1, MAX_PAGE_SIZE);
        (page, size)
    }

    pub fn offset(&self) -> i64 {
        let (page, size) = self.normalize();
        (page - 1) * size
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + page_size - 1) / page_size
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T: TS> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total: i64) -> Self {
        Self {
            items,
            pagination: PaginationInfo::new(page, page_size, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.size, 10);
    }

    #[test]
    fn test_deserialize_explicit() {
        let q: PaginationQuery = serde_json::from_str(r#"{"page": 3, "size": 25}"#).unwrap();
        assert_eq!((q.page, q.size), (3, 25));
    }

    #[test]
    fn test_normalize_bounds() {
        let q = PaginationQuery { page: 0, size: 999 };
        assert_eq!(q.normalize(), (1, MAX_PAGE_SIZE));
        assert_eq!(q.offset(), 0);

        let q = PaginationQuery { page: 4, size: 20 };
        assert_eq!(q.offset(), 60);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(PaginationInfo::new(1, 10, 0).total_pages, 0);
        assert_eq!(PaginationInfo::new(1, 10, 10).total_pages, 1);
        assert_eq!(PaginationInfo::new(1, 10, 11).total_pages, 2);
    }
}
