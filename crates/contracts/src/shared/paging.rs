//! Общие типы постраничной выборки для API списков.

use serde::{Deserialize, Serialize};

/// Страница результата с метаданными пагинации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,

    #[serde(rename = "totalCount")]
    pub total_count: usize,

    /// Номер страницы (1-based)
    pub page: usize,

    #[serde(rename = "pageSize")]
    pub page_size: usize,

    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl<T> PagedResponse<T> {
    /// Пустая страница (нет данных)
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: 1,
            page_size,
            total_pages: 1,
        }
    }
}

/// Количество страниц для заданного числа записей.
///
/// Всегда возвращает минимум 1: пустой список — это одна пустая страница,
/// а не ноль страниц.
pub fn total_pages_for(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, 50), 1);
        assert_eq!(total_pages_for(1, 50), 1);
        assert_eq!(total_pages_for(50, 50), 1);
        assert_eq!(total_pages_for(51, 50), 2);
        assert_eq!(total_pages_for(100, 50), 2);
        assert_eq!(total_pages_for(101, 50), 3);
    }

    #[test]
    fn test_total_pages_for_zero_page_size() {
        assert_eq!(total_pages_for(100, 0), 1);
    }

    #[test]
    fn test_empty_response() {
        let resp: PagedResponse<String> = PagedResponse::empty(50);
        assert!(resp.items.is_empty());
        assert_eq!(resp.page, 1);
        assert_eq!(resp.total_pages, 1);
    }

    #[test]
    fn test_paged_response_wire_format() {
        let resp = PagedResponse {
            items: vec!["a".to_string()],
            total_count: 11,
            page: 2,
            page_size: 5,
            total_pages: 3,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"totalCount\":11"));
        assert!(json.contains("\"pageSize\":5"));
        assert!(json.contains("\"totalPages\":3"));
    }
}
