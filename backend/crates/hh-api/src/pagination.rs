use crate::{ApiError, MOCK_TOTAL_ITEMS, Result as ApiErrorResult};

use serde::{Deserialize, Serialize};

const MAX_SYNTHETIC_LIMIT: u32 = MOCK_TOTAL_ITEMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Page `page` (1-based) of `limit` rows over `total` rows.
    #[track_caller]
    pub fn new(page: u32, limit: u32, total: u32) -> ApiErrorResult<Self> {
        if page == 0 || limit == 0 {
            return Err(ApiError::invalid_pagination(page, limit));
        }

        let total_pages = total.div_ceil(limit);
        Ok(Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        })
    }

    /// 0-based index of the first row on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Synthetic row of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl PaginatedResponse<PageItem> {
    /// Always `limit` rows, numbered on from the page offset, even past the
    /// advertised total.
    pub fn synthetic(page: u32, limit: u32) -> ApiErrorResult<Self> {
        if limit > MAX_SYNTHETIC_LIMIT {
            return Err(ApiError::invalid_pagination(page, limit));
        }

        let pagination = Pagination::new(page, limit, MOCK_TOTAL_ITEMS)?;
        let offset = pagination.offset();

        let data = (1..=u64::from(limit))
            .map(|n| PageItem {
                id: format!("item-{page}-{n}"),
                name: format!("Item {}", offset + n),
            })
            .collect();

        Ok(Self { data, pagination })
    }
}
