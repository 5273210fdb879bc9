//! Simulated portal API: every call resolves after an artificial latency
//! with canned data, standing in for a backend that does not exist.

pub mod api_response;
pub mod dashboard_stats;
pub mod error;
pub mod mock_api_service;
pub mod pagination;

pub use api_response::ApiResponse;
pub use dashboard_stats::DashboardStats;
pub use error::{ApiError, Result};
pub use mock_api_service::MockApiService;
pub use pagination::{PageItem, PaginatedResponse, Pagination};


/// Row count every paginated listing pretends to have.
pub const MOCK_TOTAL_ITEMS: u32 = 100;
