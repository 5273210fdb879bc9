use crate::{
    ApiError, ApiResponse, DashboardStats, PageItem, PaginatedResponse, Result as ApiErrorResult,
};

use hh_config::ApiConfig;

use std::time::Duration;

use chrono::Utc;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

const STATS_SEGMENT: &str = "/stats";

/// Canned responses behind an artificial network delay.
#[derive(Debug, Clone)]
pub struct MockApiService {
    latency: Duration,
    default_page_size: u32,
}

impl MockApiService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            latency: config.latency(),
            default_page_size: config.default_page_size,
        }
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// URLs containing `/stats` answer with dashboard figures; anything else
    /// with an empty list.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiErrorResult<ApiResponse<T>> {
        self.simulate_latency("GET", url).await;

        let response = if url.contains(STATS_SEGMENT) {
            ApiResponse::ok(json!(DashboardStats::headline()))
        } else {
            ApiResponse::ok(json!([])).with_message("Data fetched successfully")
        };

        decode(url, response)
    }

    /// Echoes `body` back with a generated `id`.
    pub async fn post<B, T>(&self, url: &str, body: &B) -> ApiErrorResult<ApiResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.simulate_latency("POST", url).await;

        let mut created = match serde_json::to_value(body) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(ApiError::invalid_body(url)),
            Err(e) => return Err(ApiError::decode(url, e)),
        };
        created
            .entry("id")
            .or_insert_with(|| Value::String(Utc::now().timestamp_millis().to_string()));

        decode(
            url,
            ApiResponse::ok(Value::Object(created)).with_message("Created successfully"),
        )
    }

    pub async fn put<B, T>(&self, url: &str, body: &B) -> ApiErrorResult<ApiResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.simulate_latency("PUT", url).await;

        let echoed = serde_json::to_value(body).map_err(|e| ApiError::decode(url, e))?;
        decode(url, ApiResponse::ok(echoed).with_message("Updated successfully"))
    }

    pub async fn delete(&self, url: &str) -> ApiErrorResult<ApiResponse<()>> {
        self.simulate_latency("DELETE", url).await;
        Ok(ApiResponse::ok(()).with_message("Deleted successfully"))
    }

    /// One page of synthetic rows. `limit` of `None` uses the configured page size.
    pub async fn paginate(
        &self,
        page: u32,
        limit: Option<u32>,
    ) -> ApiErrorResult<PaginatedResponse<PageItem>> {
        let limit = limit.unwrap_or(self.default_page_size);

        // Bad paging arguments fail before any simulated latency
        let response = PaginatedResponse::synthetic(page, limit)?;

        self.simulate_latency("GET", &format!("?page={page}&limit={limit}"))
            .await;
        Ok(response)
    }

    async fn simulate_latency(&self, method: &str, url: &str) {
        debug!("{method} {url} (simulated {}ms)", self.latency.as_millis());
        tokio::time::sleep(self.latency).await;
    }
}

fn decode<T: DeserializeOwned>(
    url: &str,
    response: ApiResponse<Value>,
) -> ApiErrorResult<ApiResponse<T>> {
    let data = serde_json::from_value(response.data).map_err(|e| ApiError::decode(url, e))?;
    Ok(ApiResponse {
        success: response.success,
        data,
        message: response.message,
        errors: response.errors,
    })
}
