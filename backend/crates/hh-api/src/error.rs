use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid pagination: page={page}, limit={limit} {location}")]
    InvalidPagination {
        page: u32,
        limit: u32,
        location: ErrorLocation,
    },

    #[error("Request body for {url} must be a JSON object {location}")]
    InvalidBody {
        url: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode response for {url}: {source} {location}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_pagination(page: u32, limit: u32) -> Self {
        Self::InvalidPagination {
            page,
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_body(url: impl Into<String>) -> Self {
        Self::InvalidBody {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
