use hh_core::Identity;

/// Result of reading the session record - distinguishes "absent" from "corrupt".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a record exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a raw stored record. Never fails; bad JSON is reported as corruption.
    pub fn from_record(raw: &str) -> Self {
        match serde_json::from_str::<Identity>(raw) {
            Ok(identity) => Self {
                identity: Some(identity),
                corruption_error: None,
            },
            Err(e) => Self {
                identity: None,
                corruption_error: Some(e.to_string()),
            },
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
