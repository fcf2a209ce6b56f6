//! Request/query types (Deserialize) and fixed API responses.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> i64 {
    20
}

const MAX_PAGE_SIZE: i64 = 1000;

/// Zero-based pagination parameters with Spring-style defaults.
///
/// Deserialized as signed integers so out-of-range values surface as
/// constraint violations instead of opaque parse rejections.
#[derive(Debug, Deserialize)]
pub struct PagedQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

impl PagedQuery {
    /// Validate parameter constraints; violations are reported together as
    /// `"<param>: <reason>"` strings.
    pub fn validated(&self) -> Result<(u32, u32), Vec<String>> {
        let mut violations = Vec::new();
        if self.page < 0 {
            violations.push("page: must be greater than or equal to 0".to_owned());
        } else if self.page > i64::from(u32::MAX) {
            violations.push(format!("page: must be less than or equal to {}", u32::MAX));
        }
        if self.size < 1 {
            violations.push("size: must be greater than or equal to 1".to_owned());
        } else if self.size > MAX_PAGE_SIZE {
            violations.push(format!("size: must be less than or equal to {MAX_PAGE_SIZE}"));
        }
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok((
            u32::try_from(self.page).unwrap_or(u32::MAX),
            u32::try_from(self.size).unwrap_or(u32::MAX),
        ))
    }
}

/// Customer name search parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
