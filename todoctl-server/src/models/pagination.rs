//! Offset/limit pagination for the list endpoint

use serde::Deserialize;

/// Rows skipped when `skip` is not given
const DEFAULT_SKIP: i64 = 0;

/// Rows returned when `limit` is not given
const DEFAULT_LIMIT: i64 = 10;

/// Offset/limit window over the to-do table.
///
/// Values are not clamped. SQLite treats a negative LIMIT as unbounded
/// and a negative OFFSET as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip
    pub skip: i64,
    /// Maximum rows to return
    pub limit: i64,
}

impl Pagination {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination (`?skip=&limit=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.skip.unwrap_or(DEFAULT_SKIP),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
