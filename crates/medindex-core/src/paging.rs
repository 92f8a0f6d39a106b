//! Pagination contract shared by every list endpoint.
//!
//! Page and limit arrive as untrusted query strings and are coerced, never
//! rejected: anything unparseable falls back to the defaults. The limit rule
//! is asymmetric: a requested limit above [`MAX_LIMIT`] resets to
//! [`DEFAULT_LIMIT`], not to the maximum. Clients depend on that observable
//! behavior. Pages below 1 clamp to 1 so the skip offset can never go
//! negative.

/// First page served when the parameter is missing or unusable.
pub const DEFAULT_PAGE: u32 = 1;
/// Rows per page when the parameter is missing or unusable.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest honored page size. Requests above this reset to [`DEFAULT_LIMIT`].
pub const MAX_LIMIT: u32 = 20;

/// Resolved pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number, always ≥ 1.
    pub page: u32,
    /// Page size, always in `[1, MAX_LIMIT]`.
    pub limit: u32,
}

/// Offset/count window handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Rows to skip before the first returned row.
    pub skip: u64,
    /// Maximum rows to return.
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Resolves raw query-string values into usable parameters.
    ///
    /// Missing, non-numeric, and non-positive values fall back to defaults;
    /// limits above [`MAX_LIMIT`] reset to [`DEFAULT_LIMIT`].
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|parsed| *parsed >= 1)
            .map_or(DEFAULT_PAGE, |parsed| parsed.min(u32::MAX as i64) as u32);

        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|parsed| (1..=MAX_LIMIT as i64).contains(parsed))
            .map_or(DEFAULT_LIMIT, |parsed| parsed as u32);

        Self { page, limit }
    }

    /// Number of rows preceding this page.
    pub fn skip(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// The offset/count window for the store.
    pub fn window(&self) -> PageWindow {
        PageWindow {
            skip: self.skip(),
            limit: self.limit,
        }
    }

    /// Total number of pages needed for `total_count` rows.
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.limit as u64)
    }
}
