//! Skip/limit window for list endpoints.

use serde::{Deserialize, Serialize};

/// Offset-based list window, as accepted on `?skip=&limit=` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWindow {
    /// Number of rows to skip.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of rows to return, capped at [`ListWindow::MAX_LIMIT`].
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    ListWindow::MAX_LIMIT
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl ListWindow {
    /// Largest page a caller may request.
    pub const MAX_LIMIT: u64 = 100;

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.skip
    }

    /// Returns the limit for database queries, clamped to `MAX_LIMIT`.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit.min(Self::MAX_LIMIT)
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
