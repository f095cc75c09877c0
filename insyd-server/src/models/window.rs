//! Limit/offset window for list queries

use serde::Deserialize;

/// Default `limit` when the caller gives none
const DEFAULT_LIMIT: i64 = 50;

/// Row window applied to a list query.
///
/// Values reach SQLite unchanged: a negative `limit` means no limit and a
/// negative `offset` behaves like 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    limit: i64,
    offset: i64,
}

impl Window {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Get OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Query parameters for a window
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<WindowParams> for Window {
    fn from(params: WindowParams) -> Self {
        Self::new(
            params.limit.unwrap_or(DEFAULT_LIMIT),
            params.offset.unwrap_or(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let w = Window::from(WindowParams::default());
        assert_eq!((w.limit(), w.offset()), (50, 0));
    }

    #[test]
    fn values_pass_through() {
        let w = Window::from(WindowParams {
            limit: Some(-1),
            offset: Some(600),
        });
        assert_eq!((w.limit(), w.offset()), (-1, 600));
        assert_eq!(Window::new(10_000, 0).limit(), 10_000);
    }
}
