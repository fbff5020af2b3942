use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{Result, StorageError};

/// Upper bound on the number of rows a standings query returns.
///
/// An omitted or zero limit means "no limit"; a negative limit is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit(Option<usize>);

impl Limit {
    pub const UNBOUNDED: Limit = Limit(None);

    pub fn at_most(n: usize) -> Self {
        if n == 0 { Self(None) } else { Self(Some(n)) }
    }

    pub fn parse(raw: Option<i64>) -> Result<Self> {
        match raw {
            None | Some(0) => Ok(Self(None)),
            Some(n) if n < 0 => Err(StorageError::validation("limit must not be negative")),
            Some(n) => Ok(Self(Some(usize::try_from(n).unwrap_or(usize::MAX)))),
        }
    }

    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let Some(n) = self.0 {
            items.truncate(n);
        }
        items
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LimitParams {
    /// Maximum number of rows; omit or pass 0 for all rows
    pub limit: Option<i64>,
}

impl LimitParams {
    pub fn limit(&self) -> Result<Limit> {
        Limit::parse(self.limit)
    }
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationParams {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 100 {
            return Err("page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let per_page = i64::from(page_size.max(1));
        let total_pages =
            u32::try_from((total_items + per_page - 1) / per_page).unwrap_or(u32::MAX);
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_and_zero_limit_are_unbounded() {
        assert_eq!(Limit::parse(None).unwrap(), Limit::UNBOUNDED);
        assert_eq!(Limit::parse(Some(0)).unwrap(), Limit::UNBOUNDED);
        assert_eq!(Limit::at_most(0), Limit::UNBOUNDED);
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let err = Limit::parse(Some(-1)).unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_apply_truncates() {
        let limit = Limit::parse(Some(2)).unwrap();
        assert_eq!(limit.apply(vec![1, 2, 3]), vec![1, 2]);
        assert_eq!(Limit::UNBOUNDED.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_defaults_and_bounds() {
        let params = PaginationParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 50);
        assert!(params.validate().is_ok());

        let zero_page = PaginationParams {
            page: 0,
            page_size: 10,
        };
        assert_eq!(zero_page.validate().unwrap_err(), "page must be >= 1");

        let huge = PaginationParams {
            page: 1,
            page_size: 101,
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_offset_skips_earlier_pages() {
        let params = PaginationParams {
            page: 3,
            page_size: 20,
        };
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_total_pages_round_up() {
        assert_eq!(PaginationMeta::new(1, 50, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 50, 50).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 50, 51).total_pages, 2);
    }
}
