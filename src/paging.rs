// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page-number/page-size validation for list operations.
//!
//! Strava pages are 1-indexed and capped at 200 items. A caller either asks
//! for one explicit page ([`Paging`]) or passes `None`, which means "every
//! page": the executor walks pages of the default size from page 1 until a
//! short page comes back and concatenates them in page order.

use crate::error::{ApiError, Result};

/// Page size Strava uses when `per_page` is not sent.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Largest `per_page` Strava honours.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Most pages an all-pages listing will request before giving up.
pub const MAX_PAGES: u32 = 1000;

/// Caller-supplied paging request. Either field may be left unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

impl Paging {
    /// Request one page of `page_size` items.
    pub fn new(page: i32, page_size: i32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Request page `page` at the default page size.
    pub fn page(page: i32) -> Self {
        Self {
            page: Some(page),
            page_size: None,
        }
    }

    /// Request the first page with `page_size` items.
    pub fn page_size(page_size: i32) -> Self {
        Self {
            page: None,
            page_size: Some(page_size),
        }
    }
}

/// Concrete paging parameters ready to be sent to Strava.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub per_page: u32,
}

impl PageParams {
    /// Zero-based index of the first item on this page; page 0 is treated
    /// as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

/// What a list operation should fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePlan {
    /// Exactly one page.
    Single(PageParams),
    /// Every page of `per_page` items, starting at page 1.
    All { per_page: u32 },
}

/// Provider paging limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// Cap on pages fetched by [`PagePlan::All`]
    pub max_pages: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_pages: MAX_PAGES,
        }
    }
}

impl PageLimits {
    /// Build limits, keeping the default size within `[1, max]`.
    pub fn new(default_page_size: u32, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            default_page_size: default_page_size.clamp(1, max_page_size),
            max_page_size,
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Validate and normalize a paging request.
    ///
    /// `None` yields [`PagePlan::All`] at the default page size. Any supplied
    /// value `<= 0` is a usage error; oversized pages are clamped to the max.
    pub fn normalize(&self, paging: Option<Paging>) -> Result<PagePlan> {
        let Some(paging) = paging else {
            return Ok(PagePlan::All {
                per_page: self.default_page_size,
            });
        };

        let page = match paging.page {
            Some(page) => positive("page", page)?,
            None => 1,
        };
        let per_page = match paging.page_size {
            Some(size) => positive("page size", size)?.min(self.max_page_size),
            None => self.default_page_size,
        };

        Ok(PagePlan::Single(PageParams { page, per_page }))
    }
}

fn positive(name: &str, value: i32) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ApiError::Usage(format!("{} must be greater than 0, got {}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_no_paging_means_all_pages_at_default_size() {
        let plan = PageLimits::default().normalize(None).unwrap();
        assert_eq!(plan, PagePlan::All { per_page: 30 });
    }

    #[test]
    fn test_explicit_page_is_single() {
        let plan = PageLimits::default()
            .normalize(Some(Paging::new(3, 2)))
            .unwrap();
        assert_eq!(plan, PagePlan::Single(PageParams { page: 3, per_page: 2 }));
    }

    #[test]
    fn test_unset_fields_fall_back_to_defaults() {
        let limits = PageLimits::default();
        assert_eq!(
            limits.normalize(Some(Paging::page(4))).unwrap(),
            PagePlan::Single(PageParams { page: 4, per_page: 30 })
        );
        assert_eq!(
            limits.normalize(Some(Paging::page_size(10))).unwrap(),
            PagePlan::Single(PageParams { page: 1, per_page: 10 })
        );
        assert_eq!(
            limits.normalize(Some(Paging::default())).unwrap(),
            PagePlan::Single(PageParams { page: 1, per_page: 30 })
        );
    }

    #[test]
    fn test_non_positive_values_are_usage_errors() {
        let limits = PageLimits::default();
        for (page, size) in [(-1, -1), (0, 10), (1, 0), (-5, 10), (1, -200), (i32::MIN, 1)] {
            let err = limits.normalize(Some(Paging::new(page, size))).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Usage, "page={page} size={size}");
        }
    }

    #[test]
    fn test_oversized_page_is_clamped() {
        let plan = PageLimits::default()
            .normalize(Some(Paging::new(2, 201)))
            .unwrap();
        assert_eq!(plan, PagePlan::Single(PageParams { page: 2, per_page: 200 }));
    }

    #[test]
    fn test_limits_keep_default_within_max() {
        let limits = PageLimits::new(500, 100);
        assert_eq!(limits.default_page_size, 100);
        let limits = PageLimits::new(0, 0);
        assert_eq!(limits.default_page_size, 1);
        assert_eq!(limits.max_page_size, 1);
        assert_eq!(limits.max_pages, MAX_PAGES);
        assert_eq!(limits.with_max_pages(0).max_pages, 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageParams { page: 1, per_page: 50 }.offset(), 0);
        assert_eq!(PageParams { page: 3, per_page: 2 }.offset(), 4);
        assert_eq!(PageParams { page: 0, per_page: 2 }.offset(), 0);
    }
}
