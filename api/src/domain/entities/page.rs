//! Pagination metadata
//!
//! Derived per request from the caller's page/limit and the total matching
//! row count; never stored.

use serde::Serialize;

/// One page of a result set, described for the caller
///
/// Construction clamps the inputs so the derived offset is never negative and
/// the limit is never zero: a non-positive `per_page` falls back to the
/// configured default, and `page` is pulled down to the last page and up to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total_count: i64,
    pub page: i64,
    pub per_page: i64,
    pub page_count: i64,
}

impl PageMeta {
    pub fn new(page: i64, per_page: i64, total: i64, default_per_page: i64) -> Self {
        let per_page = if per_page <= 0 {
            default_per_page
        } else {
            per_page
        };

        let page_count = if total > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        let mut page = page;
        if page > page_count {
            page = page_count;
        }
        if page < 1 {
            page = 1;
        }

        Self {
            total_count: total,
            page,
            per_page,
            page_count,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let meta = PageMeta::new(3, 10, 25, 10);
        assert_eq!(meta.offset(), 20);
        assert_eq!(meta.limit(), 10);
        assert_eq!(meta.page_count, 3);
    }

    #[test]
    fn non_positive_limit_falls_back_to_default() {
        let meta = PageMeta::new(1, 0, 25, 10);
        assert_eq!(meta.limit(), 10);

        let meta = PageMeta::new(1, -5, 25, 10);
        assert_eq!(meta.limit(), 10);
    }

    #[test]
    fn explicit_limit_wins_over_default() {
        let meta = PageMeta::new(1, 5, 25, 10);
        assert_eq!(meta.limit(), 5);
        assert_eq!(meta.page_count, 5);
    }

    #[test]
    fn zero_total_yields_first_page_and_zero_offset() {
        let meta = PageMeta::new(7, 10, 0, 10);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.offset(), 0);
        assert_eq!(meta.page_count, 0);
        assert_eq!(meta.total_count, 0);
    }

    #[test]
    fn page_is_clamped_to_last_page() {
        let meta = PageMeta::new(99, 10, 25, 10);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.offset(), 20);
    }

    #[test]
    fn page_zero_defaults_to_first_page() {
        let meta = PageMeta::new(0, 10, 25, 10);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.offset(), 0);
    }

    #[test]
    fn partial_last_page_is_counted() {
        let meta = PageMeta::new(1, 10, 21, 10);
        assert_eq!(meta.page_count, 3);
    }
}
