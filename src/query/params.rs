//! Query parameter normalization for catalog list queries
//!
//! There is no validation-error path: malformed or out-of-range values
//! degrade to defaults, unknown sort fields fall back to the default
//! sort, and oversized limits are clamped. The HTTP layer hands the raw
//! key/value pairs straight through.

use std::collections::HashMap;

use super::filters::ItemFilters;

/// Default page size when the request does not specify one
pub const DEFAULT_LIMIT: usize = 9;

/// Hard ceiling on page size
pub const MAX_LIMIT: usize = 100;

/// Sortable fields; anything unrecognized falls back to `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Price,
    #[default]
    Title,
}

impl SortField {
    /// Resolves a raw `sort_by` value, substituting the default for
    /// unknown or absent values.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price") => SortField::Price,
            _ => SortField::Title,
        }
    }
}

/// Sort direction; anything other than `desc` is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

/// Pagination defaults, taken from service configuration.
#[derive(Debug, Clone, Copy)]
pub struct PageDefaults {
    /// Page size when the request omits `limit`
    pub limit: usize,
    /// Ceiling applied to requested limits
    pub max_limit: usize,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

/// Fully normalized list query.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub filters: ItemFilters,
    pub sort_by: SortField,
    pub order: SortOrder,
    /// 1-based page index
    pub page: usize,
    pub limit: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            filters: ItemFilters::default(),
            sort_by: SortField::default(),
            order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Normalizes raw query parameters.
    ///
    /// Recognized keys: `category`, `brand`, `designer`, `type`,
    /// `trending_now`, `size` (comma-separated list), `min_price`,
    /// `max_price`, `sort_by`, `order`, `page`, `limit`. Unrecognized
    /// keys are ignored.
    pub fn from_query(raw: &HashMap<String, String>, defaults: PageDefaults) -> Self {
        let filters = ItemFilters {
            category: non_empty(raw.get("category")),
            brand: non_empty(raw.get("brand")),
            designer: non_empty(raw.get("designer")),
            kind: non_empty(raw.get("type")),
            trending_now: parse_bool(raw.get("trending_now")),
            sizes: parse_size_list(raw.get("size")),
            min_price: parse_positive_price(raw.get("min_price")),
            max_price: parse_positive_price(raw.get("max_price")),
        };

        Self {
            filters,
            sort_by: SortField::parse(raw.get("sort_by").map(String::as_str)),
            order: SortOrder::parse(raw.get("order").map(String::as_str)),
            page: parse_page(raw.get("page")),
            limit: parse_limit(raw.get("limit"), defaults),
        }
    }
}

fn non_empty(raw: Option<&String>) -> Option<String> {
    raw.map(|s| s.trim()).filter(|s| !s.is_empty()).map(String::from)
}

fn parse_bool(raw: Option<&String>) -> Option<bool> {
    match raw.map(String::as_str) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Comma-separated size list, e.g. `size=S,M`.
fn parse_size_list(raw: Option<&String>) -> Vec<String> {
    match raw {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    }
}

/// A price bound is active only when it parses and is strictly positive.
fn parse_positive_price(raw: Option<&String>) -> Option<f64> {
    raw.and_then(|v| v.parse::<f64>().ok()).filter(|p| *p > 0.0)
}

fn parse_page(raw: Option<&String>) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

fn parse_limit(raw: Option<&String>, defaults: PageDefaults) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .filter(|l| *l >= 1)
        .unwrap_or(defaults.limit)
        .min(defaults.max_limit)
}
