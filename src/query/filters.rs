//! Filter chain for catalog list queries
//!
//! Each recognized option is an independent predicate; an item must
//! satisfy all active predicates (logical AND). Inactive predicates
//! accept every item, so the filters commute and the result set does
//! not depend on application order.

use crate::catalog::Item;

/// Active filter options for a list query.
#[derive(Debug, Clone, Default)]
pub struct ItemFilters {
    /// Exact category, case-insensitive
    pub category: Option<String>,

    /// Exact brand, case-insensitive
    pub brand: Option<String>,

    /// Exact designer, case-insensitive
    pub designer: Option<String>,

    /// Exact item type, case-insensitive
    pub kind: Option<String>,

    /// Exact boolean match on the trending flag
    pub trending_now: Option<bool>,

    /// Any-of membership against the item's sizes
    pub sizes: Vec<String>,

    /// Inclusive lower price bound, active only when strictly positive
    pub min_price: Option<f64>,

    /// Inclusive upper price bound, active only when strictly positive
    pub max_price: Option<f64>,
}

impl ItemFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.brand.is_none()
            && self.designer.is_none()
            && self.kind.is_none()
            && self.trending_now.is_none()
            && self.sizes.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Checks an item against all active predicates.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_category(item)
            && self.matches_brand(item)
            && self.matches_designer(item)
            && self.matches_kind(item)
            && self.matches_trending(item)
            && self.matches_sizes(item)
            && self.matches_price(item)
    }

    fn matches_category(&self, item: &Item) -> bool {
        match &self.category {
            Some(want) => eq_ignore_case(want, item.category.as_deref()),
            None => true,
        }
    }

    fn matches_brand(&self, item: &Item) -> bool {
        match &self.brand {
            Some(want) => eq_ignore_case(want, item.brand.as_deref()),
            None => true,
        }
    }

    fn matches_designer(&self, item: &Item) -> bool {
        match &self.designer {
            Some(want) => eq_ignore_case(want, item.designer.as_deref()),
            None => true,
        }
    }

    fn matches_kind(&self, item: &Item) -> bool {
        match &self.kind {
            Some(want) => eq_ignore_case(want, item.kind.as_deref()),
            None => true,
        }
    }

    fn matches_trending(&self, item: &Item) -> bool {
        match self.trending_now {
            // An absent flag counts as not trending
            Some(want) => item.trending_now.unwrap_or(false) == want,
            None => true,
        }
    }

    fn matches_sizes(&self, item: &Item) -> bool {
        if self.sizes.is_empty() {
            return true;
        }
        self.sizes
            .iter()
            .any(|want| item.sizes.iter().any(|have| have == want))
    }

    fn matches_price(&self, item: &Item) -> bool {
        if let Some(min) = self.min_price {
            if item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if item.price > max {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive equality against an optional field; an item without
/// the field never matches an active filter.
fn eq_ignore_case(want: &str, have: Option<&str>) -> bool {
    match have {
        Some(have) => have.to_lowercase() == want.to_lowercase(),
        None => false,
    }
}
