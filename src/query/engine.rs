//! Catalog query engine
//!
//! Pipeline per list request: filter chain -> stable sort -> page slice.
//! The engine only reads the store; sorting happens on a freshly derived
//! vector so concurrent requests can never observe each other's order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::catalog::{CatalogStore, Item};

use super::params::{ListParams, SortField, SortOrder};

/// Fields with a distinct-value listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Brand,
    Designer,
    /// Category values are reported lower-cased
    Category,
    Kind,
}

/// One page of a filtered, sorted result.
#[derive(Debug, Clone)]
pub struct PageSlice {
    /// Total number of pages for the filtered result
    pub total: usize,
    /// 1-based page index echoed from the request
    pub page: usize,
    /// Page size echoed from the request
    pub limit: usize,
    pub data: Vec<Item>,
}

/// Read-only query engine over the loaded catalog.
pub struct CatalogEngine {
    store: Arc<CatalogStore>,
}

impl CatalogEngine {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Filter, sort, and slice one page of the catalog.
    pub fn list(&self, params: &ListParams) -> PageSlice {
        let mut candidates: Vec<Item> = self
            .store
            .items()
            .iter()
            .filter(|item| params.filters.matches(item))
            .cloned()
            .collect();

        sort_items(&mut candidates, params.sort_by, params.order);

        paginate(candidates, params.page, params.limit)
    }

    /// First item with the given id, if any.
    pub fn get_by_id(&self, id: u64) -> Option<&Item> {
        self.store.get(id)
    }

    /// All items carrying the promotional flag.
    pub fn featured(&self) -> Vec<Item> {
        self.store
            .items()
            .iter()
            .filter(|item| item.fetured)
            .cloned()
            .collect()
    }

    /// Distinct values of a facet field, de-duplicated in first-seen order.
    pub fn distinct(&self, facet: Facet) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for item in self.store.items() {
            let value = match facet {
                Facet::Brand => item.brand.clone(),
                Facet::Designer => item.designer.clone(),
                Facet::Category => item.category.as_ref().map(|c| c.to_lowercase()),
                Facet::Kind => item.kind.clone(),
            };

            if let Some(value) = value {
                if seen.insert(value.clone()) {
                    values.push(value);
                }
            }
        }

        values
    }

    /// Categories grouped under their type key.
    ///
    /// Within each group, categories keep first-seen order and are
    /// de-duplicated per group, not globally. Category values are
    /// lower-cased like the distinct-category listing.
    pub fn categories_by_type(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for item in self.store.items() {
            let (Some(kind), Some(category)) = (&item.kind, &item.category) else {
                continue;
            };

            let category = category.to_lowercase();
            let bucket = grouped.entry(kind.clone()).or_default();
            if !bucket.contains(&category) {
                bucket.push(category);
            }
        }

        grouped
    }
}

/// Stable sort by the resolved field; equal keys keep their prior order.
fn sort_items(items: &mut [Item], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = match field {
            SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortField::Title => a.title.cmp(&b.title),
        };
        if order.is_descending() {
            cmp.reverse()
        } else {
            cmp
        }
    });
}

/// Slices `[start, end)` clamped to bounds; an out-of-range page yields
/// an empty slice, never an error.
fn paginate(items: Vec<Item>, page: usize, limit: usize) -> PageSlice {
    // a zero limit cannot page; treat it as one
    let limit = limit.max(1);
    let total = items.len().div_ceil(limit);
    let start = page.saturating_sub(1).saturating_mul(limit);

    let data = items.into_iter().skip(start).take(limit).collect();

    PageSlice {
        total,
        page,
        limit,
        data,
    }
}
