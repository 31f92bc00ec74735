//! Response payloads for the catalog API

use serde::Serialize;

use crate::catalog::Item;
use crate::observability::MetricsSnapshot;
use crate::query::PageSlice;

/// Paginated listing payload: `{total, page, limit, data}` where
/// `total` is the number of pages for the filtered result.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<Item>,
}

impl From<PageSlice> for PageResponse {
    fn from(slice: PageSlice) -> Self {
        Self {
            total: slice.total,
            page: slice.page,
            limit: slice.limit,
            data: slice.data,
        }
    }
}

/// Structured message body used for not-found responses.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health payload with loaded-item count and operational counters.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub items: usize,
    pub metrics: MetricsSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PageSlice;

    #[test]
    fn test_page_response_shape() {
        let slice = PageSlice {
            total: 3,
            page: 2,
            limit: 9,
            data: Vec::new(),
        };

        let json = serde_json::to_value(PageResponse::from(slice)).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["page"], 2);
        assert_eq!(json["limit"], 9);
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_message_body_serialization() {
        let json = serde_json::to_value(MessageBody::new("Product not found")).unwrap();
        assert_eq!(json["message"], "Product not found");
    }
}
