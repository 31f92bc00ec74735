//! Canonical item record schema
//!
//! The source data drifted across iterations (`size` vs `sizes`, ad-hoc
//! promotional flags), so the model pins one canonical shape:
//! - `sizes` is the sequence field name
//! - `fetured` keeps its literal spelling, it is the field name in the data
//! - unknown fields are preserved verbatim and echoed back in responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog entry: identifier, descriptive attributes, and price.
///
/// `id`, `title` and `price` are required; everything else is optional
/// because the source data is permissive. Fields the schema does not
/// name are carried in `extra` so lookups return the record as loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, immutable
    pub id: u64,

    /// Display name, default sort key
    pub title: String,

    /// Price, used for sort and range filtering
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,

    /// Item type ("type" in the data; `type` is reserved in Rust)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Available sizes, matched by any-of membership filters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_now: Option<bool>,

    /// Promotional flag; the misspelling is the literal field name in the data
    #[serde(default)]
    pub fetured: bool,

    /// Fields outside the canonical schema, preserved as loaded
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
