//! # Presentation Mapping
//!
//! Shapes stored products into the view-model rows the listing client needs.
//!
//! ## Why a Row Type?
//! - Decouples the stored record from the listing contract
//! - Formats the creation date once, server-side, for every row
//! - Handles serde rename to camelCase for JS consumption
//!
//! Raw store records never reach the listing response; every row of a page
//! goes through this mapping.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Display format for the creation date, e.g. "05 Jan 2024".
pub const CREATED_AT_DISPLAY_FORMAT: &str = "%d %b %Y";

/// One row of the product listing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price text exactly as stored.
    pub price: String,
    /// Relative blob path, or null when no image was uploaded.
    pub featured_image: Option<String>,
    pub featured_image_original_name: Option<String>,
    /// Creation date pre-formatted for display ("05 Jan 2024").
    pub created_at: String,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        ProductRow {
            created_at: product
                .created_at
                .format(CREATED_AT_DISPLAY_FORMAT)
                .to_string(),
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            featured_image: product.featured_image,
            featured_image_original_name: product.featured_image_original_name,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
