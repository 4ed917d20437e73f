//! # Domain Types
//!
//! Core domain types for the catalog admin.
//!
//! ## The Entity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Product                                      │
//! │                                                                         │
//! │  id (UUID)                      ── server-assigned, immutable          │
//! │  name / description             ── required text                       │
//! │  price                          ── free-form decimal text              │
//! │  featured_image                 ── relative blob path, nullable        │
//! │  featured_image_original_name   ── upload filename, nullable           │
//! │  created_at / updated_at        ── server-assigned timestamps          │
//! │                                                                         │
//! │  Invariant: the two image fields are set together or not at all.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Price Is Text
//! The admin accepts whatever decimal string the operator types ("9.99",
//! "1200") and echoes it back verbatim; search also matches against this
//! text. Validation only guarantees the string parses as a number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the listing and on the form.
    pub name: String,

    /// Long-form description.
    pub description: String,

    /// Price as decimal text, stored exactly as submitted.
    pub price: String,

    /// Relative path of the uploaded image under the public blob area.
    pub featured_image: Option<String>,

    /// Original filename of the upload, retained for display/audit only.
    pub featured_image_original_name: Option<String>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product from validated input, stamping id and timestamps.
    ///
    /// ## Arguments
    /// * `input` - Validated field values
    /// * `image` - Blob path + original filename when a file was uploaded
    pub fn new(input: ProductInput, image: Option<StoredImage>) -> Self {
        let now = Utc::now();
        let (featured_image, featured_image_original_name) = match image {
            Some(img) => (Some(img.path), Some(img.original_name)),
            None => (None, None),
        };

        Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            featured_image,
            featured_image_original_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the always-replaced fields from new input.
    ///
    /// Image fields are intentionally left untouched; callers apply
    /// [`Product::replace_image`] only when a new file was uploaded.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
    }

    /// Replaces both image fields with a freshly stored upload.
    pub fn replace_image(&mut self, image: StoredImage) {
        self.featured_image = Some(image.path);
        self.featured_image_original_name = Some(image.original_name);
    }
}

// =============================================================================
// Mutation Input
// =============================================================================

/// The writable fields of a product, as submitted by the form.
///
/// Values are expected to be validated with
/// [`crate::validation::validate_product_input`] before they reach the store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// An upload already moved into blob storage.
///
/// Both fields travel together: a product either has a stored path *and*
/// the original filename, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Relative path assigned by the blob store, e.g. `products/<uuid>.png`.
    pub path: String,
    /// Filename as it arrived in the upload.
    pub original_name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            description: "A test widget".to_string(),
            price: "9.99".to_string(),
        }
    }

    #[test]
    fn test_new_without_image_leaves_both_fields_null() {
        let product = Product::new(input(), None);
        assert!(product.featured_image.is_none());
        assert!(product.featured_image_original_name.is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_new_with_image_sets_both_fields() {
        let image = StoredImage {
            path: "products/abc.png".to_string(),
            original_name: "photo.png".to_string(),
        };
        let product = Product::new(input(), Some(image));
        assert_eq!(product.featured_image.as_deref(), Some("products/abc.png"));
        assert_eq!(
            product.featured_image_original_name.as_deref(),
            Some("photo.png")
        );
    }

    #[test]
    fn test_apply_preserves_image_fields() {
        let image = StoredImage {
            path: "products/abc.png".to_string(),
            original_name: "photo.png".to_string(),
        };
        let mut product = Product::new(input(), Some(image));

        product.apply(ProductInput {
            name: "Gadget".to_string(),
            description: "Renamed".to_string(),
            price: "12.50".to_string(),
        });

        assert_eq!(product.name, "Gadget");
        assert_eq!(product.featured_image.as_deref(), Some("products/abc.png"));
        assert_eq!(
            product.featured_image_original_name.as_deref(),
            Some("photo.png")
        );
    }

    #[test]
    fn test_replace_image_overwrites_both_fields() {
        let mut product = Product::new(input(), None);
        product.replace_image(StoredImage {
            path: "products/new.jpg".to_string(),
            original_name: "front.jpg".to_string(),
        });
        assert_eq!(product.featured_image.as_deref(), Some("products/new.jpg"));
        assert_eq!(
            product.featured_image_original_name.as_deref(),
            Some("front.jpg")
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Product::new(input(), None);
        let b = Product::new(input(), None);
        assert_ne!(a.id, b.id);
    }
}
