//! # catalog-core: Pure Domain Logic for the Catalog Admin
//!
//! This crate is the **heart** of the catalog admin. It contains all domain
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Admin Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Client (React)                               │   │
//! │  │    Search bar ──► Table ──► Pagination ──► Product form        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/admin-api                               │   │
//! │  │    GET /products, POST /products, PUT /products/{id}, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │ pagination │  │   table   │  │ validation│ │   │
//! │  │   │  Product  │  │ PageWindow │  │  columns  │  │   rules   │ │   │
//! │  │   │   input   │  │ PageLink   │  │   cells   │  │  checks   │ │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductInput)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//! - [`pagination`] - Page-size parsing, window math, navigation links
//! - [`urls`] - Typed URL builders for every resource operation
//! - [`presentation`] - Listing row view-models
//! - [`table`] - Generic configuration-driven table rendering

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod presentation;
pub mod table;
pub mod types;
pub mod urls;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Product` instead of
// `use catalog_core::types::Product`

pub use error::{FieldError, ValidationError, ValidationErrors};
pub use pagination::{ListQuery, PageLink, PageSize, PageWindow};
pub use types::{Product, ProductInput};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage category label for product images.
///
/// The blob-storage collaborator files every product upload under this
/// category, so stored paths look like `products/<uuid>.<ext>`.
pub const PRODUCT_MEDIA_CATEGORY: &str = "products";

/// Page size used when the client sends no (or an unparsable) `perPage`.
pub const DEFAULT_PER_PAGE: u32 = 5;

/// The `perPage` sentinel that disables pagination entirely.
pub const PER_PAGE_ALL_SENTINEL: &str = "-1";
