//! # Request Handlers
//!
//! One module per resource. The admin manages a single resource today:
//!
//! - [`products`] - listing, form props, and mutations for the catalog

pub mod products;
