//! # Typed URL Builders
//!
//! One function per navigable operation of the product resource.
//!
//! ## Why Not Route Names?
//! The client never mentions a route by name; it calls a builder and gets the
//! concrete URL. That keeps the route table in exactly one place and makes a
//! renamed path a compile-visible change instead of a stringly-typed one.
//!
//! ```text
//! list_url(query)    GET    /products?search=&perPage=&page=
//! create_url()       GET    /products/create
//! show_url(id)       GET    /products/{id}
//! edit_url(id)       GET    /products/{id}/edit
//! update_url(id)     PUT    /products/{id}
//! delete_url(id)     DELETE /products/{id}
//! ```

use url::form_urlencoded;

use crate::pagination::ListQuery;

/// Base path of the product resource.
pub const PRODUCTS_PATH: &str = "/products";

/// Builds the listing URL, round-tripping filter, page size, and page.
///
/// The search term is percent-encoded, so terms containing `&`, `=`, spaces,
/// or non-ASCII text survive the trip through the query string.
pub fn list_url(query: &ListQuery) -> String {
    let mut pairs = form_urlencoded::Serializer::new(String::new());

    if let Some(search) = &query.search {
        pairs.append_pair("search", search);
    }
    pairs.append_pair("perPage", &query.per_page.as_query_value());
    pairs.append_pair("page", &query.page.to_string());

    format!("{}?{}", PRODUCTS_PATH, pairs.finish())
}

/// URL of the blank create form.
pub fn create_url() -> String {
    format!("{PRODUCTS_PATH}/create")
}

/// URL of the read-only product view.
pub fn show_url(id: &str) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

/// URL of the editable product form.
pub fn edit_url(id: &str) -> String {
    format!("{PRODUCTS_PATH}/{id}/edit")
}

/// Target of the update request (PUT).
pub fn update_url(id: &str) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

/// Target of the delete request (DELETE).
pub fn delete_url(id: &str) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

// =============================================================================
// Unit Tests
// =============================================================================
