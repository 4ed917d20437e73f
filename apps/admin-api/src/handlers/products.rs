//! # Product Handlers
//!
//! HTTP handlers for the product resource.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    GET /products Flow                                   │
//! │                                                                         │
//! │  ?search=wid&perPage=5&page=2                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Normalize into ListQuery (trimmed search, parsed page size)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository: filtered rows + filteredCount + totalCount                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PageWindow (from/to/last_page) + page_links (round-tripping URLs)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRow mapping ("05 Jan 2024") + rendered table cells             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IndexProps JSON                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Contract
//! Validation runs before any file is stored or row written. A stored-file
//! or database failure aborts the operation, logs the cause, and surfaces
//! only a generic error notice. Deleting an unknown id is 404, never a
//! silent success.

use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use catalog_core::pagination::{page_links, ListQuery, PageLink, PageSize, PageWindow};
use catalog_core::presentation::ProductRow;
use catalog_core::table::{render_product_table, RenderedTable};
use catalog_core::types::{Product, ProductInput, StoredImage};
use catalog_core::validation::{normalize_search, validate_product_input};
use catalog_core::PRODUCT_MEDIA_CATEGORY;

use crate::error::ApiError;
use crate::response::Envelope;
use crate::state::AppState;

// Generic failure notices, mirrored on the client banner.
const CREATE_FAILED: &str = "Product creation failed, please try again.";
const UPDATE_FAILED: &str = "Unable to update, please try again.";
const DELETE_FAILED: &str = "Product deletion failed, please try again.";

// =============================================================================
// Listing
// =============================================================================

/// Raw listing query parameters, parsed leniently: anything unusable falls
/// back to the defaults instead of failing the request.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
    pub page: Option<String>,
}

/// The paginated slice of the listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedProducts {
    pub data: Vec<ProductRow>,
    pub links: Vec<PageLink>,
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

/// The filters echoed back so the client keeps its controls in sync.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilters {
    pub search: String,
    pub per_page: String,
}

/// Everything the listing page needs in one response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexProps {
    pub products: PaginatedProducts,
    pub filters: ListFilters,
    pub total_count: u64,
    pub filtered_count: u64,
    pub table: RenderedTable,
}

/// GET /products - list, search, paginate.
#[instrument(name = "products::index", skip(state, params))]
pub async fn index(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let query = ListQuery::new(
        normalize_search(params.search.as_deref()),
        PageSize::parse(params.per_page.as_deref(), state.config.default_per_page),
        params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1),
    );

    let page = state.db.products().list_page(&query).await?;
    let window = PageWindow::compute(page.filtered_count, query.per_page, query.page);
    let links = page_links(&query, window.last_page);

    let rows: Vec<ProductRow> = page.items.into_iter().map(ProductRow::from).collect();
    let table = render_product_table(&rows, window.from);

    info!(
        count = rows.len(),
        filtered = page.filtered_count,
        total = page.total_count,
        "Listed products"
    );

    Ok(HttpResponse::Ok().json(IndexProps {
        products: PaginatedProducts {
            data: rows,
            links,
            from: window.from,
            to: window.to,
            total: page.filtered_count,
        },
        filters: ListFilters {
            search: query.search.clone().unwrap_or_default(),
            per_page: query.per_page.as_query_value(),
        },
        total_count: page.total_count,
        filtered_count: page.filtered_count,
        table,
    }))
}

// =============================================================================
// Form Props
// =============================================================================

/// Which rendering of the product form the client should show.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Show,
    Edit,
}

/// The raw field values backing the form (unlike the listing rows, dates
/// stay machine-readable here).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub featured_image: Option<String>,
    pub featured_image_original_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductDetail {
    fn from(p: Product) -> Self {
        ProductDetail {
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            featured_image: p.featured_image,
            featured_image_original_name: p.featured_image_original_name,
        }
    }
}

/// Props for the create/show/edit form page.
#[derive(Debug, Serialize)]
pub struct FormProps {
    pub mode: FormMode,
    pub product: Option<ProductDetail>,
}

/// GET /products/create - blank form.
#[instrument(name = "products::create")]
pub async fn create() -> HttpResponse {
    HttpResponse::Ok().json(FormProps {
        mode: FormMode::Create,
        product: None,
    })
}

/// GET /products/{id} - read-only form.
#[instrument(name = "products::show", skip(state, path))]
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner().to_string();
    let product = fetch_product(&state, &id).await?;

    Ok(HttpResponse::Ok().json(FormProps {
        mode: FormMode::Show,
        product: Some(ProductDetail::from(product)),
    }))
}

/// GET /products/{id}/edit - editable form.
#[instrument(name = "products::edit", skip(state, path))]
pub async fn edit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner().to_string();
    let product = fetch_product(&state, &id).await?;

    Ok(HttpResponse::Ok().json(FormProps {
        mode: FormMode::Edit,
        product: Some(ProductDetail::from(product)),
    }))
}

// =============================================================================
// Mutations
// =============================================================================

/// The multipart product form. Every text field is optional at the
/// extraction layer so that missing fields become per-field validation
/// errors instead of a blunt 400.
#[derive(Debug, MultipartForm)]
pub struct ProductFormData {
    pub name: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub price: Option<Text<String>>,
    pub featured_image: Option<TempFile>,
}

impl ProductFormData {
    /// The submitted text fields, absent ones as empty strings.
    fn input(&self) -> ProductInput {
        ProductInput {
            name: self.name.as_ref().map(|t| t.0.clone()).unwrap_or_default(),
            description: self
                .description
                .as_ref()
                .map(|t| t.0.clone())
                .unwrap_or_default(),
            price: self.price.as_ref().map(|t| t.0.clone()).unwrap_or_default(),
        }
    }

    /// The uploaded file, if one was actually sent.
    ///
    /// Browsers submit an empty file part when the picker was left untouched;
    /// a zero-byte upload counts as "no file".
    fn upload(&self) -> Option<&TempFile> {
        self.featured_image.as_ref().filter(|f| f.size > 0)
    }
}

/// Moves an upload into blob storage, mapping failures to the operation's
/// generic notice.
async fn store_upload(
    state: &AppState,
    file: &TempFile,
    operation: &'static str,
    failure_notice: &'static str,
) -> Result<StoredImage, ApiError> {
    let original_name = file.file_name.clone().unwrap_or_else(|| "upload".to_string());

    state
        .media
        .store(file.file.path(), PRODUCT_MEDIA_CATEGORY, &original_name)
        .await
        .map_err(|e| ApiError::operation_failed(operation, failure_notice, e))
}

/// POST /products - create a product (multipart, optional image).
#[instrument(name = "products::store", skip(state, form))]
pub async fn store(
    state: web::Data<AppState>,
    form: MultipartForm<ProductFormData>,
) -> Result<HttpResponse, ApiError> {
    let form = form.0;
    let input = form.input();
    validate_product_input(&input)?;

    let image = match form.upload() {
        Some(file) => Some(store_upload(&state, file, "product create", CREATE_FAILED).await?),
        None => None,
    };

    let product = Product::new(input, image);
    state
        .db
        .products()
        .insert(&product)
        .await
        .map_err(|e| ApiError::operation_failed("product create", CREATE_FAILED, e))?;

    info!(id = %product.id, "Product created");

    Ok(HttpResponse::Created().json(Envelope::success(
        ProductDetail::from(product),
        "Product created successfully",
    )))
}

/// PUT /products/{id} - update a product (multipart, optional new image).
#[instrument(name = "products::update", skip(state, path, form))]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: MultipartForm<ProductFormData>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner().to_string();

    let form = form.0;
    let input = form.input();
    validate_product_input(&input)?;

    let mut product = fetch_product(&state, &id).await?;
    product.apply(input);

    // Image fields change only when a new file arrived.
    if let Some(file) = form.upload() {
        let image = store_upload(&state, file, "product update", UPDATE_FAILED).await?;
        product.replace_image(image);
    }

    state
        .db
        .products()
        .update(&product)
        .await
        .map_err(|e| match e {
            catalog_db::DbError::NotFound { .. } => ApiError::not_found("Product", &id),
            other => ApiError::operation_failed("product update", UPDATE_FAILED, other),
        })?;

    info!(id = %product.id, "Product updated");

    Ok(HttpResponse::Ok().json(Envelope::success(
        ProductDetail::from(product),
        "Product updated successfully.",
    )))
}

/// DELETE /products/{id} - delete a product.
///
/// The stored image file (if any) is intentionally left behind.
#[instrument(name = "products::destroy", skip(state, path))]
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner().to_string();

    match state.db.products().delete(&id).await {
        Ok(()) => {
            info!(id = %id, "Product deleted");
            Ok(HttpResponse::Ok().json(Envelope::<ProductDetail>::success_message(
                "Product deleted successfully.",
            )))
        }
        Err(catalog_db::DbError::NotFound { .. }) => Err(ApiError::not_found("Product", &id)),
        Err(e) => Err(ApiError::operation_failed("product delete", DELETE_FAILED, e)),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Loads a product or surfaces the 404 signal.
async fn fetch_product(state: &AppState, id: &str) -> Result<Product, ApiError> {
    state
        .db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", id))
}
