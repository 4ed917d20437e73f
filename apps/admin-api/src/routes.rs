//! # Route Table
//!
//! The product resource routes, mirrored exactly by the typed URL builders
//! in `catalog_core::urls`.
//!
//! ```text
//! GET    /products              listing (search / perPage / page)
//! POST   /products              create (multipart)
//! GET    /products/create       blank form props
//! GET    /products/{id}         read-only form props
//! GET    /products/{id}/edit    editable form props
//! PUT    /products/{id}         update (multipart)
//! DELETE /products/{id}         delete
//! GET    /health                liveness probe
//! ```
//!
//! `/products/create` is registered before `/products/{id}` so the literal
//! segment wins.

use actix_web::{web, HttpResponse};

use crate::handlers;

/// Registers every route of the admin API on the actix app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/products")
            .route("", web::get().to(handlers::products::index))
            .route("", web::post().to(handlers::products::store))
            .route("/create", web::get().to(handlers::products::create))
            .route("/{id}", web::get().to(handlers::products::show))
            .route("/{id}/edit", web::get().to(handlers::products::edit))
            .route("/{id}", web::put().to(handlers::products::update))
            .route("/{id}", web::delete().to(handlers::products::destroy)),
    );
}

/// Liveness probe.
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
