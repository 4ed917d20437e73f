//! End-to-end tests for the product resource routes.
//!
//! Each test spins up the full actix app over an in-memory database and a
//! scratch media root, then drives it through real multipart requests.

use std::path::Path;

use actix_web::{test, web, App};
use serde_json::Value;
use tempfile::TempDir;

use catalog_admin_api::routes;
use catalog_admin_api::storage::MediaStore;
use catalog_admin_api::{AppConfig, AppState};
use catalog_db::{Database, DbConfig};

const BOUNDARY: &str = "X-CATALOG-TEST-BOUNDARY";

fn test_config(media_root: &Path) -> AppConfig {
    AppConfig {
        http_port: 0,
        database_path: ":memory:".into(),
        media_root: media_root.to_path_buf(),
        default_per_page: 5,
    }
}

async fn test_state(media_root: &TempDir) -> AppState {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    AppState::new(
        db,
        MediaStore::new(media_root.path()),
        test_config(media_root.path()),
    )
}

/// Builds a multipart body with the given text fields and optional file part.
fn form_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"featured_image\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_header() -> (&'static str, String) {
    (
        "content-type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}

fn post_product(
    name: &str,
    description: &str,
    price: &str,
    file: Option<(&str, &[u8])>,
) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/products")
        .insert_header(multipart_header())
        .set_payload(form_body(
            &[("name", name), ("description", description), ("price", price)],
            file,
        ))
}

fn put_product(
    id: &str,
    name: &str,
    description: &str,
    price: &str,
    file: Option<(&str, &[u8])>,
) -> test::TestRequest {
    test::TestRequest::put()
        .uri(&format!("/products/{id}"))
        .insert_header(multipart_header())
        .set_payload(form_body(
            &[("name", name), ("description", description), ("price", price)],
            file,
        ))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn health_endpoint_responds() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn create_without_file_then_search() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    // Submit the widget with no file part at all.
    let resp = test::call_service(
        &app,
        post_product("Widget", "A test widget", "9.99", None).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"]["kind"], "success");
    assert_eq!(body["notice"]["message"], "Product created successfully");
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["featuredImage"], Value::Null);
    assert_eq!(body["data"]["featuredImageOriginalName"], Value::Null);

    // Matching search finds it (case-insensitive substring).
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/products?search=widget")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["filteredCount"], 1);
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["products"]["data"][0]["name"], "Widget");

    // Non-matching search excludes it but still reports the total.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/products?search=gadget")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["filteredCount"], 0);
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["products"]["data"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn twelve_products_page_three_of_five() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    for i in 0..12 {
        let resp = test::call_service(
            &app,
            post_product(
                &format!("Product {i:02}"),
                &format!("Description {i:02}"),
                &format!("{i}.99"),
                None,
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/products?perPage=5&page=3")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["products"]["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["products"]["from"], 11);
    assert_eq!(body["products"]["to"], 12);
    assert_eq!(body["products"]["total"], 12);

    // Row ordinals continue the window.
    assert_eq!(body["table"]["rows"][0]["ordinal"], 11);
    assert_eq!(body["table"]["rows"][1]["ordinal"], 12);

    // Previous / 3 numbered pages / Next, with page 3 active.
    let links = body["products"]["links"].as_array().unwrap();
    assert_eq!(links.len(), 5);
    assert_eq!(links[3]["label"], "3");
    assert_eq!(links[3]["active"], true);
    // Next points nowhere from the last page.
    assert_eq!(links[4]["url"], Value::Null);
    // Inner links round-trip the page size.
    assert!(links[1]["url"].as_str().unwrap().contains("perPage=5"));

    // The All sentinel collapses everything onto one page.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/products?perPage=-1")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["products"]["data"].as_array().unwrap().len(), 12);
    assert_eq!(body["products"]["from"], 1);
    assert_eq!(body["products"]["to"], 12);
}

#[actix_web::test]
async fn upload_replace_and_preserve_image() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    // Create with an image.
    let resp = test::call_service(
        &app,
        post_product(
            "Widget",
            "A test widget",
            "9.99",
            Some(("photo.png", b"png bytes")),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let stored_path = body["data"]["featuredImage"].as_str().unwrap().to_string();

    assert!(stored_path.starts_with("products/"));
    assert!(stored_path.ends_with(".png"));
    assert_eq!(body["data"]["featuredImageOriginalName"], "photo.png");

    // The bytes actually landed under the media root.
    let on_disk = std::fs::read(media_root.path().join(&stored_path)).unwrap();
    assert_eq!(on_disk, b"png bytes");

    // Update WITHOUT a file: both image fields survive untouched.
    let resp = test::call_service(
        &app,
        put_product(&id, "Widget II", "Improved", "12.00", None).to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"]["message"], "Product updated successfully.");
    assert_eq!(body["data"]["name"], "Widget II");
    assert_eq!(body["data"]["featuredImage"], stored_path.as_str());
    assert_eq!(body["data"]["featuredImageOriginalName"], "photo.png");

    // Update WITH a file: both image fields replaced.
    let resp = test::call_service(
        &app,
        put_product(
            &id,
            "Widget II",
            "Improved",
            "12.00",
            Some(("front.jpg", b"jpg bytes")),
        )
        .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    let new_path = body["data"]["featuredImage"].as_str().unwrap();
    assert_ne!(new_path, stored_path);
    assert!(new_path.ends_with(".jpg"));
    assert_eq!(body["data"]["featuredImageOriginalName"], "front.jpg");
}

#[actix_web::test]
async fn validation_reports_every_field_and_writes_nothing() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    let resp = test::call_service(
        &app,
        post_product("", "", "free", None).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors["name"], "The name field is required.");
    assert_eq!(errors["description"], "The description field is required.");
    assert_eq!(errors["price"], "The price field must be a number.");

    // The store stayed untouched.
    let resp = test::call_service(&app, test::TestRequest::get().uri("/products").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalCount"], 0);
}

#[actix_web::test]
async fn delete_then_list_and_missing_id_is_not_found() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    let resp = test::call_service(
        &app,
        post_product("Widget", "A test widget", "9.99", None).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Delete it.
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/products/{id}"))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"]["kind"], "success");
    assert_eq!(body["notice"]["message"], "Product deleted successfully.");

    // Listing never shows it again.
    let resp = test::call_service(&app, test::TestRequest::get().uri("/products").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totalCount"], 0);

    // Deleting an unknown id is a not-found signal, not a success notice.
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/products/{}", uuid_string()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"]["kind"], "error");
}

#[actix_web::test]
async fn form_props_carry_mode_and_product() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    // Blank create form.
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/products/create").to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"], "create");
    assert_eq!(body["product"], Value::Null);

    let resp = test::call_service(
        &app,
        post_product("Widget", "A test widget", "9.99", None).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Read-only view.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/products/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"], "show");
    assert_eq!(body["product"]["name"], "Widget");

    // Editable form.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/products/{id}/edit"))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"], "edit");
    assert_eq!(body["product"]["price"], "9.99");

    // Unknown ids are 404 on both form surfaces.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/products/{}", uuid_string()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn empty_store_renders_placeholder_table() {
    let media_root = tempfile::tempdir().unwrap();
    let app = test_app!(test_state(&media_root).await);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/products").to_request()).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["products"]["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["products"]["total"], 0);
    assert_eq!(body["table"]["empty"]["message"], "No products found.");
    // Six configured columns plus the ordinal column.
    assert_eq!(body["table"]["empty"]["span"], 7);
    // Single "page 1 of 1" link set.
    let links = body["products"]["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[1]["active"], true);
}

/// A random id that certainly isn't in the store.
fn uuid_string() -> String {
    // The handlers parse the path segment as a UUID, so it has to look real.
    "00000000-0000-4000-8000-000000000000".to_string()
}
