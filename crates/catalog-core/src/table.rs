//! # Table Rendering
//!
//! Generic, configuration-driven table rendering for listing pages.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Configuration-Driven Rendering                         │
//! │                                                                         │
//! │  Column config (ordered)          Row (key → JSON value)               │
//! │  ┌──────────────────────┐         ┌──────────────────────────┐         │
//! │  │ name        │ Text   │         │ name: "Widget"           │         │
//! │  │ price       │ Text   │   ×     │ price: "9.99"            │         │
//! │  │ featuredImage│ Image │         │ featuredImage: null      │         │
//! │  │ actions     │ Actions│         │ id: "550e84…"            │         │
//! │  └──────────────────────┘         └──────────────────────────┘         │
//! │            │                                 │                          │
//! │            └────────────┬────────────────────┘                          │
//! │                         ▼                                               │
//! │  One tagged cell per column, resolved at render time:                  │
//! │    Text   → coerced display string                                     │
//! │    Image  → src only for a non-empty string, else placeholder          │
//! │    Actions→ one control per configured action (View/Edit/Delete)       │
//! │                                                                         │
//! │  Empty data set → single placeholder row spanning every column         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The component knows nothing about products; the product configuration at
//! the bottom of this module is just one instantiation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use ts_rs::TS;

use crate::presentation::ProductRow;
use crate::urls;

// =============================================================================
// Column Configuration
// =============================================================================

/// How a column's cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColumnKind {
    /// Coerce the looked-up value to a display string.
    Text,
    /// Treat the looked-up value as an image source.
    Image,
    /// Ignore the looked-up value; render the configured action group.
    Actions,
}

/// One column of a table: where to look, what to call it, how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColumnSpec {
    /// Lookup key into the row mapping.
    pub key: String,
    /// Header label.
    pub label: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(key: &str, label: &str, kind: ColumnKind) -> Self {
        ColumnSpec {
            key: key.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

// =============================================================================
// Action Configuration
// =============================================================================

/// What an action control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActionKind {
    /// Navigate to the target URL.
    Navigate,
    /// Confirm, then dispatch a DELETE request to the target URL; on success
    /// the client drops the row from the visible list without a reload.
    Delete,
}

/// A configured row action. `target` builds the URL from the row's id.
#[derive(Debug, Clone, Copy)]
pub struct ActionSpec {
    pub label: &'static str,
    /// Icon name for the client's icon set.
    pub icon: &'static str,
    pub kind: ActionKind,
    pub target: fn(&str) -> String,
}

/// An action resolved against one row, ready for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RowAction {
    pub label: String,
    pub icon: String,
    pub kind: ActionKind,
    pub url: String,
    /// Prompt the client must confirm before dispatching, if any.
    pub confirm: Option<String>,
}

// =============================================================================
// Rendered Output
// =============================================================================

/// Placeholder shown in an image cell with no usable source.
pub const NO_IMAGE_PLACEHOLDER: &str = "No image uploaded.";

/// Placeholder row text for an empty product listing.
pub const NO_PRODUCTS_PLACEHOLDER: &str = "No products found.";

/// Prompt confirmed before a product delete is dispatched.
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this product?";

/// One rendered cell, tagged by how the client should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RenderedCell {
    Text {
        value: String,
    },
    Image {
        /// Present only for a non-empty string source.
        src: Option<String>,
        placeholder: String,
    },
    Actions {
        actions: Vec<RowAction>,
    },
}

/// One rendered row: its 1-based ordinal plus one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenderedRow {
    /// Position within the filtered set (`from + index`), for the "#" column.
    pub ordinal: u64,
    pub cells: Vec<RenderedCell>,
}

/// The placeholder row rendered when the data set is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmptyState {
    pub message: String,
    /// Number of columns the placeholder spans (including the "#" column).
    pub span: usize,
}

/// A fully rendered table: headers, rows, and the empty placeholder if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenderedTable {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<RenderedRow>,
    pub empty: Option<EmptyState>,
}

// =============================================================================
// Cell Coercion
// =============================================================================

/// Coerces an arbitrary JSON value into something displayable.
///
/// ## Rules
/// - strings and numbers pass through
/// - null/absent renders as "-"
/// - booleans render as "Yes"/"No"
/// - arrays and objects serialize to their JSON text
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "Yes".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Extracts an image source: only a non-empty string qualifies.
pub fn image_src(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Extracts the row id used to build action URLs.
fn row_id(row: &Value) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders rows against a column/action configuration.
///
/// ## Arguments
/// * `columns` - Ordered column configuration
/// * `actions` - Controls rendered into every action-group cell
/// * `rows` - Row mappings (JSON objects; arbitrary keys allowed)
/// * `from` - 1-based ordinal of the first row (window start)
/// * `empty_message` - Placeholder text when `rows` is empty
pub fn render_table(
    columns: &[ColumnSpec],
    actions: &[ActionSpec],
    rows: &[Value],
    from: u64,
    empty_message: &str,
) -> RenderedTable {
    let empty = rows.is_empty().then(|| EmptyState {
        message: empty_message.to_string(),
        // +1 covers the leading "#" ordinal column.
        span: columns.len() + 1,
    });

    let rendered_rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| RenderedRow {
            ordinal: from + index as u64,
            cells: columns
                .iter()
                .map(|column| render_cell(column, actions, row))
                .collect(),
        })
        .collect();

    RenderedTable {
        columns: columns.to_vec(),
        rows: rendered_rows,
        empty,
    }
}

fn render_cell(column: &ColumnSpec, actions: &[ActionSpec], row: &Value) -> RenderedCell {
    let value = row.get(&column.key);

    match column.kind {
        ColumnKind::Text => RenderedCell::Text {
            value: display_text(value),
        },
        ColumnKind::Image => RenderedCell::Image {
            src: image_src(value),
            placeholder: NO_IMAGE_PLACEHOLDER.to_string(),
        },
        // A row without a usable id gets an empty action group.
        ColumnKind::Actions => RenderedCell::Actions {
            actions: match row_id(row) {
                Some(id) => actions.iter().map(|action| action.resolve(id)).collect(),
                None => Vec::new(),
            },
        },
    }
}

impl ActionSpec {
    fn resolve(&self, id: &str) -> RowAction {
        RowAction {
            label: self.label.to_string(),
            icon: self.icon.to_string(),
            kind: self.kind,
            url: (self.target)(id),
            confirm: match self.kind {
                ActionKind::Delete => Some(DELETE_CONFIRM_PROMPT.to_string()),
                ActionKind::Navigate => None,
            },
        }
    }
}

// =============================================================================
// Product Table Configuration
// =============================================================================

/// Column configuration of the product listing table.
pub fn product_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Product Name", ColumnKind::Text),
        ColumnSpec::new("description", "Description", ColumnKind::Text),
        ColumnSpec::new("price", "Price", ColumnKind::Text),
        ColumnSpec::new("featuredImage", "Featured Image", ColumnKind::Image),
        ColumnSpec::new("createdAt", "Created Date", ColumnKind::Text),
        ColumnSpec::new("actions", "Action", ColumnKind::Actions),
    ]
}

/// Action configuration of the product listing table.
pub fn product_actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec {
            label: "View",
            icon: "Eye",
            kind: ActionKind::Navigate,
            target: urls::show_url,
        },
        ActionSpec {
            label: "Edit",
            icon: "Pencil",
            kind: ActionKind::Navigate,
            target: urls::edit_url,
        },
        ActionSpec {
            label: "Delete",
            icon: "Trash",
            kind: ActionKind::Delete,
            target: urls::delete_url,
        },
    ]
}

/// Renders one page of product rows with the product configuration.
pub fn render_product_table(rows: &[ProductRow], from: u64) -> RenderedTable {
    let values: Vec<Value> = rows.iter().map(product_row_value).collect();
    render_table(
        &product_columns(),
        &product_actions(),
        &values,
        from,
        NO_PRODUCTS_PLACEHOLDER,
    )
}

/// The row mapping the column keys resolve against.
fn product_row_value(row: &ProductRow) -> Value {
    json!({
        "id": row.id,
        "name": row.name,
        "description": row.description,
        "price": row.price,
        "featuredImage": row.featured_image,
        "featuredImageOriginalName": row.featured_image_original_name,
        "createdAt": row.created_at,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
