use serde::{Deserialize, Serialize};

/// A book as stored by the backend, identified by id and scannable barcode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub quantity: i64,
    pub in_stock: i64,
    /// Current shelf location; unset for books not yet placed.
    #[serde(default)]
    pub shelf_layer_id: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Request payload for creating a book.
///
/// `in_stock` defaults to `quantity` server-side when omitted. Uniqueness of
/// the barcode is enforced by the server and surfaces as a rejected call.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBook {
    pub barcode: String,
    pub name: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_layer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Partial update; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_layer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Filter parameters for the book list endpoint. Unset fields are omitted
/// from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookQuery {
    /// Fuzzy match on the book name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exact barcode match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookshelf_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_layer_id: Option<i64>,
    /// 1 = in stock, 2 = partially lent out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// One row of the book list, with the derived location label.
#[derive(Debug, Clone, Deserialize)]
pub struct BookSummary {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub quantity: i64,
    pub in_stock: i64,
    #[serde(default)]
    pub shelf_layer_id: Option<i64>,
    /// "Area-Bookshelf-Layer" label materialized by the server.
    #[serde(default)]
    pub shelf_layer_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub remark: Option<String>,
}
