use serde::{Deserialize, Serialize};

/// Request for the legacy single-call borrow registration.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBorrow {
    pub borrower_name: String,
    pub borrower_phone: String,
    pub barcodes: Vec<String>,
}

/// Receipt returned when a borrow is recorded.
#[derive(Debug, Clone, Deserialize)]
pub struct BorrowReceipt {
    pub id: i64,
    pub borrower_name: String,
    pub borrower_phone: String,
    pub borrow_time: String,
    pub books: Vec<ReceiptBook>,
}

/// A book line on a receipt. `id`/`name` are absent when the scanned barcode
/// is unknown to the catalog (the backend still records it).
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptBook {
    #[serde(default)]
    pub id: Option<i64>,
    pub barcode: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Result of a single-book scan borrow.
#[derive(Debug, Clone, Deserialize)]
pub struct ScannedBook {
    pub barcode: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub in_stock: Option<i64>,
}

/// Filter parameters for the historical borrow-record query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// 1 = lent out, 2 = returned. The server defaults to lent-out records
    /// when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// One historical borrow record.
#[derive(Debug, Clone, Deserialize)]
pub struct BorrowRecord {
    pub id: i64,
    pub borrower_name: String,
    pub borrower_phone: String,
    pub borrow_time: String,
    pub status: i64,
    pub books: Vec<RecordBook>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordBook {
    pub barcode: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Borrower identity looked up by phone, with their outstanding books.
#[derive(Debug, Clone, Deserialize)]
pub struct Borrower {
    pub borrower_name: String,
    pub borrower_phone: String,
    pub borrow_time: String,
    pub books: Vec<RecordBook>,
}

/// Request for the legacy single-call return.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnRequest {
    pub barcode: String,
    pub borrower_phone: String,
}

/// Identity associated with a borrow or return session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub phone: String,
}

/// A book accumulated in a session's pending set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBook {
    pub barcode: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Snapshot of the server-held session: identified person plus pending set.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub books: Vec<SessionBook>,
}

/// Acknowledgement of a user association.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSaved {
    pub message: String,
    pub user: SessionUser,
}

/// Acknowledgement of a book added to the pending set.
#[derive(Debug, Clone, Deserialize)]
pub struct BookAdded {
    pub message: String,
    pub book: SessionBook,
}

/// Result of committing a session. The borrow side reports the created
/// record id; the return side only acknowledges.
#[derive(Debug, Clone, Deserialize)]
pub struct Committed {
    pub message: String,
    #[serde(default)]
    pub id: Option<i64>,
}
