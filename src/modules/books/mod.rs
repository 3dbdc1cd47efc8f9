//! Book CRUD client.

pub mod models;

use stacks_http::{ApiClient, Result};

use crate::modules::{Ack, Page};
use models::{Book, BookQuery, BookSummary, CreateBook, UpdateBook};

/// Stateless wrapper over the `/books` endpoints.
///
/// All constraints (required fields, barcode uniqueness) are enforced
/// server-side and surface as rejected calls.
pub struct BookClient<'a> {
    api: &'a ApiClient,
}

impl<'a> BookClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Create a book.
    pub async fn create(&self, book: &CreateBook) -> Result<Book> {
        self.api.post("/books", book).await
    }

    /// List books matching the filter, paginated.
    pub async fn list(&self, query: &BookQuery) -> Result<Page<BookSummary>> {
        self.api.get_with("/books", query).await
    }

    /// Look up a single book by its barcode; unknown barcodes reject with a
    /// not-found error.
    pub async fn get_by_barcode(&self, barcode: &str) -> Result<Book> {
        self.api.get(&format!("/books/barcode/{barcode}")).await
    }

    /// Apply a partial update.
    pub async fn update(&self, id: i64, changes: &UpdateBook) -> Result<Book> {
        self.api.put(&format!("/books/{id}"), changes).await
    }

    /// Delete a book.
    pub async fn delete(&self, id: i64) -> Result<Ack> {
        self.api.delete(&format!("/books/{id}")).await
    }
}
