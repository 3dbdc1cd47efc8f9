//! Borrow/return client.
//!
//! Two call families share the one `ApiClient`: the legacy stateless
//! endpoints (one call completes the action) and the session-based workflow
//! where the server accumulates an identified person plus a pending set of
//! books and commits them atomically on `complete`. The session lives
//! entirely server-side; this client issues transition calls in whatever
//! order the caller chooses and never validates the sequence locally — the
//! server's response is authoritative, and nothing is retried.

pub mod models;

use serde::Serialize;
use stacks_http::{ApiClient, Result};

use crate::modules::{Ack, Page};
use models::{
    BookAdded, BorrowReceipt, BorrowRecord, Borrower, Committed, CreateBorrow, RecordQuery,
    ReturnRequest, ScannedBook, SessionState, SessionUser, UserSaved,
};

#[derive(Serialize)]
struct ScanRequest<'a> {
    barcode: &'a str,
}

#[derive(Serialize)]
struct PhoneRequest<'a> {
    phone: &'a str,
}

#[derive(Serialize)]
struct AddBookRequest<'a> {
    barcode: &'a str,
}

#[derive(Serialize)]
struct RemoveBookRequest {
    index: usize,
}

#[derive(Serialize)]
struct CompleteRequest {
    use_redis: bool,
}

/// Client for the `/borrow` and `/return` endpoint families.
pub struct CirculationClient<'a> {
    api: &'a ApiClient,
}

impl<'a> CirculationClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Legacy single-shot borrow registration.
    pub async fn create(&self, borrow: &CreateBorrow) -> Result<BorrowReceipt> {
        self.api.post("/borrow", borrow).await
    }

    /// Legacy scan borrow, one book per call.
    pub async fn scan(&self, barcode: &str) -> Result<ScannedBook> {
        self.api.post("/borrow/scan", &ScanRequest { barcode }).await
    }

    /// Query historical borrow records, paginated. No session semantics.
    pub async fn list(&self, query: &RecordQuery) -> Result<Page<BorrowRecord>> {
        self.api.get_with("/borrow/records", query).await
    }

    /// Look up a prior borrower's identity by phone for return-time
    /// convenience; rejects with not-found when nothing is outstanding.
    pub async fn borrower_by_phone(&self, phone: &str) -> Result<Borrower> {
        self.api
            .post("/borrow/get-borrower", &PhoneRequest { phone })
            .await
    }

    /// Legacy single-shot return.
    pub async fn return_book(&self, request: &ReturnRequest) -> Result<Ack> {
        self.api.post("/borrow/return", request).await
    }

    /// The session-based borrow workflow under `/borrow/*`.
    pub fn borrow_session(&self) -> SessionClient<'a> {
        SessionClient {
            api: self.api,
            prefix: "/borrow",
        }
    }

    /// The session-based return workflow under `/return/*`, symmetric to
    /// the borrow side.
    pub fn return_session(&self) -> SessionClient<'a> {
        SessionClient {
            api: self.api,
            prefix: "/return",
        }
    }
}

/// Thin relay for one side of the session workflow.
///
/// Holds no session identifier or local state machine: every call is
/// independently dispatched and the server alone judges whether a
/// transition is legal. Out-of-order calls (completing with no user set,
/// removing a book that is not pending) surface as rejected calls for the
/// caller to handle.
pub struct SessionClient<'a> {
    api: &'a ApiClient,
    prefix: &'static str,
}

impl SessionClient<'_> {
    /// Associate a person with the session.
    pub async fn set_user(&self, user: &SessionUser) -> Result<UserSaved> {
        self.api.post(&format!("{}/user", self.prefix), user).await
    }

    /// Read back the current association and pending set. Idempotent;
    /// callable at any time.
    pub async fn user(&self) -> Result<SessionState> {
        self.api.get(&format!("{}/user", self.prefix)).await
    }

    /// Append one book to the session's pending set. Repeatable.
    pub async fn add_book(&self, barcode: &str) -> Result<BookAdded> {
        self.api
            .post(&format!("{}/book", self.prefix), &AddBookRequest { barcode })
            .await
    }

    /// Remove the pending entry at `index` (positions as reported by
    /// [`Self::user`]). An out-of-range index is judged by the server;
    /// callers should re-read the state rather than assume.
    pub async fn remove_book(&self, index: usize) -> Result<Ack> {
        self.api
            .delete_with(
                &format!("{}/book", self.prefix),
                &RemoveBookRequest { index },
            )
            .await
    }

    /// Commit the session: atomically apply the pending set against the
    /// identified person, then reset the session to empty. The server
    /// rejects a commit with no user or no books; that rejection propagates
    /// unmodified and is never retried here.
    pub async fn complete(&self) -> Result<Committed> {
        self.api
            .post(
                &format!("{}/complete", self.prefix),
                &CompleteRequest { use_redis: true },
            )
            .await
    }
}
