//! Resource clients, one module per backend entity family.
//!
//! Each client is a stateless set of functions mapping an entity type to its
//! REST endpoints. They all borrow the single [`stacks_http::ApiClient`]
//! constructed at application start; none holds state of its own.

pub mod books;
pub mod circulation;
pub mod locations;

use serde::Deserialize;

/// Paginated collection as returned by the backend's list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub list: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Acknowledgement payload for operations that return only a message.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
pub(crate) mod testutil {
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use stacks_http::ApiClient;
    use stacks_kernel::settings::BackendSettings;

    /// Serve an axum router on an ephemeral port and return a client
    /// pointed at its `/api/v1` root.
    pub(crate) async fn spawn_backend(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock");
        });

        ApiClient::new(&BackendSettings {
            base_url: format!("http://{addr}/api/v1"),
            request_timeout_ms: 5000,
        })
        .expect("build client")
    }

    /// Success envelope.
    pub(crate) fn ok(data: Value) -> Json<Value> {
        Json(json!({"code": 200, "message": "success", "data": data}))
    }

    /// Error envelope.
    pub(crate) fn fail(code: i64, message: &str) -> Json<Value> {
        Json(json!({"code": code, "message": message, "data": null}))
    }
}
