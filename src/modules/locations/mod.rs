//! Location hierarchy client: areas, bookshelves, shelf layers, and the
//! aggregate tree.

pub mod models;

use serde::Serialize;
use stacks_http::{ApiClient, Result};

use crate::modules::Ack;
use models::{
    Area, AreaNode, Bookshelf, CreateArea, CreateBookshelf, CreateShelfLayer, ShelfLayer,
    UpdateArea, UpdateBookshelf, UpdateShelfLayer,
};

/// Entry point for the three location sub-clients and the tree view.
pub struct LocationClient<'a> {
    api: &'a ApiClient,
}

impl<'a> LocationClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub fn areas(&self) -> AreaClient<'a> {
        AreaClient { api: self.api }
    }

    pub fn bookshelves(&self) -> BookshelfClient<'a> {
        BookshelfClient { api: self.api }
    }

    pub fn shelf_layers(&self) -> ShelfLayerClient<'a> {
        ShelfLayerClient { api: self.api }
    }

    /// Fetch the fully materialized Area→Bookshelf→ShelfLayer tree.
    /// No local caching; every call re-fetches.
    pub async fn tree(&self) -> Result<Vec<AreaNode>> {
        self.api.get("/locations/tree").await
    }
}

/// CRUD over `/areas`.
pub struct AreaClient<'a> {
    api: &'a ApiClient,
}

impl AreaClient<'_> {
    pub async fn create(&self, area: &CreateArea) -> Result<Area> {
        self.api.post("/areas", area).await
    }

    pub async fn list(&self) -> Result<Vec<Area>> {
        self.api.get("/areas").await
    }

    pub async fn update(&self, id: i64, changes: &UpdateArea) -> Result<Area> {
        self.api.put(&format!("/areas/{id}"), changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<Ack> {
        self.api.delete(&format!("/areas/{id}")).await
    }
}

#[derive(Serialize)]
struct BookshelfQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    area_id: Option<i64>,
}

/// CRUD over `/bookshelves`, list scoped by parent area.
pub struct BookshelfClient<'a> {
    api: &'a ApiClient,
}

impl BookshelfClient<'_> {
    pub async fn create(&self, bookshelf: &CreateBookshelf) -> Result<Bookshelf> {
        self.api.post("/bookshelves", bookshelf).await
    }

    /// List bookshelves, scoped by area when `area_id` is given. Omitting
    /// the area yields an unscoped result callers must not rely on.
    pub async fn list(&self, area_id: Option<i64>) -> Result<Vec<Bookshelf>> {
        self.api
            .get_with("/bookshelves", &BookshelfQuery { area_id })
            .await
    }

    pub async fn update(&self, id: i64, changes: &UpdateBookshelf) -> Result<Bookshelf> {
        self.api.put(&format!("/bookshelves/{id}"), changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<Ack> {
        self.api.delete(&format!("/bookshelves/{id}")).await
    }
}

#[derive(Serialize)]
struct ShelfLayerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    bookshelf_id: Option<i64>,
}

/// CRUD over `/shelf-layers`, list scoped by parent bookshelf.
pub struct ShelfLayerClient<'a> {
    api: &'a ApiClient,
}

impl ShelfLayerClient<'_> {
    pub async fn create(&self, layer: &CreateShelfLayer) -> Result<ShelfLayer> {
        self.api.post("/shelf-layers", layer).await
    }

    pub async fn list(&self, bookshelf_id: Option<i64>) -> Result<Vec<ShelfLayer>> {
        self.api
            .get_with("/shelf-layers", &ShelfLayerQuery { bookshelf_id })
            .await
    }

    pub async fn update(&self, id: i64, changes: &UpdateShelfLayer) -> Result<ShelfLayer> {
        self.api.put(&format!("/shelf-layers/{id}"), changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<Ack> {
        self.api.delete(&format!("/shelf-layers/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::routing::{get, post};
    use axum::Router;
    use serde_json::json;

    use super::*;
    use crate::modules::testutil::{ok, spawn_backend};

    #[tokio::test]
    async fn bookshelf_list_includes_area_scope_when_given() {
        let router = Router::new().route(
            "/api/v1/bookshelves",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("area_id").map(String::as_str), Some("3"));
                ok(json!([{"id": 1, "area_id": 3, "name": "Shelf A"}]))
            }),
        );
        let client = spawn_backend(router).await;

        let shelves = LocationClient::new(&client)
            .bookshelves()
            .list(Some(3))
            .await
            .unwrap();
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].area_id, 3);
    }

    #[tokio::test]
    async fn bookshelf_list_omits_area_scope_when_absent() {
        let router = Router::new().route(
            "/api/v1/bookshelves",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert!(!params.contains_key("area_id"));
                ok(json!([]))
            }),
        );
        let client = spawn_backend(router).await;

        let shelves = LocationClient::new(&client)
            .bookshelves()
            .list(None)
            .await
            .unwrap();
        assert!(shelves.is_empty());
    }

    #[tokio::test]
    async fn shelf_layer_list_scopes_by_bookshelf() {
        let router = Router::new().route(
            "/api/v1/shelf-layers",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("bookshelf_id").map(String::as_str), Some("5"));
                ok(json!([{"id": 9, "bookshelf_id": 5, "name": "Layer 2"}]))
            }),
        );
        let client = spawn_backend(router).await;

        let layers = LocationClient::new(&client)
            .shelf_layers()
            .list(Some(5))
            .await
            .unwrap();
        assert_eq!(layers[0].id, 9);
    }

    #[tokio::test]
    async fn area_create_and_list_round_trip() {
        let router = Router::new()
            .route(
                "/api/v1/areas",
                post(|axum::Json(body): axum::Json<serde_json::Value>| async move {
                    assert_eq!(body["name"], "East Wing");
                    ok(json!({"id": 1, "name": "East Wing"}))
                }),
            )
            .route(
                "/api/v1/areas",
                get(|| async { ok(json!([{"id": 1, "name": "East Wing"}])) }),
            );
        let client = spawn_backend(router).await;
        let locations = LocationClient::new(&client);

        let area = locations
            .areas()
            .create(&CreateArea {
                name: "East Wing".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(area.id, 1);

        let areas = locations.areas().list().await.unwrap();
        assert_eq!(areas.len(), 1);
    }

    #[tokio::test]
    async fn tree_materializes_all_three_levels() {
        let router = Router::new().route(
            "/api/v1/locations/tree",
            get(|| async {
                ok(json!([{
                    "id": 1, "name": "East Wing",
                    "bookshelves": [{
                        "id": 2, "name": "Shelf A",
                        "shelf_layers": [{"id": 3, "name": "Layer 1"}]
                    }]
                }]))
            }),
        );
        let client = spawn_backend(router).await;

        let tree = LocationClient::new(&client).tree().await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].bookshelves[0].shelf_layers[0].name, "Layer 1");
    }
}
