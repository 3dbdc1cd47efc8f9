use serde::{Deserialize, Serialize};

/// Top level of the physical location hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
}

/// A bookshelf, always belonging to exactly one area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookshelf {
    pub id: i64,
    pub area_id: i64,
    pub name: String,
}

/// A layer of a bookshelf, always belonging to exactly one bookshelf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfLayer {
    pub id: i64,
    pub bookshelf_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateArea {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateArea {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBookshelf {
    pub area_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateBookshelf {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateShelfLayer {
    pub bookshelf_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateShelfLayer {
    pub name: String,
}

/// Fully materialized location tree, area down to shelf layer.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaNode {
    pub id: i64,
    pub name: String,
    pub bookshelves: Vec<BookshelfNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookshelfNode {
    pub id: i64,
    pub name: String,
    pub shelf_layers: Vec<ShelfLayerNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShelfLayerNode {
    pub id: i64,
    pub name: String,
}
