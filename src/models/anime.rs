use serde::{Deserialize, Serialize};

/// One record of the collection as exposed to handlers and rendering.
/// The row's creation timestamp stays internal to the store, where it
/// only drives listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
    pub id: i32,
    pub name: String,
    pub author: String,
    pub episodes: i32,
}

/// The mutable portion of a record: everything except the store-assigned
/// id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeFields {
    pub name: String,
    pub author: String,
    pub episodes: i32,
}
