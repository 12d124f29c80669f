//! Menu tiles drawn over the background.

mod tiles;

pub use tiles::{tile_instances, TileInstance, TileRenderer, TileStyle};
