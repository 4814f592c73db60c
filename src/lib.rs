//! Tile Smash (workspace facade crate).
//!
//! Re-exports the member crates as `tile_smash::{core,engine,store,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub use tile_smash_core as core;
pub use tile_smash_engine as engine;
pub use tile_smash_store as store;
pub use tile_smash_types as types;
