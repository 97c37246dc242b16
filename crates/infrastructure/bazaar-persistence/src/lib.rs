mod api;
mod codec;
mod error;
mod maintenance;
mod redb_store;

pub use api::*;
pub use codec::{decode_order, encode_order};
pub use error::*;
pub use redb_store::RedbLocalStore;
