use bazaar_core::Order;

use crate::codec::{decode_order, encode_order};
use crate::StorageError;

pub const CURRENT_SCHEMA: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbState {
    Missing,
    Valid,
    Busy,
    Corrupt,
    NewerSchema { found: u32, supported: u32 },
}

/// A flat key/value area for small pieces of client state.
pub trait LocalStateStore: Send + Sync {
    fn validate(&self) -> Result<DbState, StorageError>;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Removes the entry. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    fn load_selected_order(&self) -> Result<Option<Order>, StorageError> {
        match self.get(bazaar_config::SELECTED_ORDER_KEY)? {
            Some(bytes) => decode_order(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save_selected_order(&self, order: &Order) -> Result<(), StorageError> {
        let bytes = encode_order(order)?;
        self.put(bazaar_config::SELECTED_ORDER_KEY, &bytes)
    }

    fn clear_selected_order(&self) -> Result<(), StorageError> {
        self.delete(bazaar_config::SELECTED_ORDER_KEY)
    }
}
