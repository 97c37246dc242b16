use bazaar_core::Order;

use crate::StorageError;

pub fn encode_order(order: &Order) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(order)?)
}

pub fn decode_order(bytes: &[u8]) -> Result<Order, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}
