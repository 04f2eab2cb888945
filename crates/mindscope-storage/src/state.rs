use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;
use crate::store::DocumentStore;

/// Load a JSON document.
pub async fn load_state<T: DeserializeOwned>(store: &DocumentStore, key: &str) -> Result<T, StorageError> {
    let output = objects::get_object(store, key).await?;
    Ok(serde_json::from_slice(&output.body)?)
}

/// Load a JSON document, or `None` if it does not exist.
pub async fn load_state_opt<T: DeserializeOwned>(
    store: &DocumentStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_state(store, key).await {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document (pretty-printed).
pub async fn save_state<T: Serialize>(store: &DocumentStore, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(store, key, body).await
}
