use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StorageError;
use crate::store::DocumentStore;

/// Result of a GET operation.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub size: u64,
    pub last_modified: Option<jiff::Timestamp>,
}

/// Read an object.
pub async fn get_object(store: &DocumentStore, key: &str) -> Result<GetObjectOutput, StorageError> {
    let path = store.path_for(key)?;
    let body = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }
        }
    })?;
    let last_modified = modified(&path).await;

    Ok(GetObjectOutput {
        size: body.len() as u64,
        body,
        last_modified,
    })
}

/// Write an object, replacing any previous version.
///
/// The body lands in a sibling temp file first and is renamed into place, so
/// readers never see a partial object.
pub async fn put_object(store: &DocumentStore, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let path = store.path_for(key)?;
    let write_err = |e: std::io::Error| StorageError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    let tmp = temp_path(&path);
    tokio::fs::write(&tmp, &body).await.map_err(write_err)?;
    tokio::fs::rename(&tmp, &path).await.map_err(write_err)?;

    tracing::debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// Delete an object. Deleting a missing object is not an error.
pub async fn delete_object(store: &DocumentStore, key: &str) -> Result<(), StorageError> {
    let path = store.path_for(key)?;
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::Delete {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Delete all objects under a prefix. Returns the number deleted.
pub async fn delete_objects_by_prefix(
    store: &DocumentStore,
    prefix: &str,
) -> Result<usize, StorageError> {
    let keys = list_objects(store, prefix).await?;
    let count = keys.len();
    for key in &keys {
        delete_object(store, key).await?;
    }
    Ok(count)
}

/// Metadata for a single object, returned by [`list_objects_with_metadata`].
pub struct ObjectMeta {
    pub key: String,
    pub size: u64,
    pub last_modified: Option<jiff::Timestamp>,
}

/// List objects under a prefix with size and last-modified metadata,
/// sorted by key.
pub async fn list_objects_with_metadata(
    store: &DocumentStore,
    prefix: &str,
) -> Result<Vec<ObjectMeta>, StorageError> {
    let list_err = |e: std::io::Error| StorageError::List {
        prefix: prefix.to_string(),
        reason: e.to_string(),
    };

    let mut objects = Vec::new();
    let mut pending = vec![(store.root().to_path_buf(), String::new())];

    while let Some((dir, dir_key)) = pending.pop() {
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(list_err(e)),
        };
        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let key = if dir_key.is_empty() {
                name
            } else {
                format!("{dir_key}/{name}")
            };
            let file_type = entry.file_type().await.map_err(list_err)?;
            if file_type.is_dir() {
                // Only descend where the prefix can still match.
                if prefix.starts_with(&key) || key.starts_with(prefix) {
                    pending.push((entry.path(), key));
                }
            } else if key.starts_with(prefix) && !is_temp(&key) {
                let meta = entry.metadata().await.map_err(list_err)?;
                objects.push(ObjectMeta {
                    key,
                    size: meta.len(),
                    last_modified: meta.modified().ok().and_then(|t| jiff::Timestamp::try_from(t).ok()),
                });
            }
        }
    }

    objects.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(objects)
}

/// List objects under a prefix. Returns keys, sorted.
pub async fn list_objects(store: &DocumentStore, prefix: &str) -> Result<Vec<String>, StorageError> {
    Ok(list_objects_with_metadata(store, prefix)
        .await?
        .into_iter()
        .map(|o| o.key)
        .collect())
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_path(path: &Path) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp-{}-{n}", std::process::id()));
    PathBuf::from(tmp)
}

async fn modified(path: &Path) -> Option<jiff::Timestamp> {
    let meta = tokio::fs::metadata(path).await.ok()?;
    jiff::Timestamp::try_from(meta.modified().ok()?).ok()
}

fn is_temp(key: &str) -> bool {
    key.rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(_, ext)| ext.starts_with("tmp-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("data")).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn put_then_get_returns_body() {
        let (_dir, store) = store().await;
        put_object(&store, "a/b/c.json", b"{}".to_vec()).await.unwrap();
        let out = get_object(&store, "a/b/c.json").await.unwrap();
        assert_eq!(out.body, b"{}");
        assert_eq!(out.size, 2);
        assert!(out.last_modified.is_some());
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let (_dir, store) = store().await;
        let err = get_object(&store, "nope.json").await.err().unwrap();
        assert!(matches!(err, StorageError::NotFound { key } if key == "nope.json"));
    }

    #[tokio::test]
    async fn list_filters_by_prefix_and_sorts() {
        let (_dir, store) = store().await;
        for key in ["submissions/b.json", "submissions/a.json", "outbox/x.json", "subs.json"] {
            put_object(&store, key, Vec::new()).await.unwrap();
        }
        assert_eq!(
            list_objects(&store, "submissions/").await.unwrap(),
            ["submissions/a.json", "submissions/b.json"]
        );
        assert_eq!(list_objects(&store, "sub").await.unwrap().len(), 3);
        assert_eq!(list_objects(&store, "").await.unwrap().len(), 4);
        assert!(list_objects(&store, "reports/").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (_dir, store) = store().await;
        put_object(&store, "outbox/1.json", Vec::new()).await.unwrap();
        put_object(&store, "outbox/2.json", Vec::new()).await.unwrap();
        delete_object(&store, "outbox/1.json").await.unwrap();
        delete_object(&store, "outbox/1.json").await.unwrap();
        assert_eq!(delete_objects_by_prefix(&store, "outbox/").await.unwrap(), 1);
        assert!(list_objects(&store, "outbox/").await.unwrap().is_empty());
    }
}
