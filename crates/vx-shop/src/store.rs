//! Durable order storage.
//!
//! Orders live in a single JSON file holding a flat array. Every append
//! rewrites the whole file through a temporary sibling and a rename, and
//! appends within one process are serialised by a mutex. Two processes
//! appending at once can still lose one of the writes.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ShopResult;
use crate::order::Order;

/// Somewhere orders can be appended to and read back from.
pub trait OrderStore {
    /// Every stored order, oldest first.
    fn load_all(&self) -> ShopResult<Vec<Order>>;

    /// Append one order.
    fn append(&self, order: &Order) -> ShopResult<()>;

    /// The last stored order, if any. Reading never modifies the store.
    fn most_recent(&self) -> ShopResult<Option<Order>> {
        Ok(self.load_all()?.pop())
    }
}

/// Orders kept in a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// A store backed by `path`. The file is created lazily.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The order file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file holding an empty array if it does not exist yet.
    pub fn ensure_exists(&self) -> ShopResult<()> {
        if !self.path.exists() {
            self.write_all(&[])?;
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "orders.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_all(&self, orders: &[Order]) -> ShopResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(orders)?;
        let tmp = self.temp_path();
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl OrderStore for JsonFileStore {
    /// A missing or blank file holds no orders. A file that is not a JSON
    /// array of orders is an error, so it is never silently overwritten.
    fn load_all(&self) -> ShopResult<Vec<Order>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn append(&self, order: &Order) -> ShopResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut orders = self.load_all()?;
        orders.push(order.clone());
        self.write_all(&orders)?;
        tracing::debug!(path = %self.path.display(), count = orders.len(), "orders written");
        Ok(())
    }
}

/// Orders kept in memory, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: Mutex<Vec<Order>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        self.orders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OrderStore for MemoryStore {
    fn load_all(&self) -> ShopResult<Vec<Order>> {
        Ok(self.lock().clone())
    }

    fn append(&self, order: &Order) -> ShopResult<()> {
        self.lock().push(order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::cart::CartLine;
    use crate::catalog::Catalog;
    use crate::error::ShopError;

    fn order(id: &str, qty: u32) -> Order {
        Order::price(&[CartLine::new(id, qty)], &Catalog::bundled(), "INR").unwrap()
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("orders.json"));
        assert!(store.load_all().unwrap().is_empty());
        assert!(store.most_recent().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn ensure_exists_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("orders.json"));
        store.ensure_exists().unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("orders.json"));
        let first = order("mug-001", 1);
        let second = order("tee-002", 2);
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all, vec![first, second.clone()]);
        assert_eq!(store.most_recent().unwrap(), Some(second.clone()));
        // reading twice changes nothing
        assert_eq!(store.most_recent().unwrap(), Some(second));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn file_is_a_flat_pretty_array() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("orders.json"));
        store.append(&order("mug-001", 1)).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n"));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn corrupt_file_is_an_error_and_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.load_all(), Err(ShopError::Serialization(_))));
        assert!(store.append(&order("mug-001", 1)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn concurrent_appends_in_one_process() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("orders.json")));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.append(&order("mug-001", 1)).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.load_all().unwrap().len(), 8);
    }

    #[test]
    fn memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.append(&order("mug-001", 1)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.most_recent().unwrap().map(|o| o.items[0].product_id.clone()).as_deref(), Some("mug-001"));
    }
}
