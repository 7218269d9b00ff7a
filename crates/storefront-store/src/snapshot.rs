//! # Snapshot Encoding
//!
//! JSON encode/decode between domain state and [`SnapshotStorage`].
//!
//! ## Load Outcomes
//! ```text
//! ┌──────────────────────────────┬───────────────────────────────────────┐
//! │ Stored value                 │ load_snapshot returns                 │
//! ├──────────────────────────────┼───────────────────────────────────────┤
//! │ absent                       │ None                                  │
//! │ valid JSON of the right type │ Some(value)                           │
//! │ malformed / wrong shape      │ None, logged at warn                  │
//! │ storage read failure         │ None, logged at warn                  │
//! └──────────────────────────────┴───────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::SnapshotStorage;

/// Reads and decodes the snapshot under `key`.
///
/// Never fails: anything unusable falls back to `None` so the caller
/// starts from empty state.
pub fn load_snapshot<T: DeserializeOwned>(storage: &dyn SnapshotStorage, key: &str) -> Option<T> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No snapshot stored");
            return None;
        }
        Err(err) => {
            warn!(key, error = %err, "Failed to read snapshot, starting empty");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "Discarding malformed snapshot");
            None
        }
    }
}

/// Encodes `value` and overwrites the snapshot under `key`.
pub fn save_snapshot<T: Serialize + ?Sized>(
    storage: &dyn SnapshotStorage,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let json = serde_json::to_string(value).map_err(|err| StoreError::serialization(key, err))?;
    storage.write(key, &json)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use storefront_core::{Cart, Money, Product, Wishlist};

    #[test]
    fn test_missing_snapshot_is_none() {
        let storage = MemoryStorage::new();
        assert!(load_snapshot::<Cart>(&storage, "cart").is_none());
    }

    #[test]
    fn test_malformed_snapshots_are_none() {
        let storage = MemoryStorage::new();

        for raw in [
            "not json",
            r#"{"items":"nope","total":0}"#,
            r#"{"items":[],"total":"12"}"#,
            r#"{"total":0}"#,
        ] {
            storage.write("cart", raw).unwrap();
            assert!(load_snapshot::<Cart>(&storage, "cart").is_none(), "{raw}");
        }

        storage.write("wishlist", r#"{"items":[]}"#).unwrap();
        assert!(load_snapshot::<Wishlist>(&storage, "wishlist").is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let mut cart = Cart::new();
        cart.add_item(&Product::new("1", "Mug", Money::from_cents(1250)));

        save_snapshot(&storage, "cart", &cart).unwrap();
        let loaded: Cart = load_snapshot(&storage, "cart").unwrap();

        assert_eq!(loaded, cart);
    }
}
