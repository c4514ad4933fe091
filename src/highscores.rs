//! Best score persistence
//!
//! A single integer kept in the host's key/value store. Read once at
//! startup, written only when a finished run beats it.

use crate::error::StoreError;
use crate::platform::KeyValueStore;

/// LocalStorage key for the best score
pub const STORAGE_KEY: &str = "lodge_highscore";

/// Read the stored best score.
///
/// Values written by other pages may carry trailing junk ("12.0", "12px");
/// their leading digits are used. Missing or digit-less values count as 0.
pub fn load_best(store: &dyn KeyValueStore) -> u32 {
    let Some(raw) = store.get(STORAGE_KEY) else {
        log::info!("No best score found, starting fresh");
        return 0;
    };

    let trimmed = raw.trim();
    let parsed = serde_json::from_str::<u32>(trimmed).or_else(|e| {
        leading_integer(trimmed).ok_or(e).inspect(|best| {
            log::debug!("Stored best score {:?} read as {}", raw, best);
        })
    });
    match parsed {
        Ok(best) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Err(e) => {
            log::warn!("Stored best score {:?} unreadable ({}), using 0", raw, e);
            0
        }
    }
}

/// Leading run of ASCII digits, if any
fn leading_integer(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Write a new best score
pub fn save_best(store: &mut dyn KeyValueStore, best: u32) -> Result<(), StoreError> {
    let json = serde_json::to_string(&best).map_err(|e| StoreError::Write {
        key: STORAGE_KEY.to_string(),
        reason: e.to_string(),
    })?;
    store.set(STORAGE_KEY, &json)?;
    log::info!("Best score saved ({})", best);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_missing_is_zero() {
        assert_eq!(load_best(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_garbage_is_zero() {
        let mut store = MemoryStore::new();
        store.insert(STORAGE_KEY, "lots");
        assert_eq!(load_best(&store), 0);

        store.insert(STORAGE_KEY, "-5");
        assert_eq!(load_best(&store), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_best(&mut store, 340).unwrap();
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("340"));
        assert_eq!(load_best(&store), 340);
    }

    #[test]
    fn test_leading_digits_are_kept() {
        let mut store = MemoryStore::new();
        store.insert(STORAGE_KEY, "12.0");
        assert_eq!(load_best(&store), 12);

        store.insert(STORAGE_KEY, "12px");
        assert_eq!(load_best(&store), 12);
    }

    #[test]
    fn test_plain_integer_written_by_older_pages() {
        let mut store = MemoryStore::new();
        store.insert(STORAGE_KEY, " 125\n");
        assert_eq!(load_best(&store), 125);
    }
}
