//! Thread-safe catalog handle for concurrent callers.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Deck;

// ---------------------------------------------------------------------------
// SharedCatalog
// ---------------------------------------------------------------------------

/// A clonable, `RwLock`-guarded [`Catalog`] for use across threads.
///
/// Readers always observe either the fully-old or fully-new catalog:
/// [`SharedCatalog::append_from_json`] reads and decodes the file before
/// taking the write lock, so the replace is atomic with respect to readers
/// and a failed load never disturbs the current deck set.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCatalog {
    /// Create a shared catalog seeded with the built-in decks.
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    /// Wrap an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Look up a deck by name, returning an owned copy.
    pub fn get(&self, name: &str) -> Option<Deck> {
        self.read().get(name).cloned()
    }

    /// Card label at `index` in the named deck, or `None` if the deck is
    /// not registered.
    pub fn card(&self, deck_name: &str, index: usize) -> Option<Result<String>> {
        let guard = self.read();
        let deck = guard.get(deck_name)?;
        Some(deck.card(index).map(str::to_string))
    }

    /// All deck names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.read().names()
    }

    /// A point-in-time copy of the whole catalog.
    pub fn snapshot(&self) -> Catalog {
        self.read().clone()
    }

    /// Merge deck definitions from a JSON file, as
    /// [`Catalog::append_from_json`].
    ///
    /// The file is read and decoded outside the write lock; only the final
    /// merge-and-swap holds it, so a failed load never takes the lock.
    pub fn append_from_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let loaded = crate::catalog::load_deck_file(path)?;
        self.write().merge(loaded);
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
