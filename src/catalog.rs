//! The deck catalog: a registry of named decks seeded with the built-ins
//! and extensible from an external JSON document.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::builtin;
use crate::error::Result;
use crate::models::Deck;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A registry of decks keyed by name.
///
/// A fresh catalog holds the four built-in decks. Additional decks can be
/// merged in from a JSON document via [`Catalog::append_from_json`];
/// already-registered decks always win when names collide, so the built-ins
/// cannot be redefined from a file. There is no deletion operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    decks: HashMap<String, Deck>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a catalog seeded with the built-in decks.
    pub fn new() -> Self {
        Self {
            decks: builtin::all(),
        }
    }

    /// Create a catalog with no decks at all.
    ///
    /// Useful when the built-ins are not wanted, e.g. a tool that works
    /// exclusively with file-defined decks.
    pub fn empty() -> Self {
        Self {
            decks: HashMap::new(),
        }
    }

    /// Look up a deck by name.
    pub fn get(&self, name: &str) -> Option<&Deck> {
        self.decks.get(name)
    }

    /// Iterate over all registered decks in no particular order.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.values()
    }

    /// All deck names, sorted, for stable enumeration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.decks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Whether the catalog holds no decks.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Merge deck definitions from a JSON file into the catalog.
    ///
    /// The document must be an object mapping deck name to a deck record:
    ///
    /// ```json
    /// { "Custom": { "name": "Custom", "cards": ["1", "2"] } }
    /// ```
    ///
    /// Decks already in the catalog take precedence over loaded decks with
    /// the same name; names only present in the file are added as-is. On a
    /// read or decode failure the catalog is left completely unchanged, so
    /// the prior deck set stays usable.
    pub fn append_from_json<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.merge(load_deck_file(path)?);
        Ok(())
    }

    /// Merge a decoded deck mapping, with registered decks winning on
    /// name collision.
    pub(crate) fn merge(&mut self, mut loaded: HashMap<String, Deck>) {
        for (name, deck) in self.decks.drain() {
            loaded.insert(name, deck);
        }
        self.decks = loaded;
    }
}

/// Read and decode a deck definition file (name -> deck record).
pub(crate) fn load_deck_file<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Deck>> {
    let contents = fs::read_to_string(path)?;
    let loaded = serde_json::from_str(&contents)?;
    Ok(loaded)
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catalog(decks=[{}])", self.names().join(", "))
    }
}
