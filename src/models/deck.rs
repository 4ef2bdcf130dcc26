use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

// ---------------------------------------------------------------------------
// Deck — A named, ordered list of estimation card labels
// ---------------------------------------------------------------------------

/// A named, ordered list of card labels (e.g. `"13"`, `"XL"`, `"☕"`).
///
/// The order of `cards` is semantically meaningful: it is the index space
/// for [`Deck::card`]. A deck is immutable once constructed; there is no
/// API for mutating its card list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<String>,
}

impl Deck {
    /// Create a deck from a name and card labels.
    pub fn new(name: impl Into<String>, cards: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the card label at the given zero-based index.
    ///
    /// Fails with [`DeckError::CardNotFound`] when `index` is outside
    /// `[0, len)`. Intended for untrusted caller-supplied indices such as
    /// a user-facing vote selection.
    pub fn card(&self, index: usize) -> Result<&str> {
        self.cards
            .get(index)
            .map(String::as_str)
            .ok_or(DeckError::CardNotFound {
                index,
                len: self.cards.len(),
            })
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards (lookup then always fails).
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
