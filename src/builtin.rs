//! Built-in deck definitions and conventional file locations.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::models::Deck;

/// The standard deck for agile estimations.
pub fn modified_fibonacci() -> Deck {
    Deck::new(
        "Modified Fibonacci",
        ["0", "1", "2", "3", "5", "8", "13", "20", "40", "100", "?", "☕"],
    )
}

/// Uses the actual Fibonacci numbers.
pub fn fibonacci() -> Deck {
    Deck::new(
        "Fibonacci",
        ["0", "1", "2", "3", "5", "8", "13", "21", "34", "55", "89", "?", "☕"],
    )
}

/// Shirt sizes for relative estimates.
pub fn t_shirt_sizes() -> Deck {
    Deck::new("T-Shirt Sizes", ["XS", "S", "M", "L", "XL", "XXL", "?", "☕"])
}

pub fn hours() -> Deck {
    Deck::new(
        "Hours",
        ["0", ".5", "1", "2", "4", "8", "12", "16", "20", "24", "?", "☕"],
    )
}

/// All built-in decks, keyed by deck name.
pub fn all() -> HashMap<String, Deck> {
    [modified_fibonacci(), fibonacci(), t_shirt_sizes(), hours()]
        .into_iter()
        .map(|deck| (deck.name.clone(), deck))
        .collect()
}

/// Conventional location of a user-supplied decks file
/// (e.g. `~/.config/estimation-decks/decks.json` on Linux,
/// `~/Library/Application Support/estimation-decks/decks.json` on macOS).
///
/// Nothing reads this path implicitly; it is a helper for CLI or service
/// layers sitting on top of the catalog.
pub fn default_decks_path() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("estimation-decks").join("decks.json")
    } else {
        PathBuf::from(".estimation-decks").join("decks.json")
    }
}
