//! Estimation deck catalog for planning-poker style tools.
//!
//! Holds a fixed set of built-in decks (Modified Fibonacci, Fibonacci,
//! T-Shirt Sizes, Hours), supports indexed card lookup, and can merge
//! additional deck definitions from an external JSON document. Decks
//! already in the catalog always win over loaded decks with the same name.
//!
//! # Quick start
//!
//! ```
//! use estimation_decks::Catalog;
//!
//! let catalog = Catalog::new();
//!
//! // Look up a card by index
//! let deck = catalog.get("Fibonacci").unwrap();
//! assert_eq!(deck.card(4).unwrap(), "5");
//!
//! // Merge custom decks from a JSON file
//! // catalog.append_from_json("decks.json")?;
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod models;
pub mod shared;

pub use catalog::Catalog;
pub use error::{DeckError, Result};
pub use models::Deck;
pub use shared::SharedCatalog;
