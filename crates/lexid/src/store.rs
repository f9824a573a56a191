//! In-memory word store.
//!
//! Seeded once at startup and read-only afterwards; the listing endpoint
//! serves it verbatim in insertion order.

use serde::{Deserialize, Serialize};

/// One word/meaning pair from the built-in list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
}

/// Ordered, read-only collection of word entries.
pub struct WordStore {
    entries: Vec<WordEntry>,
}

impl WordStore {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// The stock entries the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            WordEntry {
                word: "hello".to_string(),
                meaning: "a greeting or expression of goodwill".to_string(),
            },
            WordEntry {
                word: "code".to_string(),
                meaning: "instructions for a computer".to_string(),
            },
        ])
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}
