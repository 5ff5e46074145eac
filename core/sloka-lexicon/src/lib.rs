//! Immutable reference tables for the analyzer.
//!
//! Three tables live here: the dictionary ([`Lexicon`]), the compound
//! database ([`compounds`]) and the morphology database ([`grammar`]). The
//! built-in versions are constructed once per process and never written to.

mod dictionary;
pub mod archive;
pub mod compounds;
pub mod grammar;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use sloka_protocol::{Dictionary, DictionaryEntry};
use tracing::debug;

pub use archive::{decode_dictionary, encode_dictionary, read_dictionary, LexiconError};
pub use compounds::{compound_count, lookup_compound, samasa_examples};
pub use grammar::{grammar_entry_count, lookup_grammar};

/// Final marks tried, in order, when an exact lookup misses: visarga,
/// the homorganic nasal stop म्, anusvara, the locative े and the feminine ा.
pub const INFLECTION_MARKS: [&str; 5] = ["ः", "म्", "ं", "े", "ा"];

static BUILTIN: LazyLock<Arc<Lexicon>> =
    LazyLock::new(|| Arc::new(Lexicon::from_entries(dictionary::builtin_entries())));

/// Dictionary table keyed by surface form.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, DictionaryEntry>,
}

impl Lexicon {
    /// The process-wide built-in dictionary.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.word.clone(), entry))
            .collect();
        Self { entries }
    }

    /// Layers `extra` under `self`: keys already present keep their entry.
    pub fn layered(&self, extra: Dictionary) -> Self {
        let mut entries = self.entries.clone();
        for entry in extra.entries {
            entries.entry(entry.word.clone()).or_insert(entry);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact headword lookup.
    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(word)
    }

    /// Lookup tolerant of the common nominal endings.
    ///
    /// Tries the exact form first, then every variation from
    /// [`inflectional_variations`] in order; the first hit wins.
    pub fn resolve(&self, word: &str) -> Option<&DictionaryEntry> {
        if let Some(entry) = self.get(word) {
            debug!(word, "direct dictionary match");
            return Some(entry);
        }

        let hit = inflectional_variations(word)
            .into_iter()
            .find_map(|variation| self.get(&variation));

        match hit {
            Some(entry) => debug!(word, matched = %entry.word, "variation dictionary match"),
            None => debug!(word, "no dictionary match"),
        }
        hit
    }

    /// Gloss for `word`, or a placeholder naming the unresolved word.
    pub fn gloss(&self, word: &str) -> String {
        match self.resolve(word) {
            Some(entry) => entry.meaning.clone(),
            None => format!("अर्थः न प्राप्तः (meaning not found for: {})", word),
        }
    }

    /// Entries whose headword, meaning or synonyms contain `query`.
    pub fn search(&self, query: &str) -> Vec<&DictionaryEntry> {
        let mut hits: Vec<&DictionaryEntry> = self
            .entries
            .values()
            .filter(|entry| {
                entry.word.contains(query)
                    || entry.meaning.contains(query)
                    || entry.synonyms.iter().any(|s| s.contains(query))
            })
            .collect();
        hits.sort_by(|a, b| a.word.cmp(&b.word));
        hits
    }
}

/// Candidate forms of `word` with one final mark stripped, followed by the
/// forms with one mark added, both in [`INFLECTION_MARKS`] order.
pub fn inflectional_variations(word: &str) -> Vec<String> {
    let stripped = INFLECTION_MARKS
        .iter()
        .filter_map(|mark| word.strip_suffix(mark))
        .filter(|stem| !stem.is_empty())
        .map(str::to_string);

    let added = INFLECTION_MARKS.iter().map(|mark| format!("{}{}", word, mark));

    stripped.chain(added).collect()
}
