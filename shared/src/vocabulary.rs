use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_FETCH_MESSAGE, FALLBACK_SCHEMA_MESSAGE};
use crate::error::{GameError, GameResult};
use crate::validation::validate_vocabulary;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordEntry {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VocabularyEntry {
    pub category: String,
    pub words: Vec<WordEntry>,
}

// A document is either a list of categories or a single category object.
#[derive(Deserialize)]
#[serde(untagged)]
enum VocabularyDocument {
    Many(Vec<VocabularyEntry>),
    One(VocabularyEntry),
}

impl From<VocabularyDocument> for Vec<VocabularyEntry> {
    fn from(doc: VocabularyDocument) -> Self {
        match doc {
            VocabularyDocument::Many(entries) => entries,
            VocabularyDocument::One(entry) => vec![entry],
        }
    }
}

fn word(term: &str, hint: &str) -> WordEntry {
    WordEntry { term: term.to_string(), hint: Some(hint.to_string()) }
}

pub static FALLBACK_VOCABULARY: Lazy<Vec<VocabularyEntry>> = Lazy::new(|| {
    vec![VocabularyEntry {
        category: "Cybersecurity".to_string(),
        words: vec![
            word("CAESAR CIPHER", "A substitution cipher that shifts letters by a fixed number"),
            word("CRYPTOGRAPHY", "Secure communication techniques"),
            word("DIGITAL CERTIFICATE", "Proves ownership of a public key"),
            word("OPERATING SYSTEM", "Manages device hardware/software"),
            word("FILE ENCRYPTION AND COMPRESSION", "Secure + reduce file size"),
            word("PATCHES", "Updates fixing vulnerabilities or bugs"),
            word("UPDATE", "Install the latest version of software"),
            word("COMPUTER VIRUS", "Malicious program that can replicate and spread"),
            word("POPUP BLOCKER", "Prevents unwanted pop-up windows"),
        ],
    }]
});

/// Where the active dataset came from.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum VocabularySource {
    Default,
    Fallback,
    File,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
    source: VocabularySource,
}

/// Result of loading the default document: always a usable store, plus a
/// status message when the fallback had to be used.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultLoad {
    pub store: VocabularyStore,
    pub notice: Option<&'static str>,
}

impl VocabularyStore {
    pub fn new(entries: Vec<VocabularyEntry>, source: VocabularySource) -> GameResult<Self> {
        validate_vocabulary(&entries)?;
        Ok(Self { entries, source })
    }

    pub fn fallback() -> Self {
        Self { entries: FALLBACK_VOCABULARY.clone(), source: VocabularySource::Fallback }
    }

    /// Parses and shape-checks a vocabulary document.
    pub fn from_json(text: &str, source: VocabularySource) -> GameResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(value, source)
    }

    fn from_value(value: serde_json::Value, source: VocabularySource) -> GameResult<Self> {
        let doc: VocabularyDocument = serde_json::from_value(value)
            .map_err(|e| GameError::InvalidVocabulary(e.to_string()))?;
        Self::new(doc.into(), source)
    }

    /// Turns the outcome of fetching the default document into a store,
    /// falling back to the built-in dataset on any failure.
    pub fn load_default(fetched: Result<String, String>) -> DefaultLoad {
        let text = match fetched {
            Ok(text) => text,
            Err(err) => {
                log::error!("Failed to load vocab.json: {}", err);
                return DefaultLoad { store: Self::fallback(), notice: Some(FALLBACK_FETCH_MESSAGE) };
            }
        };

        let value = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => value,
            Err(err) => {
                log::error!("Failed to parse vocab.json: {}", err);
                return DefaultLoad { store: Self::fallback(), notice: Some(FALLBACK_FETCH_MESSAGE) };
            }
        };

        match Self::from_value(value, VocabularySource::Default) {
            Ok(store) => DefaultLoad { store, notice: None },
            Err(err) => {
                log::error!("Invalid vocab.json schema: {}", err);
                DefaultLoad { store: Self::fallback(), notice: Some(FALLBACK_SCHEMA_MESSAGE) }
            }
        }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn source(&self) -> VocabularySource {
        self.source
    }

    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    pub fn word_count(&self) -> usize {
        self.entries.iter().map(|e| e.words.len()).sum()
    }

    /// Uniform category, then uniform word within it.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> GameResult<(&VocabularyEntry, &WordEntry)> {
        let entry = self.entries.choose(rng).ok_or(GameError::EmptyVocabulary)?;
        let word = entry.words.choose(rng).ok_or(GameError::EmptyVocabulary)?;
        Ok((entry, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fallback_is_valid() {
        let store = VocabularyStore::fallback();
        assert!(validate_vocabulary(store.entries()).is_ok());
        assert_eq!(store.word_count(), 9);
        assert_eq!(store.source(), VocabularySource::Fallback);
    }

    #[test]
    fn test_single_object_is_normalized() {
        let store = VocabularyStore::from_json(
            r#"{"category": "Animals", "words": [{"term": "cat"}, {"term": "dog", "hint": "barks"}]}"#,
            VocabularySource::File,
        )
        .unwrap();
        assert_eq!(store.category_count(), 1);
        assert_eq!(store.entries()[0].words[1].hint.as_deref(), Some("barks"));
    }

    #[test]
    fn test_bad_documents_are_rejected() {
        assert!(matches!(
            VocabularyStore::from_json("not json", VocabularySource::File),
            Err(GameError::MalformedJson(_))
        ));
        assert!(matches!(
            VocabularyStore::from_json(r#"[{"category": 3, "words": []}]"#, VocabularySource::File),
            Err(GameError::InvalidVocabulary(_))
        ));
        assert!(matches!(
            VocabularyStore::from_json(r#"[{"category": "A", "words": [{"hint": "x"}]}]"#, VocabularySource::File),
            Err(GameError::InvalidVocabulary(_))
        ));
        assert!(matches!(
            VocabularyStore::from_json("[]", VocabularySource::File),
            Err(GameError::InvalidVocabulary(_))
        ));
    }

    #[test]
    fn test_load_default_falls_back() {
        let unreachable = VocabularyStore::load_default(Err("HTTP 404".into()));
        assert_eq!(unreachable.store.source(), VocabularySource::Fallback);
        assert_eq!(unreachable.notice, Some(FALLBACK_FETCH_MESSAGE));

        let bad_shape = VocabularyStore::load_default(Ok(r#"{"words": 1}"#.into()));
        assert_eq!(bad_shape.store.source(), VocabularySource::Fallback);
        assert_eq!(bad_shape.notice, Some(FALLBACK_SCHEMA_MESSAGE));

        let good = VocabularyStore::load_default(Ok(
            r#"[{"category": "Fruit", "words": [{"term": "apple"}]}]"#.into(),
        ));
        assert_eq!(good.store.source(), VocabularySource::Default);
        assert!(good.notice.is_none());
    }

    #[test]
    fn test_pick_random_covers_categories() {
        let store = VocabularyStore::from_json(
            r#"[{"category": "A", "words": [{"term": "one"}]},
                {"category": "B", "words": [{"term": "two"}, {"term": "three"}]}]"#,
            VocabularySource::File,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let (entry, word) = store.pick_random(&mut rng).unwrap();
            assert!(entry.words.contains(word));
            seen.insert(word.term.clone());
        }
        assert_eq!(seen.len(), 3);
    }
}
