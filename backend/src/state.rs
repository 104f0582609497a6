use std::path::Path;
use std::sync::Arc;

use shared::vocabulary::{VocabularySource, VocabularyStore};

use crate::error::AppError;

/// What the server found at the configured vocabulary path when it started.
#[derive(Debug, Clone, PartialEq)]
pub enum VocabularyFile {
    /// Normalized document body, ready to serve.
    Ready(String),
    Unavailable(String),
    Invalid(String),
}

impl VocabularyFile {
    /// Validates a document with the same shape rules the game applies.
    pub fn from_text(text: &str) -> Self {
        let store = match VocabularyStore::from_json(text, VocabularySource::Default) {
            Ok(store) => store,
            Err(err) => return VocabularyFile::Invalid(err.to_string()),
        };
        match serde_json::to_string(store.entries()) {
            Ok(body) => {
                tracing::info!(
                    "Vocabulary loaded: {} categories, {} words",
                    store.category_count(),
                    store.word_count()
                );
                VocabularyFile::Ready(body)
            }
            Err(err) => VocabularyFile::Invalid(err.to_string()),
        }
    }

    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => {
                let file = Self::from_text(&text);
                if let VocabularyFile::Invalid(reason) = &file {
                    tracing::warn!("{} is not a valid vocabulary: {}", path.display(), reason);
                }
                file
            }
            Err(err) => {
                tracing::warn!("Could not read {}: {}", path.display(), err);
                VocabularyFile::Unavailable(err.to_string())
            }
        }
    }

    pub fn body(&self) -> Result<&str, AppError> {
        match self {
            VocabularyFile::Ready(body) => Ok(body),
            VocabularyFile::Unavailable(reason) => Err(AppError::VocabularyUnavailable(reason.clone())),
            VocabularyFile::Invalid(reason) => Err(AppError::InvalidVocabulary(reason.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub vocabulary: Arc<VocabularyFile>,
}

impl AppState {
    pub fn new(vocabulary: VocabularyFile) -> Self {
        Self { vocabulary: Arc::new(vocabulary) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_is_normalized_to_list() {
        let file = VocabularyFile::from_text(r#"{"category": "Fruit", "words": [{"term": "pear"}]}"#);
        let body = file.body().unwrap();
        assert!(body.starts_with('['));
        assert!(body.contains("\"pear\""));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            VocabularyFile::from_text("[]").body(),
            Err(AppError::InvalidVocabulary(_))
        ));
        assert!(matches!(
            VocabularyFile::from_text("{ nope").body(),
            Err(AppError::InvalidVocabulary(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let file = VocabularyFile::load(Path::new("/definitely/not/here/vocab.json")).await;
        assert!(matches!(file.body(), Err(AppError::VocabularyUnavailable(_))));
    }
}
