use thiserror::Error;

/// Reasons a player intent is turned away. A rejected intent never changes the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("The wheel is already spinning")]
    AlreadySpinning,
    #[error("There is no puzzle in progress")]
    NoActivePuzzle,
    #[error("Spin the wheel before picking a letter")]
    NoPendingSpin,
    #[error("Choose {} this turn", letter_kind(.expected_vowel))]
    WrongLetterKind { expected_vowel: bool },
    #[error("'{0}' has already been used")]
    LetterAlreadyUsed(char),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("No vocabulary loaded.")]
    EmptyVocabulary,
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    #[error("Malformed vocabulary JSON: {0}")]
    MalformedJson(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::MalformedJson(err.to_string())
    }
}

impl From<validator::ValidationError> for GameError {
    fn from(err: validator::ValidationError) -> Self {
        let detail = err
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| err.code.to_string());
        GameError::InvalidVocabulary(detail)
    }
}

fn letter_kind(expected_vowel: &bool) -> &'static str {
    if *expected_vowel { "a vowel" } else { "a consonant" }
}

pub type GameResult<T> = Result<T, GameError>;
