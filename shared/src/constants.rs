use std::f64::consts::PI;

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Wheel animation
pub const MIN_SPIN_RADIANS: f64 = 3.0 * PI; // 1.5 full turns
pub const SPIN_RANGE_RADIANS: f64 = 6.0 * PI; // up to 4.5 full turns
pub const MIN_SPIN_DURATION_MS: f64 = 1800.0;
pub const SPIN_DURATION_RANGE_MS: f64 = 800.0;

/// Pointer position in canvas coordinates (clockwise, y-down). 3π/2 is 12 o'clock.
pub const POINTER_ANGLE: f64 = 1.5 * PI;

// Teams
pub const DEFAULT_TEAM_COUNT: usize = 3;
pub const MAX_TEAM_NAME_LENGTH: usize = 24;

// Puzzle
pub const PLACEHOLDER: char = '_';
pub const DEFAULT_CATEGORY: &str = "General";

// Vocabulary
pub const DEFAULT_VOCAB_PATH: &str = "/vocab.json";

// Status messages
pub const SPINNING_MESSAGE: &str = "Spinning...";
pub const NEW_WORD_MESSAGE: &str = "New word loaded.";
pub const NEW_GAME_MESSAGE: &str = "New game. Scores reset.";
pub const VOCABULARY_LOADED_MESSAGE: &str = "Vocabulary loaded.";
pub const NO_HINT_MESSAGE: &str = "No hint.";
pub const FALLBACK_FETCH_MESSAGE: &str = "Using fallback (could not load vocab.json).";
pub const FALLBACK_SCHEMA_MESSAGE: &str = "Using fallback (invalid vocab.json schema).";
pub const INVALID_FILE_MESSAGE: &str = "Could not read JSON. Check the format.";

pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch.to_ascii_uppercase())
}
