use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATEGORY, PLACEHOLDER};
use crate::vocabulary::WordEntry;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    Empty,
    InProgress,
    Solved,
}

/// One board position. Spaces are never guessable and start revealed.
/// `Locked` is a hidden symbol (digit, punctuation) that only a solve uncovers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Space,
    Hidden,
    Locked,
    Revealed(char),
}

impl Tile {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Tile::Hidden | Tile::Locked)
    }

    pub fn display_char(&self) -> char {
        match self {
            Tile::Space => ' ',
            Tile::Hidden | Tile::Locked => PLACEHOLDER,
            Tile::Revealed(ch) => *ch,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Puzzle {
    word: Vec<char>,
    mask: Vec<Tile>,
    category: String,
    hint: Option<String>,
    status: PuzzleStatus,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::empty()
    }
}

/// Uppercases a term or guess so matching is case-insensitive.
pub fn normalize_word(text: &str) -> String {
    text.to_uppercase()
}

impl Puzzle {
    pub fn empty() -> Self {
        Self {
            word: Vec::new(),
            mask: Vec::new(),
            category: DEFAULT_CATEGORY.to_string(),
            hint: None,
            status: PuzzleStatus::Empty,
        }
    }

    /// Builds an in-progress puzzle from a vocabulary word.
    pub fn from_entry(category: &str, entry: &WordEntry) -> Self {
        let word: Vec<char> = normalize_word(entry.term.trim()).chars().collect();
        let mask = word
            .iter()
            .map(|&ch| match ch {
                ' ' => Tile::Space,
                c if c.is_ascii_alphabetic() => Tile::Hidden,
                _ => Tile::Locked,
            })
            .collect();
        let category = if category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_string()
        };
        let hint = entry
            .hint
            .as_ref()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        let mut puzzle = Self { word, mask, category, hint, status: PuzzleStatus::InProgress };
        puzzle.refresh_status();
        puzzle
    }

    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == PuzzleStatus::Solved
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == PuzzleStatus::InProgress
    }

    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.mask
    }

    /// The board as text, `_` for every hidden letter.
    pub fn masked(&self) -> String {
        self.mask.iter().map(Tile::display_char).collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.mask.iter().filter(|t| t.is_hidden()).count()
    }

    /// Reveals every hidden occurrence of `letter` and returns how many were uncovered.
    /// Zero means the letter is absent or already showing.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        if self.status != PuzzleStatus::InProgress {
            return 0;
        }
        let letter = letter.to_ascii_uppercase();
        let mut hits = 0;
        for (tile, &ch) in self.mask.iter_mut().zip(self.word.iter()) {
            if ch == letter && *tile == Tile::Hidden {
                *tile = Tile::Revealed(ch);
                hits += 1;
            }
        }
        if hits > 0 {
            self.refresh_status();
        }
        hits
    }

    /// Accepts only an exact match of the whole phrase, ignoring case and
    /// surrounding whitespace. Nothing changes on a wrong guess.
    pub fn solve_with_guess(&mut self, guess: &str) -> bool {
        if self.status != PuzzleStatus::InProgress {
            return false;
        }
        if normalize_word(guess.trim()) != self.word() {
            return false;
        }
        self.reveal_all();
        true
    }

    pub fn reveal_all(&mut self) {
        for (tile, &ch) in self.mask.iter_mut().zip(self.word.iter()) {
            if tile.is_hidden() {
                *tile = Tile::Revealed(ch);
            }
        }
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        if self.status != PuzzleStatus::Empty && self.hidden_count() == 0 {
            self.status = PuzzleStatus::Solved;
        }
    }
}
