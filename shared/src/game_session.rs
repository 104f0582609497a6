use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::{
    is_vowel, NEW_GAME_MESSAGE, NEW_WORD_MESSAGE, NO_HINT_MESSAGE, SPINNING_MESSAGE,
    VOCABULARY_LOADED_MESSAGE,
};
use crate::error::{GameError, GameResult};
use crate::ledger::{Ledger, OutcomeEffect};
use crate::shared_wheel_game::{AnimationStatus, SliceOutcome, SpinPlan, Wheel};
use crate::shared_word_game::Puzzle;
use crate::vocabulary::{VocabularySource, VocabularyStore};

/// Which kind of letter the team is spinning for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinChoice {
    Consonant,
    Vowel,
}

impl SpinChoice {
    pub fn is_vowel(self) -> bool {
        matches!(self, SpinChoice::Vowel)
    }

    fn describe(self) -> &'static str {
        match self {
            SpinChoice::Consonant => "a consonant",
            SpinChoice::Vowel => "a vowel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterResult {
    Hit { letter: char, hits: usize, earned: u32, solved: bool },
    Miss { letter: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub team_names: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let ledger = Ledger::default();
        Self { team_names: ledger.teams().iter().map(|t| t.name.clone()).collect() }
    }
}

/// One game in progress: the only owner of wheel, puzzle, ledger and vocabulary.
#[derive(Debug, Clone)]
pub struct GameSession {
    vocabulary: VocabularyStore,
    puzzle: Puzzle,
    wheel: Wheel,
    ledger: Ledger,
    spin_choice: Option<SpinChoice>,
    used_letters: BTreeSet<char>,
    hint_visible: bool,
    status: String,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(
        config: SessionConfig,
        vocabulary: VocabularyStore,
        rng: &mut R,
    ) -> Self {
        let mut session = Self {
            vocabulary,
            puzzle: Puzzle::empty(),
            wheel: Wheel::new(),
            ledger: Ledger::new(config.team_names),
            spin_choice: None,
            used_letters: BTreeSet::new(),
            hint_visible: false,
            status: String::new(),
        };
        if let Err(err) = session.load_word(rng) {
            session.status = err.to_string();
        }
        session
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    /// Replaces the status line, e.g. with a vocabulary fallback notice.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// `Some(true)` when vowels may be picked, `Some(false)` for consonants,
    /// `None` while no spin outcome is waiting for a letter.
    pub fn enabled_letter_kind(&self) -> Option<bool> {
        if self.wheel.is_spinning() || !self.puzzle.is_in_progress() {
            return None;
        }
        self.ledger.pending().map(|p| p.vowel)
    }

    pub fn is_letter_available(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.enabled_letter_kind() == Some(is_vowel(letter))
            && !self.used_letters.contains(&letter)
    }

    pub fn request_spin<R: Rng + ?Sized>(
        &mut self,
        choice: SpinChoice,
        rng: &mut R,
    ) -> GameResult<SpinPlan> {
        let plan = SpinPlan::random(self.wheel.angle(), rng);
        self.request_spin_with_plan(choice, plan)?;
        Ok(plan)
    }

    /// Starts a spin along a known plan. A spin while letters are still armed
    /// replaces the armed outcome.
    pub fn request_spin_with_plan(&mut self, choice: SpinChoice, plan: SpinPlan) -> GameResult<()> {
        if self.wheel.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        if !self.puzzle.is_in_progress() {
            return Err(GameError::NoActivePuzzle);
        }
        self.wheel.start_planned(plan)?;
        self.ledger.clear_pending();
        self.spin_choice = Some(choice);
        self.status = SPINNING_MESSAGE.to_string();
        Ok(())
    }

    /// Advances the wheel animation; applies the outcome when it stops.
    pub fn tick(&mut self, delta_ms: f64) -> AnimationStatus {
        let status = self.wheel.advance(delta_ms);
        if let AnimationStatus::Finished(outcome) = &status {
            self.apply_spin_outcome(*outcome);
        }
        status
    }

    fn apply_spin_outcome(&mut self, outcome: SliceOutcome) {
        let choice = self.spin_choice.take().unwrap_or(SpinChoice::Consonant);
        let team = self.ledger.active_team().name.clone();

        self.status = match self.ledger.apply_outcome(&outcome.slice, choice.is_vowel()) {
            OutcomeEffect::Bankrupt => format!("{}: Bankrupt! Points reset.", team),
            OutcomeEffect::LoseTurn => format!("{}: Lose Turn.", team),
            OutcomeEffect::PickLetter(context) => format!(
                "{}: Choose {} for {} points each.",
                team,
                choice.describe(),
                context.point_value
            ),
        };
        log::info!("landed on {} ({})", outcome.slice.label, self.status);
    }

    pub fn pick_letter(&mut self, letter: char) -> GameResult<LetterResult> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::NotALetter(letter));
        }
        let letter = letter.to_ascii_uppercase();

        if !self.puzzle.is_in_progress() {
            return Err(GameError::NoActivePuzzle);
        }
        if self.wheel.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        let pending = self.ledger.pending().ok_or(GameError::NoPendingSpin)?;
        if is_vowel(letter) != pending.vowel {
            return Err(GameError::WrongLetterKind { expected_vowel: pending.vowel });
        }
        if !self.used_letters.insert(letter) {
            return Err(GameError::LetterAlreadyUsed(letter));
        }

        let hits = self.puzzle.reveal_letter(letter);
        if hits == 0 {
            self.status = format!("No '{}'. Next turn.", letter);
            self.ledger.advance_turn();
            return Ok(LetterResult::Miss { letter });
        }

        let earned = self.ledger.award_points(hits);
        let solved = self.puzzle.is_solved();
        if solved {
            self.status = format!(
                "{} solved the word: {}!",
                self.ledger.active_team().name,
                self.puzzle.word()
            );
            self.ledger.clear_pending();
        } else {
            self.status = format!("Great! Revealed {} '{}'. +{} points.", hits, letter, earned);
        }
        Ok(LetterResult::Hit { letter, hits, earned, solved })
    }

    pub fn solve(&mut self, guess: &str) -> GameResult<SolveResult> {
        if self.wheel.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        if !self.puzzle.is_in_progress() {
            return Err(GameError::NoActivePuzzle);
        }

        if self.puzzle.solve_with_guess(guess) {
            self.ledger.clear_pending();
            self.status = format!("Correct! {} solved the word.", self.ledger.active_team().name);
            Ok(SolveResult::Correct)
        } else {
            self.status = "Incorrect. Next turn.".to_string();
            self.ledger.advance_turn();
            Ok(SolveResult::Incorrect)
        }
    }

    pub fn new_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<()> {
        if self.wheel.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        self.load_word(rng)?;
        self.status = NEW_WORD_MESSAGE.to_string();
        Ok(())
    }

    /// Zeroes every score, hands the turn back to the first team and deals a word.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<()> {
        if self.wheel.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        self.load_word(rng)?;
        self.ledger.reset_scores();
        self.status = NEW_GAME_MESSAGE.to_string();
        Ok(())
    }

    fn load_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<()> {
        let (entry, word) = self.vocabulary.pick_random(rng)?;
        self.puzzle = Puzzle::from_entry(&entry.category, word);
        self.used_letters.clear();
        self.ledger.clear_pending();
        self.wheel.clear_highlight();
        self.hint_visible = false;
        log::debug!("new puzzle in category {}", self.puzzle.category());
        Ok(())
    }

    /// Shows or hides the hint. A word without a hint always shows "No hint.".
    pub fn toggle_hint(&mut self) -> bool {
        self.hint_visible = self.puzzle.hint().is_none() || !self.hint_visible;
        self.hint_visible
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn hint_text(&self) -> Option<&str> {
        if !self.hint_visible {
            return None;
        }
        Some(self.puzzle.hint().unwrap_or(NO_HINT_MESSAGE))
    }

    /// Swaps in a new dataset and deals a word from it.
    pub fn replace_vocabulary<R: Rng + ?Sized>(
        &mut self,
        vocabulary: VocabularyStore,
        rng: &mut R,
    ) -> GameResult<()> {
        if self.wheel.is_spinning() {
            return Err(GameError::AlreadySpinning);
        }
        self.vocabulary = vocabulary;
        self.load_word(rng)?;
        self.status = VOCABULARY_LOADED_MESSAGE.to_string();
        Ok(())
    }

    /// Loads a user-supplied document. On any error the current dataset and
    /// puzzle are left as they were.
    pub fn load_vocabulary_json<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> GameResult<()> {
        let store = VocabularyStore::from_json(text, VocabularySource::File)?;
        self.replace_vocabulary(store, rng)
    }

    pub fn rename_team(&mut self, index: usize, name: &str) -> bool {
        self.ledger.rename_team(index, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::POINTER_ANGLE;
    use crate::shared_wheel_game::{slice_angle, WHEEL_SLICES};
    use crate::vocabulary::{VocabularyEntry, WordEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    const BANKRUPT: usize = 10;
    const LOSE_TURN: usize = 9;
    const HUNDRED: usize = 1;

    fn store(term: &str, hint: Option<&str>) -> VocabularyStore {
        VocabularyStore::new(
            vec![VocabularyEntry {
                category: "Pets".to_string(),
                words: vec![WordEntry { term: term.to_string(), hint: hint.map(String::from) }],
            }],
            VocabularySource::File,
        )
        .unwrap()
    }

    fn session(term: &str) -> (GameSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(5);
        let session = GameSession::new(SessionConfig::default(), store(term, None), &mut rng);
        (session, rng)
    }

    /// Spins the wheel so it stops in the middle of `index`.
    fn land_on(session: &mut GameSession, index: usize, choice: SpinChoice) -> SliceOutcome {
        let current = session.wheel().angle();
        let wanted = POINTER_ANGLE - (index as f64 + 0.5) * slice_angle();
        let target = 4.0 * PI + (wanted - current).rem_euclid(2.0 * PI);
        let plan = SpinPlan { start_angle: current, target, duration_ms: 2000.0 };
        session.request_spin_with_plan(choice, plan).unwrap();
        loop {
            if let AnimationStatus::Finished(outcome) = session.tick(16.0) {
                return outcome;
            }
        }
    }

    #[test]
    fn test_correct_letter_scores() {
        let (mut s, _) = session("cat");
        let outcome = land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        assert_eq!(outcome.index, HUNDRED);
        assert_eq!(s.wheel().last_resolved_index(), Some(HUNDRED));
        assert_eq!(s.status(), "Team 1: Choose a consonant for 100 points each.");

        let result = s.pick_letter('c').unwrap();
        assert_eq!(result, LetterResult::Hit { letter: 'C', hits: 1, earned: 100, solved: false });
        assert_eq!(s.ledger().active_team().score, 100);
        assert_eq!(s.puzzle().masked(), "C__");
        assert_eq!(s.ledger().active_index(), 0);
        // Same team keeps picking consonants at the same value.
        assert_eq!(s.enabled_letter_kind(), Some(false));
    }

    #[test]
    fn test_solving_by_letters_keeps_turn() {
        let (mut s, _) = session("CAT");
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        s.pick_letter('C').unwrap();
        s.pick_letter('T').unwrap();
        land_on(&mut s, HUNDRED, SpinChoice::Vowel);
        let result = s.pick_letter('A').unwrap();
        assert!(matches!(result, LetterResult::Hit { solved: true, .. }));
        assert!(s.puzzle().is_solved());
        assert_eq!(s.ledger().active_index(), 0);
        assert_eq!(s.ledger().active_team().score, 300);
        assert_eq!(s.status(), "Team 1 solved the word: CAT!");
        assert_eq!(s.enabled_letter_kind(), None);
    }

    #[test]
    fn test_bankrupt_resets_active_score() {
        let (mut s, _) = session("CAT");
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        s.pick_letter('C').unwrap();
        land_on(&mut s, BANKRUPT, SpinChoice::Consonant);
        assert_eq!(s.ledger().teams()[0].score, 0);
        assert_eq!(s.ledger().active_index(), 1);
        assert_eq!(s.status(), "Team 1: Bankrupt! Points reset.");
    }

    #[test]
    fn test_lose_turn_keeps_score() {
        let (mut s, _) = session("CAT");
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        s.pick_letter('T').unwrap();
        land_on(&mut s, LOSE_TURN, SpinChoice::Vowel);
        assert_eq!(s.ledger().teams()[0].score, 100);
        assert_eq!(s.ledger().active_index(), 1);
        assert_eq!(s.status(), "Team 1: Lose Turn.");
        assert_eq!(s.pick_letter('A'), Err(GameError::NoPendingSpin));
    }

    #[test]
    fn test_miss_passes_turn() {
        let (mut s, _) = session("CAT");
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        assert_eq!(s.pick_letter('z').unwrap(), LetterResult::Miss { letter: 'Z' });
        assert_eq!(s.ledger().active_index(), 1);
        assert_eq!(s.ledger().teams()[0].score, 0);
        assert_eq!(s.status(), "No 'Z'. Next turn.");
    }

    #[test]
    fn test_letter_rules() {
        let (mut s, _) = session("CAT");
        assert_eq!(s.pick_letter('C'), Err(GameError::NoPendingSpin));
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        assert_eq!(s.pick_letter('1'), Err(GameError::NotALetter('1')));
        assert_eq!(
            s.pick_letter('A'),
            Err(GameError::WrongLetterKind { expected_vowel: false })
        );
        s.pick_letter('C').unwrap();
        assert_eq!(s.pick_letter('c'), Err(GameError::LetterAlreadyUsed('C')));
        assert!(!s.is_letter_available('C'));
        assert!(s.is_letter_available('T'));
    }

    #[test]
    fn test_spin_rules() {
        let (mut s, mut rng) = session("CAT");
        s.request_spin(SpinChoice::Consonant, &mut rng).unwrap();
        assert_eq!(s.status(), SPINNING_MESSAGE);
        assert_eq!(
            s.request_spin(SpinChoice::Vowel, &mut rng),
            Err(GameError::AlreadySpinning)
        );
        assert_eq!(s.solve("CAT"), Err(GameError::AlreadySpinning));
        assert_eq!(s.enabled_letter_kind(), None);

        while !matches!(s.tick(50.0), AnimationStatus::Finished(_)) {}
        assert!(s.solve("cat").is_ok());
        assert_eq!(
            s.request_spin(SpinChoice::Consonant, &mut rng),
            Err(GameError::NoActivePuzzle)
        );
    }

    #[test]
    fn test_highlight_matches_scoring() {
        let (mut s, mut rng) = session("FILE ENCRYPTION AND COMPRESSION");
        for _ in 0..50 {
            s.request_spin(SpinChoice::Consonant, &mut rng).unwrap();
            let outcome = loop {
                if let AnimationStatus::Finished(outcome) = s.tick(16.0) {
                    break outcome;
                }
            };
            assert_eq!(s.wheel().last_resolved_index(), Some(outcome.index));
            assert_eq!(outcome.slice, WHEEL_SLICES[outcome.index]);
        }
    }

    #[test]
    fn test_solve_attempts() {
        let (mut s, _) = session("Computer Virus");
        assert_eq!(s.solve("computer").unwrap(), SolveResult::Incorrect);
        assert_eq!(s.ledger().active_index(), 1);
        assert_eq!(s.status(), "Incorrect. Next turn.");

        assert_eq!(s.solve(" computer virus ").unwrap(), SolveResult::Correct);
        assert!(s.puzzle().is_solved());
        assert_eq!(s.puzzle().masked(), "COMPUTER VIRUS");
        assert_eq!(s.status(), "Correct! Team 2 solved the word.");
        assert_eq!(s.solve("computer virus"), Err(GameError::NoActivePuzzle));
    }

    #[test]
    fn test_new_word_resets_round() {
        let (mut s, mut rng) = session("CAT");
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        s.pick_letter('C').unwrap();
        s.new_word(&mut rng).unwrap();
        assert_eq!(s.status(), NEW_WORD_MESSAGE);
        assert!(s.used_letters().is_empty());
        assert_eq!(s.puzzle().masked(), "___");
        assert_eq!(s.wheel().last_resolved_index(), None);
        assert_eq!(s.enabled_letter_kind(), None);
        assert_eq!(s.ledger().teams()[0].score, 100);
    }

    #[test]
    fn test_padded_vocabulary_term_can_be_solved() {
        let (mut s, mut rng) = session("dog");
        s.load_vocabulary_json(r#"[{"category": "Pets", "words": [{"term": " cat "}]}]"#, &mut rng)
            .unwrap();
        assert_eq!(s.puzzle().word(), "CAT");
        assert_eq!(s.solve("cat").unwrap(), SolveResult::Correct);
        assert!(s.puzzle().is_solved());
        assert_eq!(s.ledger().active_index(), 0);
    }

    #[test]
    fn test_new_game_resets_scores() {
        let (mut s, mut rng) = session("CAT");
        land_on(&mut s, HUNDRED, SpinChoice::Consonant);
        s.pick_letter('C').unwrap();
        s.pick_letter('Z').unwrap();
        assert_eq!(s.ledger().active_index(), 1);

        s.new_game(&mut rng).unwrap();
        assert_eq!(s.status(), NEW_GAME_MESSAGE);
        assert!(s.ledger().teams().iter().all(|t| t.score == 0));
        assert_eq!(s.ledger().active_index(), 0);
        assert!(s.used_letters().is_empty());
    }

    #[test]
    fn test_hint_toggle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = GameSession::new(SessionConfig::default(), store("cat", Some("Meows")), &mut rng);
        assert_eq!(s.hint_text(), None);
        assert!(s.toggle_hint());
        assert!(s.hint_visible());
        assert_eq!(s.hint_text(), Some("Meows"));
        assert!(!s.toggle_hint());
        assert_eq!(s.hint_text(), None);

        let (mut bare, _) = session("dog");
        assert!(bare.toggle_hint());
        assert!(bare.toggle_hint());
        assert_eq!(bare.hint_text(), Some(NO_HINT_MESSAGE));
    }

    #[test]
    fn test_bad_vocabulary_file_preserves_state() {
        let (mut s, mut rng) = session("CAT");
        let before = s.puzzle().clone();
        assert!(s.load_vocabulary_json("{oops", &mut rng).is_err());
        assert!(s.load_vocabulary_json(r#"[{"category": "X", "words": []}]"#, &mut rng).is_err());
        assert_eq!(s.puzzle(), &before);
        assert_eq!(s.vocabulary().source(), VocabularySource::File);

        s.load_vocabulary_json(
            r#"{"category": "Birds", "words": [{"term": "owl"}]}"#,
            &mut rng,
        )
        .unwrap();
        assert_eq!(s.puzzle().word(), "OWL");
        assert_eq!(s.puzzle().category(), "Birds");
        assert_eq!(s.status(), VOCABULARY_LOADED_MESSAGE);
    }
}
