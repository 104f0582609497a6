pub mod constants;
pub mod error;
pub mod game_session;
pub mod ledger;
pub mod profanity;
pub mod shared_wheel_game;
pub mod shared_word_game;
pub mod validation;
pub mod vocabulary;

pub use error::{GameError, GameResult};
pub use game_session::{GameSession, LetterResult, SessionConfig, SolveResult, SpinChoice};
