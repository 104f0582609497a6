pub mod use_vocabulary;

pub use use_vocabulary::use_default_vocabulary;
