use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

use crate::constants::MAX_TEAM_NAME_LENGTH;
use crate::vocabulary::VocabularyEntry;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Shape check applied to every vocabulary document, whichever way it was loaded.
pub fn validate_vocabulary(entries: &[VocabularyEntry]) -> Result<(), ValidationError> {
    if entries.is_empty() {
        return Err(invalid("empty_vocabulary", "no categories".to_string()));
    }
    for (i, entry) in entries.iter().enumerate() {
        if entry.words.is_empty() {
            return Err(invalid(
                "empty_category",
                format!("category {} ({:?}) has no words", i, entry.category),
            ));
        }
        if let Some(j) = entry.words.iter().position(|w| w.term.trim().is_empty()) {
            return Err(invalid(
                "blank_term",
                format!("word {} in category {:?} has a blank term", j, entry.category),
            ));
        }
    }
    Ok(())
}

/// Trims a team name and collapses inner whitespace. Empty input is rejected.
pub fn normalize_team_name(name: &str) -> Result<String, ValidationError> {
    let collapsed = WHITESPACE_RUN.replace_all(name.trim(), " ");
    if collapsed.is_empty() {
        return Err(ValidationError::new("blank_team_name"));
    }
    Ok(collapsed.chars().take(MAX_TEAM_NAME_LENGTH).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::WordEntry;

    fn entry(category: &str, terms: &[&str]) -> VocabularyEntry {
        VocabularyEntry {
            category: category.to_string(),
            words: terms
                .iter()
                .map(|t| WordEntry { term: t.to_string(), hint: None })
                .collect(),
        }
    }

    #[test]
    fn test_validate_vocabulary() {
        assert!(validate_vocabulary(&[entry("Animals", &["cat", "dog"])]).is_ok());
        assert_eq!(validate_vocabulary(&[]).unwrap_err().code, "empty_vocabulary");
        assert_eq!(
            validate_vocabulary(&[entry("Animals", &["cat"]), entry("Empty", &[])])
                .unwrap_err()
                .code,
            "empty_category"
        );
        assert_eq!(
            validate_vocabulary(&[entry("Animals", &["cat", "  "])]).unwrap_err().code,
            "blank_term"
        );
    }

    #[test]
    fn test_normalize_team_name() {
        assert_eq!(normalize_team_name("  Red   Team ").unwrap(), "Red Team");
        assert!(normalize_team_name(" \t ").is_err());
        let long = "x".repeat(100);
        assert_eq!(normalize_team_name(&long).unwrap().len(), MAX_TEAM_NAME_LENGTH);
    }
}
