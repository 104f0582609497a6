use rustrict::CensorStr;

/// Keeps team names shown on the shared screen family friendly.
#[derive(Debug)]
pub struct ProfanityFilter;

impl ProfanityFilter {
    pub fn contains_profanity(text: &str) -> bool {
        text.is_inappropriate()
    }

    /// Returns the name unchanged when it is clean, censored otherwise.
    pub fn clean_team_name(name: &str) -> String {
        if Self::contains_profanity(name) {
            log::info!("censoring team name");
            name.censor()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_names_pass_through() {
        assert_eq!(ProfanityFilter::clean_team_name("Blue Herons"), "Blue Herons");
        assert!(!ProfanityFilter::contains_profanity("Team 2"));
    }

    #[test]
    fn test_profane_names_are_censored() {
        let cleaned = ProfanityFilter::clean_team_name("fuck");
        assert_ne!(cleaned, "fuck");
        assert!(ProfanityFilter::contains_profanity("fuck"));
    }
}
