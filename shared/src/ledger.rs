use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TEAM_COUNT;
use crate::profanity::ProfanityFilter;
use crate::shared_wheel_game::{Slice, SliceKind};
use crate::validation::normalize_team_name;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub score: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), score: 0 }
    }
}

/// Points waiting for the next letter pick.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    pub point_value: u32,
    pub vowel: bool,
}

/// What `apply_outcome` did to the turn.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeEffect {
    Bankrupt,
    LoseTurn,
    PickLetter(TurnContext),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ledger {
    teams: Vec<Team>,
    active: usize,
    pending: Option<TurnContext>,
}

fn default_team_name(index: usize) -> String {
    format!("Team {}", index + 1)
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_team_count(DEFAULT_TEAM_COUNT)
    }
}

impl Ledger {
    pub fn with_team_count(count: usize) -> Self {
        let count = count.max(1);
        Self::new((0..count).map(default_team_name).collect())
    }

    /// Builds a ledger from display names; at least one team always exists.
    pub fn new(names: Vec<String>) -> Self {
        let mut teams: Vec<Team> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Team::new(clean_name(i, name)))
            .collect();
        if teams.is_empty() {
            teams.push(Team::new(default_team_name(0)));
        }
        Self { teams, active: 0, pending: None }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_team(&self) -> &Team {
        &self.teams[self.active]
    }

    pub fn pending(&self) -> Option<TurnContext> {
        self.pending
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Passes the turn to the next team, wrapping after the last one.
    pub fn advance_turn(&mut self) {
        self.active = (self.active + 1) % self.teams.len();
        self.pending = None;
    }

    pub fn apply_outcome(&mut self, slice: &Slice, vowel_requested: bool) -> OutcomeEffect {
        match slice.kind {
            SliceKind::Bankrupt => {
                self.teams[self.active].score = 0;
                self.advance_turn();
                OutcomeEffect::Bankrupt
            }
            SliceKind::LoseTurn => {
                self.advance_turn();
                OutcomeEffect::LoseTurn
            }
            SliceKind::Points => {
                let context = TurnContext { point_value: slice.value, vowel: vowel_requested };
                self.pending = Some(context);
                OutcomeEffect::PickLetter(context)
            }
        }
    }

    /// Credits the active team for `hits` revealed letters at the pending value.
    pub fn award_points(&mut self, hits: usize) -> u32 {
        let value = self.pending.map(|p| p.point_value).unwrap_or(0);
        let earned = value.saturating_mul(u32::try_from(hits).unwrap_or(u32::MAX));
        let team = &mut self.teams[self.active];
        team.score = team.score.saturating_add(earned);
        earned
    }

    pub fn rename_team(&mut self, index: usize, name: &str) -> bool {
        match self.teams.get_mut(index) {
            Some(team) => {
                team.name = clean_name(index, name);
                true
            }
            None => false,
        }
    }

    pub fn reset_scores(&mut self) {
        for team in &mut self.teams {
            team.score = 0;
        }
        self.active = 0;
        self.pending = None;
    }
}

fn clean_name(index: usize, name: &str) -> String {
    normalize_team_name(name)
        .map(|n| ProfanityFilter::clean_team_name(&n))
        .unwrap_or_else(|_| default_team_name(index))
}
