//! DTOs for games_sea adapter.

use serde::Deserialize;

use crate::errors::domain::DomainError;

/// DTO for inserting a catalog entry (catalog import and test seeding).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_players: u32,
    pub max_players: u32,
    pub avg_duration: u32,
    #[serde(default)]
    pub picture: String,
}

impl GameCreate {
    pub fn new(name: impl Into<String>, min_players: u32, max_players: u32, avg_duration: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            min_players,
            max_players,
            avg_duration,
            picture: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = picture.into();
        self
    }

    /// Check the catalog invariants before anything is written.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if self.min_players == 0 || self.max_players == 0 || self.avg_duration == 0 {
            return Err(DomainError::validation(
                "min_players, max_players and avg_duration must be positive",
            ));
        }
        if self.min_players > self.max_players {
            return Err(DomainError::validation(format!(
                "min_players ({}) exceeds max_players ({})",
                self.min_players, self.max_players
            )));
        }
        // Stored as INTEGER
        if i32::try_from(self.max_players).is_err() || i32::try_from(self.avg_duration).is_err() {
            return Err(DomainError::validation("numeric field out of range"));
        }
        Ok(())
    }
}
