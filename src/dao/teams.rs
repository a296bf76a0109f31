//! Read-only access to the team dataset backing every request.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Result alias for dataset operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised while reading or validating the team dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dataset file could not be read.
    #[error("Teams data file not found")]
    Unavailable(#[source] std::io::Error),
    /// The dataset file is not well-formed JSON.
    #[error("Invalid JSON data")]
    Malformed(#[source] serde_json::Error),
    /// A record violates the dataset invariants.
    #[error("invalid team record {id}: {message}")]
    InvalidRecord {
        /// Identifier of the offending record.
        id: u32,
        /// Human-readable violation summary.
        message: String,
    },
    /// Two records share the same identifier.
    #[error("duplicate team id {0}")]
    DuplicateId(u32),
}

/// NFL conference a team belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Conference {
    /// American Football Conference.
    AFC,
    /// National Football Conference.
    NFC,
}

impl Conference {
    /// Wire representation of the conference.
    pub fn as_str(self) -> &'static str {
        match self {
            Conference::AFC => "AFC",
            Conference::NFC => "NFC",
        }
    }
}

/// Division within a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Division {
    /// Northern division.
    North,
    /// Southern division.
    South,
    /// Eastern division.
    East,
    /// Western division.
    West,
}

impl Division {
    /// Wire representation of the division.
    pub fn as_str(self) -> &'static str {
        match self {
            Division::North => "North",
            Division::South => "South",
            Division::East => "East",
            Division::West => "West",
        }
    }
}

/// The three brand colors of a team, each a `#rrggbb` string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamColors {
    /// Dominant brand color.
    pub primary: String,
    /// Supporting brand color.
    pub secondary: String,
    /// Highlight color.
    pub accent: String,
}

/// A single team record as stored in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct Team {
    /// Unique, stable identifier.
    pub id: u32,
    /// Full franchise name.
    pub name: String,
    /// Home city or region.
    pub city: String,
    /// Mascot used for shape and motif lookups.
    pub mascot: String,
    /// Conference membership.
    pub conference: Conference,
    /// Division membership.
    pub division: Division,
    /// Brand colors.
    #[validate(nested)]
    pub colors: TeamColors,
    /// Founding year.
    pub founded: i32,
    /// Logo URL; absent or empty triggers placeholder synthesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    /// First character of the mascot, used for placeholder and badge text.
    pub fn initial(&self) -> char {
        self.mascot.chars().next().unwrap_or('?')
    }
}

/// On-disk document shape: `{"teams": [...]}`.
#[derive(Debug, Deserialize)]
struct TeamDocument {
    teams: Vec<Team>,
}

/// Handle on the dataset file. The file is re-read on every load so the
/// process stays stateless across requests.
#[derive(Debug, Clone)]
pub struct TeamStore {
    path: PathBuf,
}

impl TeamStore {
    /// Create a store for the given dataset path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the dataset on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse, and validate the full team set.
    pub async fn load(&self) -> StoreResult<Vec<Team>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::Unavailable)?;
        let document: TeamDocument =
            serde_json::from_str(&contents).map_err(StoreError::Malformed)?;

        let mut seen = HashSet::new();
        for team in &document.teams {
            if !seen.insert(team.id) {
                return Err(StoreError::DuplicateId(team.id));
            }
            team.validate().map_err(|err| StoreError::InvalidRecord {
                id: team.id,
                message: err.to_string(),
            })?;
        }

        Ok(document.teams)
    }
}
