//! Per-request preferences and their validation.
//!
//! `Preferences` is only ever built through `TryFrom<PreferenceForm>` or
//! `TryFrom<PreferenceRequest>`, so the ranker can assume every field is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::models::{KitType, SkillLevel, Space};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("unknown {field} '{value}' (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("budget must be a non-negative whole number, got '{0}'")]
    InvalidBudget(String),

    #[error("genre cannot be empty")]
    EmptyGenre,

    #[error("quiet_priority must be yes or no, got '{0}'")]
    InvalidQuietPriority(String),
}

/// One user's requirements for a single recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub kit_type: KitType,
    pub budget: u32,
    pub space: Space,
    pub skill: SkillLevel,
    pub genre: String,
    pub quiet_priority: bool,
}

/// Raw fields exactly as the HTML form posts them.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceForm {
    pub kit_type: String,
    pub budget: String,
    pub space: String,
    pub skill: String,
    pub genre: String,
    pub quiet_priority: String,
}

/// JSON body of the recommendation API. Enum fields stay strings so they go
/// through the same case-insensitive parsing as the form.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceRequest {
    pub kit_type: String,
    pub budget: i64,
    pub space: String,
    pub skill: String,
    pub genre: String,
    pub quiet_priority: bool,
}

impl TryFrom<PreferenceRequest> for Preferences {
    type Error = PreferenceError;

    fn try_from(req: PreferenceRequest) -> Result<Self, Self::Error> {
        Ok(Preferences {
            kit_type: req.kit_type.parse()?,
            budget: u32::try_from(req.budget)
                .map_err(|_| PreferenceError::InvalidBudget(req.budget.to_string()))?,
            space: req.space.parse()?,
            skill: req.skill.parse()?,
            genre: normalize_genre(&req.genre)?,
            quiet_priority: req.quiet_priority,
        })
    }
}

impl TryFrom<PreferenceForm> for Preferences {
    type Error = PreferenceError;

    fn try_from(form: PreferenceForm) -> Result<Self, Self::Error> {
        Ok(Preferences {
            kit_type: form.kit_type.parse()?,
            budget: parse_budget(&form.budget)?,
            space: form.space.parse()?,
            skill: form.skill.parse()?,
            genre: normalize_genre(&form.genre)?,
            quiet_priority: parse_yes_no(&form.quiet_priority)?,
        })
    }
}

fn parse_budget(raw: &str) -> Result<u32, PreferenceError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| PreferenceError::InvalidBudget(raw.trim().to_string()))
}

fn normalize_genre(raw: &str) -> Result<String, PreferenceError> {
    let genre = raw.trim().to_lowercase();
    if genre.is_empty() {
        return Err(PreferenceError::EmptyGenre);
    }
    Ok(genre)
}

fn parse_yes_no(raw: &str) -> Result<bool, PreferenceError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" => Ok(true),
        "no" | "false" | "off" => Ok(false),
        _ => Err(PreferenceError::InvalidQuietPriority(raw.trim().to_string())),
    }
}
