//! Health tracking records: issues, weights and wellbeing.
//!
//! # Invariants
//! - Wellbeing scores stay within `0..=100`.
//! - Weights are strictly positive kilograms.

use crate::model::pet::PetId;
use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_WELLBEING_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Reported health concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub pet_id: PetId,
    pub severity: Severity,
    pub symptom: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl Issue {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_symptom(&self.symptom)
    }
}

/// One weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub id: Uuid,
    pub pet_id: PetId,
    pub kg: f64,
    pub measured_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Weight {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_kg(self.kg)
    }
}

/// One wellbeing self-report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellbeingLog {
    pub id: Uuid,
    pub pet_id: PetId,
    /// `0..=100`.
    pub score: u8,
    pub note: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl WellbeingLog {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_score(self.score)
    }
}

/// Direction of the latest wellbeing change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Aggregated wellbeing figures for one pet or for all pets.
///
/// `Default` is the "no data" value returned while disconnected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellbeingStats {
    pub current_score: Option<u8>,
    pub trend: Option<Trend>,
    /// Signed change versus the previous log, in whole percent.
    pub trend_percentage: Option<i32>,
    pub last_update: Option<DateTime<Utc>>,
    pub open_issues_count: u32,
}

pub(crate) fn validate_symptom(symptom: &str) -> Result<(), ValidationError> {
    if symptom.trim().is_empty() {
        return Err(ValidationError::EmptySymptom);
    }
    Ok(())
}

pub(crate) fn validate_kg(kg: f64) -> Result<(), ValidationError> {
    if !kg.is_finite() || kg <= 0.0 {
        return Err(ValidationError::InvalidWeight(kg));
    }
    Ok(())
}

pub(crate) fn validate_score(score: u8) -> Result<(), ValidationError> {
    if score > MAX_WELLBEING_SCORE {
        return Err(ValidationError::ScoreOutOfRange(score));
    }
    Ok(())
}
