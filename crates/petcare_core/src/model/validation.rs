//! Record validation errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons for insert/update payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Event title is empty after trimming.
    EmptyEventTitle,
    /// Pet name is empty after trimming.
    EmptyPetName,
    /// Issue symptom is empty after trimming.
    EmptySymptom,
    /// Weight must be a finite, strictly positive number of kilograms.
    InvalidWeight(f64),
    /// Wellbeing score is outside `0..=100`.
    ScoreOutOfRange(u8),
    /// Memory image URL is empty after trimming.
    EmptyImageUrl,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEventTitle => write!(f, "event title must not be empty"),
            Self::EmptyPetName => write!(f, "pet name must not be empty"),
            Self::EmptySymptom => write!(f, "issue symptom must not be empty"),
            Self::InvalidWeight(kg) => write!(f, "weight must be a positive number, got {kg}"),
            Self::ScoreOutOfRange(score) => {
                write!(f, "wellbeing score must be within 0..=100, got {score}")
            }
            Self::EmptyImageUrl => write!(f, "memory image url must not be empty"),
        }
    }
}

impl Error for ValidationError {}
