//! Photo memory model.

use crate::model::pet::PetId;
use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uploaded photo with optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: Uuid,
    pub pet_id: PetId,
    pub image_url: String,
    pub caption: Option<String>,
    pub taken_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Memory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::EmptyImageUrl);
        }
        Ok(())
    }
}

/// Insert shape for a memory whose image has already been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMemory {
    pub pet_id: PetId,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub taken_at: DateTime<Utc>,
}

impl NewMemory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::EmptyImageUrl);
        }
        Ok(())
    }
}
