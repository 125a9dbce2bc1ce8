//! Pet profile model.
//!
//! # Responsibility
//! - Define the pet record shown by pet cards and used as event owner.
//! - Derive simple display fields (age, initials) from stored data.
//!
//! # Invariants
//! - `name` is never empty once validated.
//! - Age is derived, never stored.

use crate::model::validation::ValidationError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one pet.
pub type PetId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Pet profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub sex: Option<Sex>,
    /// Calendar date only; serialized as `YYYY-MM-DD`.
    pub birthdate: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Pet {
    pub fn from_new(id: PetId, new_pet: NewPet, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_pet.name,
            species: new_pet.species,
            breed: new_pet.breed,
            sex: new_pet.sex,
            birthdate: new_pet.birthdate,
            avatar_url: new_pet.avatar_url,
            created_at,
        }
    }

    /// Whole years elapsed between `birthdate` and `today`.
    ///
    /// Returns `None` when the birthdate is unknown or lies after `today`.
    pub fn age_years(&self, today: NaiveDate) -> Option<u32> {
        let birthdate = self.birthdate?;
        if birthdate > today {
            return None;
        }
        let mut years = today.year() - birthdate.year();
        if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// Up to two uppercase initials taken from whitespace-separated words.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn apply_patch(&mut self, patch: &PetPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(breed) = &patch.breed {
            self.breed = Some(breed.clone());
        }
        if let Some(sex) = patch.sex {
            self.sex = Some(sex);
        }
        if let Some(birthdate) = patch.birthdate {
            self.birthdate = Some(birthdate);
        }
        if let Some(avatar_url) = &patch.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// Insert shape for a new pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewPet {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
            breed: None,
            sex: None,
            birthdate: None,
            avatar_url: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetPatch {
    pub name: Option<String>,
    pub species: Option<Species>,
    pub breed: Option<String>,
    pub sex: Option<Sex>,
    pub birthdate: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

impl PetPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyPetName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{NewPet, Pet, Species};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn pet_born(birthdate: Option<NaiveDate>) -> Pet {
        let mut new_pet = NewPet::new("Rex", Species::Dog);
        new_pet.birthdate = birthdate;
        Pet::from_new(Uuid::new_v4(), new_pet, Utc::now())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn age_counts_only_completed_years() {
        let pet = pet_born(Some(date(2020, 10, 18)));
        assert_eq!(pet.age_years(date(2026, 10, 17)), Some(5));
        assert_eq!(pet.age_years(date(2026, 10, 18)), Some(6));
    }

    #[test]
    fn age_is_none_without_or_with_future_birthdate() {
        assert_eq!(pet_born(None).age_years(date(2026, 1, 1)), None);
        assert_eq!(
            pet_born(Some(date(2027, 1, 1))).age_years(date(2026, 1, 1)),
            None
        );
    }

    #[test]
    fn initials_take_first_two_words() {
        let mut pet = pet_born(None);
        pet.name = "miss kitty cat".to_string();
        assert_eq!(pet.initials(), "MK");
        pet.name = "  ".to_string();
        assert_eq!(pet.initials(), "");
    }
}
