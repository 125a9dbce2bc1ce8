//! Pet profile and weight use-case service.

use crate::model::health::{validate_kg, Weight};
use crate::model::pet::{NewPet, Pet, PetId, PetPatch};
use crate::repo::error::{DataError, DataResult};
use crate::repo::health_repo::HealthRepository;
use crate::repo::pet_repo::PetRepository;
use crate::service::{log_mutation, log_read};
use chrono::{DateTime, Utc};
use std::time::Instant;
use uuid::Uuid;

/// Use-case service for pets and their weight history.
pub struct PetService<R: PetRepository + HealthRepository> {
    repo: R,
}

impl<R: PetRepository + HealthRepository> PetService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_pets(&self) -> DataResult<Vec<Pet>> {
        log_read("pet_list", self.repo.list_pets())
    }

    pub fn get_pet(&self, id: PetId) -> DataResult<Option<Pet>> {
        log_read("pet_get", self.repo.get_pet(id))
    }

    pub fn create_pet(&self, new_pet: &NewPet) -> DataResult<Pet> {
        let started_at = Instant::now();
        let result = new_pet
            .validate()
            .map_err(DataError::from)
            .and_then(|()| self.repo.create_pet(new_pet));
        log_mutation("pet_create", started_at, result)
    }

    pub fn update_pet(&self, id: PetId, patch: &PetPatch) -> DataResult<Pet> {
        let started_at = Instant::now();
        let result = patch
            .validate()
            .map_err(DataError::from)
            .and_then(|()| self.repo.update_pet(id, patch));
        log_mutation("pet_update", started_at, result)
    }

    pub fn delete_pet(&self, id: PetId) -> DataResult<()> {
        let started_at = Instant::now();
        log_mutation("pet_delete", started_at, self.repo.delete_pet(id))
    }

    /// Weight history, oldest first.
    pub fn list_weights(&self, pet_id: PetId) -> DataResult<Vec<Weight>> {
        log_read("weight_list", self.repo.list_weights(pet_id))
    }

    pub fn latest_weight(&self, pet_id: PetId) -> DataResult<Option<Weight>> {
        log_read("weight_latest", self.repo.latest_weight(pet_id))
    }

    pub fn add_weight(
        &self,
        pet_id: PetId,
        kg: f64,
        measured_at: Option<DateTime<Utc>>,
    ) -> DataResult<Weight> {
        let started_at = Instant::now();
        let result = validate_kg(kg)
            .map_err(DataError::from)
            .and_then(|()| self.repo.add_weight(pet_id, kg, measured_at));
        log_mutation("weight_add", started_at, result)
    }

    pub fn delete_weight(&self, id: Uuid) -> DataResult<()> {
        let started_at = Instant::now();
        log_mutation("weight_delete", started_at, self.repo.delete_weight(id))
    }
}
