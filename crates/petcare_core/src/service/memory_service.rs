//! Photo memory use-case service.

use crate::model::memory::{Memory, NewMemory};
use crate::model::pet::PetId;
use crate::repo::error::{DataError, DataResult};
use crate::repo::memory_repo::MemoryRepository;
use crate::service::{log_mutation, log_read};
use std::time::Instant;
use uuid::Uuid;

pub struct MemoryService<R: MemoryRepository> {
    repo: R,
}

impl<R: MemoryRepository> MemoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_memories(&self) -> DataResult<Vec<Memory>> {
        log_read("memory_list", self.repo.list_memories())
    }

    pub fn list_memories_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Memory>> {
        log_read("memory_list_by_pet", self.repo.list_memories_by_pet(pet_id))
    }

    pub fn upload_memory(&self, new_memory: &NewMemory) -> DataResult<Memory> {
        let started_at = Instant::now();
        let result = new_memory
            .validate()
            .map_err(DataError::from)
            .and_then(|()| self.repo.upload_memory(new_memory));
        log_mutation("memory_upload", started_at, result)
    }

    pub fn delete_memory(&self, id: Uuid) -> DataResult<()> {
        let started_at = Instant::now();
        log_mutation("memory_delete", started_at, self.repo.delete_memory(id))
    }
}
