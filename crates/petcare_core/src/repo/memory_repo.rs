//! Photo memory data-access contract.

use crate::model::memory::{Memory, NewMemory};
use crate::model::pet::PetId;
use crate::repo::error::DataResult;
use uuid::Uuid;

pub trait MemoryRepository {
    fn list_memories(&self) -> DataResult<Vec<Memory>>;
    fn list_memories_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Memory>>;
    fn upload_memory(&self, new_memory: &NewMemory) -> DataResult<Memory>;
    fn delete_memory(&self, id: Uuid) -> DataResult<()>;
}

impl<T: MemoryRepository + ?Sized> MemoryRepository for &T {
    fn list_memories(&self) -> DataResult<Vec<Memory>> {
        (**self).list_memories()
    }

    fn list_memories_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Memory>> {
        (**self).list_memories_by_pet(pet_id)
    }

    fn upload_memory(&self, new_memory: &NewMemory) -> DataResult<Memory> {
        (**self).upload_memory(new_memory)
    }

    fn delete_memory(&self, id: Uuid) -> DataResult<()> {
        (**self).delete_memory(id)
    }
}
