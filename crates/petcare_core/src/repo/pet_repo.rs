//! Pet data-access contract.

use crate::model::pet::{NewPet, Pet, PetId, PetPatch};
use crate::repo::error::DataResult;

/// Repository interface for pet profiles.
pub trait PetRepository {
    fn list_pets(&self) -> DataResult<Vec<Pet>>;
    /// `Ok(None)` when the pet is unknown or no backend is connected.
    fn get_pet(&self, id: PetId) -> DataResult<Option<Pet>>;
    fn create_pet(&self, new_pet: &NewPet) -> DataResult<Pet>;
    fn update_pet(&self, id: PetId, patch: &PetPatch) -> DataResult<Pet>;
    fn delete_pet(&self, id: PetId) -> DataResult<()>;
}

impl<T: PetRepository + ?Sized> PetRepository for &T {
    fn list_pets(&self) -> DataResult<Vec<Pet>> {
        (**self).list_pets()
    }

    fn get_pet(&self, id: PetId) -> DataResult<Option<Pet>> {
        (**self).get_pet(id)
    }

    fn create_pet(&self, new_pet: &NewPet) -> DataResult<Pet> {
        (**self).create_pet(new_pet)
    }

    fn update_pet(&self, id: PetId, patch: &PetPatch) -> DataResult<Pet> {
        (**self).update_pet(id, patch)
    }

    fn delete_pet(&self, id: PetId) -> DataResult<()> {
        (**self).delete_pet(id)
    }
}
