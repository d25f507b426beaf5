use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::pet::model::Pet;
use crate::domain::pet::repository::PetRepository;
use crate::utils::errors::ApiError;

/// Keeps admitted pets in process memory.
#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<HashMap<Uuid, Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pets.read().map(|pets| pets.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {

    async fn create_pet(&self, pet: Pet) -> Result<Pet, ApiError> {
        let mut pets = self
            .pets
            .write()
            .map_err(|e| ApiError::Repository(e.to_string()))?;

        if pets.contains_key(&pet.id) {
            return Err(ApiError::Conflict(format!("Pet with id {} already exists", pet.id)));
        }

        pets.insert(pet.id, pet.clone());
        Ok(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pet::model::{Gender, Specie};

    fn pet() -> Pet {
        Pet {
            id: Uuid::new_v4(),
            name: "Rex".to_string(),
            profile_photo: "eA==".to_string(),
            photos: vec![],
            special_cares: vec![],
            specie: Specie::Dog,
            gender: Gender::Male,
            castrated: true,
            birth_date: None,
            approximate_age: Some(3.0),
        }
    }

    #[tokio::test]
    async fn test_create_pet() {
        let repo = InMemoryPetRepository::new();
        assert!(repo.is_empty());

        let pet = pet();
        let created = repo.create_pet(pet.clone()).await.unwrap();

        assert_eq!(created, pet);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_distinct_pets() {
        let repo = InMemoryPetRepository::new();

        repo.create_pet(pet()).await.unwrap();
        repo.create_pet(pet()).await.unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_conflict() {
        let repo = InMemoryPetRepository::new();
        let pet = pet();

        repo.create_pet(pet.clone()).await.unwrap();
        let result = repo.create_pet(pet).await;

        match result {
            Err(ApiError::Conflict(_)) => {}
            other => panic!("Expected Conflict, got {:?}", other),
        }
        assert_eq!(repo.len(), 1);
    }
}
