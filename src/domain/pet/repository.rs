use async_trait::async_trait;

use crate::{domain::pet::model::Pet, utils::errors::ApiError};

#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn create_pet(&self, pet: Pet) -> Result<Pet, ApiError>;
}
