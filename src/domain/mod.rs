pub mod pet;

pub use pet::model::{CreatePetRequest, Gender, Pet, Specie};
pub use pet::validation::{validate, validate_at, ValidationResult, Violation, ViolationReason};
