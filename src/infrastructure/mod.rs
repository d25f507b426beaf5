pub mod memory;

pub use memory::pet_repository;
