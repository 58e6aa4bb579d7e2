mod file_repository;
mod in_memory;

pub use file_repository::{FileVehicleRepository, DEFAULT_VEHICLES_FILE};
pub use in_memory::InMemoryVehicleRepository;
