//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The wizard never knows how vehicles
//! are stored, where the session comes from or how routing works.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port here, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `mb-core/ports`.
//! Otherwise, place it in the relevant domain module.

pub mod app_dirs;
mod clock;
pub mod date_input;
pub mod errors;
pub mod file_picker;
pub mod navigation;
pub mod platform;
pub mod session;
pub mod vehicle_repository;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use date_input::DateInputPort;
pub use errors::{
    AppDirsError, DateInputError, FilePickerError, SessionError, VehicleRepositoryError,
};
pub use file_picker::FilePickerPort;
pub use navigation::NavigationPort;
pub use platform::Platform;
pub use session::SessionPort;
pub use vehicle_repository::VehicleRepositoryPort;
