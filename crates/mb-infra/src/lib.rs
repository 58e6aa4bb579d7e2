pub mod session;
pub mod time;
pub mod vehicle;

pub use session::{FileSessionRepository, StaticSession};
pub use time::SystemClock;
pub use vehicle::{FileVehicleRepository, InMemoryVehicleRepository};
