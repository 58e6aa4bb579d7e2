//! ID type wrappers for type safety.

mod id_macro;
pub mod user_id;
pub mod vehicle_id;

pub use user_id::UserId;
pub use vehicle_id::VehicleId;
