//! Vehicle domain models.
//!
//! `FormDraft` is what the registration wizard accumulates; `NewVehicleRecord`
//! is the backend-ready shape produced from it on final confirmation.

pub mod date;
pub mod draft;
pub mod media;
pub mod privacy;
pub mod record;

pub use date::{parse_date_text, serialize_date, BackendTimestamp, DateValue};
pub use draft::{DraftDate, FormDraft, NumberInput};
pub use media::{MediaDescriptor, MediaKind};
pub use privacy::PrivacySettings;
pub use record::{NewVehicleRecord, StoredVehicle};
