//! Backend-ready vehicle record built from a finished draft.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{serialize_date, FormDraft, MediaDescriptor, PrivacySettings};
use crate::ids::{UserId, VehicleId};

/// The object handed to the persistence collaborator's create call.
///
/// Optional values serialize as `null` so every key is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleRecord {
    pub owner_id: UserId,

    pub make: String,
    pub model: String,
    pub year: i64,
    pub license_plate: String,
    pub mileage: i64,

    pub fuel_type: String,
    pub transmission: Option<String>,
    pub engine_size: Option<f64>,
    pub power: Option<f64>,
    pub vin: Option<String>,
    pub registration_date: Option<String>,

    pub insurance_expiry: Option<String>,
    pub revision_expiry: Option<String>,
    pub road_tax_expiry: Option<String>,

    pub images: Vec<String>,
    pub documents: Vec<String>,
    pub notes: Option<String>,

    pub maintenance_count: u32,
    pub documents_count: u32,
    pub total_expenses: f64,
    pub privacy_settings: PrivacySettings,

    pub created_at: String,
    pub updated_at: String,
}

impl NewVehicleRecord {
    /// Coerce a draft into the record shape.
    ///
    /// Year and mileage default to 0, engine size and power to `None`.
    /// Blank optional text becomes `None`; the plate is upper-cased.
    pub fn from_draft(draft: &FormDraft, owner_id: UserId, now: DateTime<Utc>) -> Self {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        Self {
            owner_id,
            make: required_text(&draft.make),
            model: required_text(&draft.model),
            year: draft.year.as_ref().and_then(|v| v.as_i64()).unwrap_or(0),
            license_plate: required_text(&draft.license_plate).to_uppercase(),
            mileage: draft.mileage.as_ref().and_then(|v| v.as_i64()).unwrap_or(0),
            fuel_type: required_text(&draft.fuel_type),
            transmission: optional_text(&draft.transmission),
            engine_size: draft.engine_size.as_ref().and_then(|v| v.as_f64()),
            power: draft.power.as_ref().and_then(|v| v.as_f64()),
            vin: optional_text(&draft.vin).map(|vin| vin.to_uppercase()),
            registration_date: serialize_date(draft.registration_date.as_ref()),
            insurance_expiry: serialize_date(draft.insurance_expiry.as_ref()),
            revision_expiry: serialize_date(draft.revision_expiry.as_ref()),
            road_tax_expiry: serialize_date(draft.road_tax_expiry.as_ref()),
            images: uris(&draft.images),
            documents: uris(&draft.documents),
            notes: optional_text(&draft.notes),
            maintenance_count: 0,
            documents_count: 0,
            total_expenses: 0.0,
            privacy_settings: PrivacySettings::default(),
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }
}

/// A record as read back from the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredVehicle {
    pub id: VehicleId,
    #[serde(flatten)]
    pub record: NewVehicleRecord,
}

fn required_text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn uris(media: &Option<Vec<MediaDescriptor>>) -> Vec<String> {
    media
        .iter()
        .flatten()
        .map(|descriptor| descriptor.uri.clone())
        .collect()
}
