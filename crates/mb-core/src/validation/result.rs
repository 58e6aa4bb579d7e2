use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a [`FormDraft`](crate::vehicle::FormDraft) attribute, used as an error key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Make,
    Model,
    Year,
    LicensePlate,
    Mileage,
    FuelType,
    Transmission,
    EngineSize,
    Power,
    Vin,
    RegistrationDate,
    InsuranceExpiry,
    RevisionExpiry,
    RoadTaxExpiry,
    Images,
    Documents,
    Notes,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Make => "Make",
            DraftField::Model => "Model",
            DraftField::Year => "Year",
            DraftField::LicensePlate => "License plate",
            DraftField::Mileage => "Mileage",
            DraftField::FuelType => "Fuel type",
            DraftField::Transmission => "Transmission",
            DraftField::EngineSize => "Engine size",
            DraftField::Power => "Power",
            DraftField::Vin => "VIN",
            DraftField::RegistrationDate => "Registration date",
            DraftField::InsuranceExpiry => "Insurance expiry",
            DraftField::RevisionExpiry => "Revision expiry",
            DraftField::RoadTaxExpiry => "Road tax expiry",
            DraftField::Images => "Photos",
            DraftField::Documents => "Documents",
            DraftField::Notes => "Notes",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub type FieldErrors<K> = BTreeMap<K, String>;

/// Outcome of one validation call. `errors` only has keys for failing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult<K: Ord = DraftField> {
    pub is_valid: bool,
    pub errors: FieldErrors<K>,
}

impl<K: Ord> ValidationResult<K> {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn from_errors(errors: FieldErrors<K>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: &K) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

impl<K: Ord> Default for ValidationResult<K> {
    fn default() -> Self {
        Self::valid()
    }
}

/// Collects field rule outcomes; the first failure per field wins.
pub(crate) struct ErrorCollector<K: Ord> {
    errors: FieldErrors<K>,
}

impl<K: Ord> ErrorCollector<K> {
    pub(crate) fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    pub(crate) fn check(&mut self, field: K, outcome: Result<(), String>) -> &mut Self {
        if let Err(message) = outcome {
            self.errors.entry(field).or_insert(message);
        }
        self
    }

    pub(crate) fn finish(self) -> ValidationResult<K> {
        ValidationResult::from_errors(self.errors)
    }
}
