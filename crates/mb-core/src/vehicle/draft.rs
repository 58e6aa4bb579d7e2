//! The in-progress vehicle registration record.

use serde::{Deserialize, Serialize};

use super::{DateValue, MediaDescriptor};

/// A numeric input as typed by the user: either already a number or raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Decimal value, accepting a comma as decimal separator. Blank or
    /// unparsable text yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.replace(',', ".").parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    /// Integer value; decimals are truncated toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        if let NumberInput::Text(text) = self {
            if let Ok(value) = text.trim().parse::<i64>() {
                return Some(value);
            }
        }
        self.as_f64().map(|v| v.trunc() as i64)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, NumberInput::Text(text) if text.trim().is_empty())
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

/// Every attribute is optional: required-ness is a step validator concern,
/// so a draft may be partially populated at any point before submission.
///
/// The same shape doubles as a merge patch (see [`FormDraft::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDraft {
    // Identification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumberInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<NumberInput>,

    // Technical details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_size: Option<NumberInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<NumberInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateValue>,

    // Deadlines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_expiry: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_tax_expiry: Option<DateValue>,

    // Media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<MediaDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<MediaDescriptor>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FormDraft {
    /// Shallow merge: every field present in `patch` replaces the current value,
    /// every absent field is left untouched. License plates are stored upper-cased.
    pub fn merge(&mut self, patch: FormDraft) {
        let FormDraft {
            make,
            model,
            year,
            license_plate,
            mileage,
            fuel_type,
            transmission,
            engine_size,
            power,
            vin,
            registration_date,
            insurance_expiry,
            revision_expiry,
            road_tax_expiry,
            images,
            documents,
            notes,
        } = patch;

        overwrite(&mut self.make, make);
        overwrite(&mut self.model, model);
        overwrite(&mut self.year, year);
        overwrite(&mut self.license_plate, license_plate.map(|p| p.to_uppercase()));
        overwrite(&mut self.mileage, mileage);
        overwrite(&mut self.fuel_type, fuel_type);
        overwrite(&mut self.transmission, transmission);
        overwrite(&mut self.engine_size, engine_size);
        overwrite(&mut self.power, power);
        overwrite(&mut self.vin, vin);
        overwrite(&mut self.registration_date, registration_date);
        overwrite(&mut self.insurance_expiry, insurance_expiry);
        overwrite(&mut self.revision_expiry, revision_expiry);
        overwrite(&mut self.road_tax_expiry, road_tax_expiry);
        overwrite(&mut self.images, images);
        overwrite(&mut self.documents, documents);
        overwrite(&mut self.notes, notes);
    }

    /// Convenience for building merge patches.
    pub fn merged(mut self, patch: FormDraft) -> Self {
        self.merge(patch);
        self
    }
}

/// The date-valued attributes of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftDate {
    Registration,
    InsuranceExpiry,
    RevisionExpiry,
    RoadTaxExpiry,
}

impl DraftDate {
    pub const ALL: [DraftDate; 4] = [
        DraftDate::Registration,
        DraftDate::InsuranceExpiry,
        DraftDate::RevisionExpiry,
        DraftDate::RoadTaxExpiry,
    ];

    pub fn value(self, draft: &FormDraft) -> Option<&DateValue> {
        match self {
            DraftDate::Registration => draft.registration_date.as_ref(),
            DraftDate::InsuranceExpiry => draft.insurance_expiry.as_ref(),
            DraftDate::RevisionExpiry => draft.revision_expiry.as_ref(),
            DraftDate::RoadTaxExpiry => draft.road_tax_expiry.as_ref(),
        }
    }

    /// A patch setting only this date.
    pub fn patch(self, value: DateValue) -> FormDraft {
        let mut patch = FormDraft::default();
        let slot = match self {
            DraftDate::Registration => &mut patch.registration_date,
            DraftDate::InsuranceExpiry => &mut patch.insurance_expiry,
            DraftDate::RevisionExpiry => &mut patch.revision_expiry,
            DraftDate::RoadTaxExpiry => &mut patch.road_tax_expiry,
        };
        *slot = Some(value);
        patch
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if let Some(value) = value {
        *slot = Some(value);
    }
}
