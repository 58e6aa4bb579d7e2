use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier assigned to a vehicle record by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl_id!(VehicleId);
