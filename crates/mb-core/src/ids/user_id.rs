use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Authenticated user identifier, supplied by the session collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl_id!(UserId);
