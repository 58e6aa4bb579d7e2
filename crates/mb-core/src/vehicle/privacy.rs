use serde::{Deserialize, Serialize};

/// What a vehicle's owner shares when the vehicle's history is viewed or transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub show_mileage: bool,
    pub show_maintenance_history: bool,
    pub show_photos: bool,
    pub show_costs: bool,
    pub show_mechanics: bool,
    pub show_documents: bool,
    pub show_maintenance_details: bool,
    pub allow_data_transfer: bool,
    pub require_pin_for_transfer: bool,
}

/// Preset injected into every new vehicle.
impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_mileage: true,
            show_maintenance_history: true,
            show_photos: true,
            show_costs: false,
            show_mechanics: false,
            show_documents: false,
            show_maintenance_details: false,
            allow_data_transfer: false,
            require_pin_for_transfer: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_serializes_every_flag() {
        let json = serde_json::to_value(PrivacySettings::default()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "showMileage": true,
                "showMaintenanceHistory": true,
                "showPhotos": true,
                "showCosts": false,
                "showMechanics": false,
                "showDocuments": false,
                "showMaintenanceDetails": false,
                "allowDataTransfer": false,
                "requirePinForTransfer": true,
            })
        );
    }
}
