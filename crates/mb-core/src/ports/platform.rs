use serde::{Deserialize, Serialize};

/// Target the platform capabilities are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Native,
    Web,
}

impl Platform {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "native" | "ios" | "android" => Some(Platform::Native),
            "web" => Some(Platform::Web),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_targets_map_to_native() {
        assert_eq!(Platform::parse("iOS"), Some(Platform::Native));
        assert_eq!(Platform::parse("android"), Some(Platform::Native));
        assert_eq!(Platform::parse("web"), Some(Platform::Web));
        assert_eq!(Platform::parse("desktop"), None);
    }
}
