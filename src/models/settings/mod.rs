// Settings module
// Display preferences for the booking front-end

use serde::{Deserialize, Serialize};

use crate::models::shop::SHOP_NAME;
use crate::utils::date::DateFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shop_name: String,
    /// "MM/DD/YYYY", "DD/MM/YYYY" or "YYYY/MM/DD"
    pub date_format: String,
    /// Refuse dates before today even when the date picker allows them
    pub reject_past_dates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shop_name: SHOP_NAME.to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            reject_past_dates: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.shop_name.trim().is_empty() {
            return Err("Shop name cannot be empty".to_string());
        }

        if DateFormat::parse(&self.date_format).is_none() {
            return Err(format!(
                "Unsupported date format '{}' (use MM/DD/YYYY, DD/MM/YYYY or YYYY/MM/DD)",
                self.date_format
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.shop_name, "Salloni Titi");
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let settings = Settings {
            date_format: "D.M.Y".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().contains("D.M.Y"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let settings = Settings {
            shop_name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err(), "Shop name cannot be empty");
    }
}
