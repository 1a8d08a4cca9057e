//! Wizard settings loaded from TOML

use crate::steps::DEFAULT_COUNTRY_CODE;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("Invalid setting {key}: {message}")]
	Invalid { key: &'static str, message: String },
}

/// Settings for the registration wizard
///
/// # Examples
///
/// ```
/// use inscription_forms::WizardSettings;
///
/// let settings = WizardSettings::from_toml_str(r#"
///     default_country_code = "+44"
///
///     [gateway]
///     success_rate = 1.0
/// "#).unwrap();
///
/// assert_eq!(settings.default_country_code, "+44");
/// assert_eq!(settings.gateway.success_rate, 1.0);
/// assert_eq!(settings.gateway.delay_ms, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
	/// Dialing code preselected on the contact step
	pub default_country_code: String,
	pub gateway: GatewaySettings,
}

/// Behavior of the simulated submission gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
	/// Artificial latency of each submission
	pub delay_ms: u64,
	/// Probability in `[0, 1]` that a submission succeeds
	pub success_rate: f64,
}

impl Default for WizardSettings {
	fn default() -> Self {
		Self {
			default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
			gateway: GatewaySettings::default(),
		}
	}
}

impl Default for GatewaySettings {
	fn default() -> Self {
		Self {
			delay_ms: 2000,
			success_rate: 0.95,
		}
	}
}

impl WizardSettings {
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path.as_ref())?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.as_ref().display(), "Loaded wizard settings");
		Ok(settings)
	}

	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.default_country_code.starts_with('+') {
			return Err(SettingsError::Invalid {
				key: "default_country_code",
				message: format!(
					"expected a dialing code such as +33, got {:?}",
					self.default_country_code
				),
			});
		}
		if !(0.0..=1.0).contains(&self.gateway.success_rate) {
			return Err(SettingsError::Invalid {
				key: "gateway.success_rate",
				message: format!("{} is outside [0, 1]", self.gateway.success_rate),
			});
		}
		Ok(())
	}
}
