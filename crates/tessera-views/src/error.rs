//! Configuration errors

use thiserror::Error;

/// Error raised while loading [`ViewSettings`](crate::ViewSettings)
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Result type for settings loading
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
