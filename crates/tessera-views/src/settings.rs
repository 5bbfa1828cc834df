//! Declarative view settings
//!
//! [`ViewSettings`] is the data-only part of [`ViewOptions`](crate::ViewOptions):
//! element shape and region locators. It can be kept in TOML or JSON next to
//! the templates it belongs to.
//!
//! ```toml
//! tag_name = "section"
//! class_name = "layout"
//!
//! [attributes]
//! role = "main"
//!
//! [regions]
//! sidebar = "[data-region=sidebar]"
//! content = "[data-region=content]"
//! ```

use crate::error::{SettingsError, SettingsResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static view configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewSettings {
	/// Element to create for the view (defaults to `div`)
	pub tag_name: Option<String>,
	/// `id` attribute of the element
	pub id: Option<String>,
	/// `class` attribute of the element
	pub class_name: Option<String>,
	/// Additional attributes, in insertion order
	pub attributes: IndexMap<String, String>,
	/// Region name → locator
	pub regions: IndexMap<String, String>,
}

impl ViewSettings {
	/// Parses and validates settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use tessera_views::ViewSettings;
	///
	/// let settings = ViewSettings::from_toml_str(r#"
	///     tag_name = "ul"
	///     [regions]
	///     footer = ".footer"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.tag_name.as_deref(), Some("ul"));
	/// assert_eq!(settings.regions["footer"], ".footer");
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parses and validates settings from a JSON value
	pub fn from_json_value(value: Value) -> SettingsResult<Self> {
		let settings: Self = serde_json::from_value(value)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks tag, attribute and region names
	pub fn validate(&self) -> SettingsResult<()> {
		if let Some(tag) = &self.tag_name
			&& !is_valid_name(tag)
		{
			return Err(SettingsError::Invalid(format!("Invalid tag name: '{}'", tag)));
		}
		if let Some(name) = self.attributes.keys().find(|name| !is_valid_name(name)) {
			return Err(SettingsError::Invalid(format!(
				"Invalid attribute name: '{}'",
				name
			)));
		}
		for (region, locator) in &self.regions {
			if region.trim().is_empty() {
				return Err(SettingsError::Invalid("Region names cannot be empty".into()));
			}
			if locator.trim().is_empty() {
				return Err(SettingsError::Invalid(format!(
					"Region '{}' has an empty locator",
					region
				)));
			}
		}
		Ok(())
	}
}

fn is_valid_name(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}
