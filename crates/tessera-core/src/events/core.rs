//! Event names

use crate::error::ViewError;
use std::fmt;
use std::sync::Arc;

/// Internal storage for event names, supporting both static and owned strings.
#[derive(Debug, Clone)]
enum EventNameInner {
	/// Compile-time constant string (zero allocation)
	Static(&'static str),
	/// Dynamically created name
	Owned(Arc<str>),
}

/// Type-safe event name
///
/// Lifecycle events emitted by views and change events emitted by models and
/// collections have predefined constants. Custom names are created with
/// [`EventName::custom`] or, with validation, [`EventName::custom_validated`].
///
/// # Examples
///
/// ```
/// use tessera_core::events::EventName;
///
/// let render = EventName::RENDER;
/// assert_eq!(render.as_str(), "render");
///
/// let custom = EventName::custom("selected");
/// assert_eq!(custom.to_string(), "selected");
/// ```
#[derive(Debug, Clone)]
pub struct EventName(EventNameInner);

impl EventName {
	// View lifecycle events
	/// Emitted after content was (re)materialized
	pub const RENDER: Self = Self(EventNameInner::Static("render"));
	/// Emitted after the view was placed into the host tree
	pub const ATTACH: Self = Self(EventNameInner::Static("attach"));
	/// Emitted after the view was taken out of the host tree
	pub const DETACH: Self = Self(EventNameInner::Static("detach"));
	/// Emitted once, when the view is permanently removed
	pub const REMOVE: Self = Self(EventNameInner::Static("remove"));

	// Data source events
	/// Emitted by a model when an attribute changes
	pub const CHANGE: Self = Self(EventNameInner::Static("change"));
	/// Emitted by a collection when an entity is added
	pub const ADD: Self = Self(EventNameInner::Static("add"));
	/// Emitted by a collection when its contents are replaced
	pub const RESET: Self = Self(EventNameInner::Static("reset"));

	/// Create a custom event name without validation
	pub const fn custom(name: &'static str) -> Self {
		Self(EventNameInner::Static(name))
	}

	/// Create an event name from an owned string
	pub fn from_string(name: impl Into<Arc<str>>) -> Self {
		Self(EventNameInner::Owned(name.into()))
	}

	/// Create a validated custom event name
	///
	/// The name must be non-empty, consist of lowercase ASCII letters, digits,
	/// `_` and `:` (for namespaced names such as `change:title`), start with a
	/// letter, and must not be one of the reserved names.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_core::events::EventName;
	///
	/// assert!(EventName::custom_validated("change:title").is_ok());
	/// assert!(EventName::custom_validated("Render").is_err());
	/// assert!(EventName::custom_validated("render").is_err());
	/// ```
	///
	/// # Errors
	///
	/// Returns [`ViewError::EventName`] if validation fails.
	pub fn custom_validated(name: &'static str) -> Result<Self, ViewError> {
		validate_event_name(name)?;
		Ok(Self(EventNameInner::Static(name)))
	}

	/// Names that are emitted by the library itself
	pub fn reserved_names() -> &'static [&'static str] {
		&["render", "attach", "detach", "remove", "change", "add", "reset"]
	}

	/// Get the string representation of this event name
	pub fn as_str(&self) -> &str {
		match &self.0 {
			EventNameInner::Static(s) => s,
			EventNameInner::Owned(s) => s,
		}
	}
}

impl PartialEq for EventName {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for EventName {}

impl std::hash::Hash for EventName {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.as_str().hash(state);
	}
}

impl fmt::Display for EventName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl AsRef<str> for EventName {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl From<&'static str> for EventName {
	fn from(name: &'static str) -> Self {
		Self::custom(name)
	}
}

fn validate_event_name(name: &str) -> Result<(), ViewError> {
	if name.is_empty() {
		return Err(ViewError::EventName(
			"Event name cannot be empty".to_string(),
		));
	}

	if EventName::reserved_names().contains(&name) {
		return Err(ViewError::EventName(format!(
			"Event name '{}' is reserved",
			name
		)));
	}

	if !name
		.chars()
		.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == ':')
	{
		return Err(ViewError::EventName(format!(
			"Event name '{}' may only contain lowercase letters, digits, '_' and ':'",
			name
		)));
	}

	if let Some(first) = name.chars().next()
		&& !first.is_ascii_lowercase()
	{
		return Err(ViewError::EventName(format!(
			"Event name '{}' must start with a lowercase letter",
			name
		)));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_event_name_static_constant() {
		// Arrange
		let name = EventName::ATTACH;

		// Act
		let str_repr = name.as_str();

		// Assert
		assert_eq!(str_repr, "attach");
	}

	#[rstest]
	fn test_event_name_owned_equals_static() {
		// Arrange
		let static_name = EventName::custom("selected");
		let owned_name = EventName::from_string(format!("sel{}", "ected"));

		// Act
		let mut set = HashSet::new();
		set.insert(static_name.clone());

		// Assert
		assert_eq!(static_name, owned_name);
		assert!(set.contains(&owned_name));
	}

	#[rstest]
	#[case("change:title")]
	#[case("selected")]
	#[case("item_2")]
	fn test_custom_validated_accepts(#[case] name: &'static str) {
		assert!(EventName::custom_validated(name).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("remove")]
	#[case("Selected")]
	#[case("1st")]
	#[case(":ns")]
	#[case("has space")]
	fn test_custom_validated_rejects(#[case] name: &'static str) {
		let result = EventName::custom_validated(name);

		assert!(matches!(result, Err(ViewError::EventName(_))));
	}
}
