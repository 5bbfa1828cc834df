//! Error types for host tree queries

use thiserror::Error;

/// Error returned when a selector cannot be parsed
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
	#[error("Invalid selector '{selector}': {reason}")]
	Invalid {
		/// The rejected selector
		selector: String,
		/// Parser diagnostic
		reason: String,
	},
}
