//! Error types for view lifecycle operations

use std::fmt;
use thiserror::Error;

/// Lifecycle operation that can be rejected once a view reached its terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleOperation {
	/// `render()`
	Render,
	/// `attach()`
	Attach,
	/// `detach()`
	Detach,
	/// `remove()`
	Remove,
}

impl LifecycleOperation {
	/// Returns the operation name as used in logs
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Render => "render",
			Self::Attach => "attach",
			Self::Detach => "detach",
			Self::Remove => "remove",
		}
	}

	/// Message reported when the operation is invoked on a removed view
	pub fn removed_message(&self) -> &'static str {
		match self {
			Self::Render => "Views cannot be rendered after they have been removed.",
			Self::Attach => "Views cannot be attached after they have been removed.",
			Self::Detach => "Views cannot be detached after they have been removed.",
			Self::Remove => "Views cannot be removed more than once.",
		}
	}
}

impl fmt::Display for LifecycleOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error type for view and event operations
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
	/// A lifecycle operation was invoked on a view that has been removed
	#[error("{message}")]
	InvalidState {
		/// The rejected operation
		operation: LifecycleOperation,
		/// Human readable message
		message: String,
	},

	/// A custom event name failed validation
	#[error("Invalid event name: {0}")]
	EventName(String),
}

impl ViewError {
	/// Creates the terminal-state error for `operation`
	pub fn removed(operation: LifecycleOperation) -> Self {
		Self::InvalidState {
			operation,
			message: operation.removed_message().to_string(),
		}
	}

	/// Returns `true` for terminal-state violations
	pub fn is_invalid_state(&self) -> bool {
		matches!(self, Self::InvalidState { .. })
	}

	/// Returns the rejected operation, if this is a terminal-state violation
	pub fn operation(&self) -> Option<LifecycleOperation> {
		match self {
			Self::InvalidState { operation, .. } => Some(*operation),
			_ => None,
		}
	}
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
