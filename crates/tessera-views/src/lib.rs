//! # Tessera Views
//!
//! View lifecycle controller with single-level region composition.
//!
//! ## Overview
//!
//! - [`View`]: wraps one host-tree element through render, attach, detach
//!   and remove, and places child views into named regions
//! - [`Template`] / [`RegionProvider`]: content and region strategies
//! - [`ViewOptions`] / [`ViewSettings`]: programmatic and declarative configuration
//! - [`ViewClass`]: named, extendable view factories
//!
//! ## Lifecycle
//!
//! ```text
//! new ──render──▶ rendered ──attach──▶ attached
//!                    ▲   ◀──detach──     │
//!                    └──── render ───────┘   (detach, swap content, reattach)
//! any ──remove──▶ removed  (terminal: every later call fails)
//! ```

pub mod class;
pub mod error;
pub mod options;
pub mod regions;
pub mod settings;
pub mod template;
pub mod view;

use std::any::Any;

pub use class::ViewClass;
pub use error::{SettingsError, SettingsResult};
pub use options::{DEFAULT_TAG_NAME, ViewOptions};
pub use regions::RegionProvider;
pub use settings::ViewSettings;
pub use template::{StaticTemplate, Template};
pub use view::{View, ViewId, WeakView};

/// Check if `value` is a view or a view factory
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use tessera_dom::MemoryTree;
/// use tessera_views::{is_view_like, View, ViewClass, ViewOptions};
///
/// let view = View::new(Rc::new(MemoryTree::new()));
/// let class = ViewClass::new("Item", ViewOptions::new());
///
/// assert!(is_view_like(Some(&view)));
/// assert!(is_view_like(Some(&class)));
/// assert!(!is_view_like(Some(&"view")));
/// assert!(!is_view_like(None));
/// ```
pub fn is_view_like(value: Option<&dyn Any>) -> bool {
	value.is_some_and(|value| value.is::<View>() || value.is::<ViewClass>())
}
