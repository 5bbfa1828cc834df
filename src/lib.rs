//! # Tessera
//!
//! A view lifecycle controller: views wrap one element of a host tree,
//! compile their content from a template and a data source, enter and leave
//! the tree, and host child views in named regions.
//!
//! ## Crates
//!
//! - [`core`]: lifecycle errors, typed event emitters, data serializers
//! - [`dom`]: the [`HostTree`](dom::HostTree) capability and the in-memory
//!   [`MemoryTree`](dom::MemoryTree)
//! - [`views`]: [`View`](views::View), options, settings and view classes
//!
//! ## Quick start
//!
//! ```
//! use tessera::prelude::*;
//! use std::rc::Rc;
//!
//! let tree = Rc::new(MemoryTree::new());
//! let layout = View::with_options(
//!     tree.clone(),
//!     ViewOptions::new()
//!         .with_template(StaticTemplate::new(r#"<main data-region="main"></main>"#))
//!         .with_regions(region_map([("main", "[data-region=main]")])),
//! );
//! layout.render()?.attach(tree.body(), None)?;
//!
//! let greeting = View::with_options(
//!     tree.clone(),
//!     ViewOptions::new().with_template(StaticTemplate::new("<p>Hello</p>")),
//! );
//! layout.insert_child("main", greeting.clone())?;
//!
//! assert!(greeting.is_attached());
//! assert_eq!(
//!     tree.content(tree.body()),
//!     r#"<div><main data-region="main"><div><p>Hello</p></div></main></div>"#
//! );
//! # Ok::<(), ViewError>(())
//! ```

pub mod core;
pub mod dom;
pub mod views;

// Re-export common external dependencies
pub use serde_json;

pub mod prelude {
	pub use crate::core::{
		Collection, DataSource, Entity, EntityCollection, Event, EventEmitter, EventName,
		LifecycleOperation, ListenerId, Model, Observable, ViewError,
	};
	pub use crate::dom::{HostTree, MemoryTree, NodeId};
	pub use crate::views::{
		RegionProvider, StaticTemplate, Template, View, ViewClass, ViewOptions, ViewSettings,
		is_view_like, regions::region_map,
	};

	pub use serde_json::{Value, json};
}
