//! Host tree capability
//!
//! Views never touch a concrete document. Everything they need from the tree
//! their nodes live in goes through [`HostTree`].

use std::fmt;

/// Handle to a node of a host tree
///
/// A handle is only meaningful for the tree that issued it. The generation
/// lets a tree recognise handles to nodes that have since been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
	index: u32,
	generation: u32,
}

impl NodeId {
	/// Creates a handle. Intended for [`HostTree`] implementations.
	pub const fn new(index: u32, generation: u32) -> Self {
		Self { index, generation }
	}

	/// Slot index within the issuing tree
	pub const fn index(&self) -> u32 {
		self.index
	}

	/// Generation of the slot when the handle was issued
	pub const fn generation(&self) -> u32 {
		self.generation
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}v{}", self.index, self.generation)
	}
}

/// Tree manipulation primitives consumed by views
///
/// All methods take `&self`; implementations use interior mutability so a
/// single tree can be shared by every view placed into it. Operations on
/// released or unknown handles must not panic: queries return `None` or an
/// empty string, mutations do nothing.
pub trait HostTree {
	/// Creates a detached element node
	fn create_element(&self, tag: &str) -> NodeId;

	/// Sets an attribute on an element
	fn set_attribute(&self, node: NodeId, name: &str, value: &str);

	/// Reads an attribute of an element
	fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

	/// First descendant of `node`, in document order, matching `selector`
	fn query_descendant(&self, node: NodeId, selector: &str) -> Option<NodeId>;

	/// Parent of `node`, if it is currently inserted somewhere
	fn parent_of(&self, node: NodeId) -> Option<NodeId>;

	/// Sibling immediately following `node`
	fn next_sibling_of(&self, node: NodeId) -> Option<NodeId>;

	/// Inserts `node` into `parent` immediately before `sibling`, moving it
	/// out of its current parent first
	fn insert_before(&self, parent: NodeId, node: NodeId, sibling: NodeId);

	/// Appends `node` as the last child of `parent`, moving it out of its
	/// current parent first
	fn append_child(&self, parent: NodeId, node: NodeId);

	/// Takes `node` out of its parent. Does nothing if it has none.
	fn remove_from_parent(&self, node: NodeId);

	/// Serialized content (inner HTML) of `node`
	fn content(&self, node: NodeId) -> String;

	/// Replaces the content of `node` with the parsed `html`
	fn set_content(&self, node: NodeId, html: &str);

	/// Releases `node`. The handle must not be used afterwards.
	fn release(&self, node: NodeId);
}
