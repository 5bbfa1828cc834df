//! In-memory [`HostTree`] implementation

use super::arena::{Arena, NodeKind, Origin};
use super::parser::parse_into;
use super::render::{write_children, write_node, write_text};
use super::query::{compile, select};
use crate::error::SelectorError;
use crate::host::{HostTree, NodeId};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;

/// A document-like HTML tree kept in memory
///
/// The tree owns a `body` element that plays the part of the document root.
/// Views inserted under it can be inspected through [`MemoryTree::outer_html`]
/// and [`HostTree::content`].
///
/// # Examples
///
/// ```
/// use tessera_dom::{HostTree, MemoryTree};
///
/// let tree = MemoryTree::new();
/// let div = tree.create_element("div");
/// tree.set_content(div, r#"<section data-region="main"></section>"#);
/// tree.append_child(tree.body(), div);
///
/// let section = tree.query_descendant(div, r#"[data-region="main"]"#);
/// assert!(section.is_some());
/// assert_eq!(tree.parent_of(div), Some(tree.body()));
/// ```
pub struct MemoryTree {
	arena: RefCell<Arena>,
	body: NodeId,
}

impl MemoryTree {
	/// Creates a tree holding an empty `body`
	pub fn new() -> Self {
		let mut arena = Arena::default();
		let body = arena.alloc(
			NodeKind::Element {
				tag: "body".to_string(),
				attributes: IndexMap::new(),
			},
			Origin::Host,
		);
		Self {
			arena: RefCell::new(arena),
			body,
		}
	}

	/// The root element
	pub fn body(&self) -> NodeId {
		self.body
	}

	/// Creates a detached text node
	pub fn create_text(&self, text: &str) -> NodeId {
		self.arena
			.borrow_mut()
			.alloc(NodeKind::Text(text.to_string()), Origin::Host)
	}

	/// Check if `node` refers to a node that has not been released
	pub fn is_live(&self, node: NodeId) -> bool {
		self.arena.borrow().contains(node)
	}

	/// Number of nodes currently stored, `body` included
	pub fn node_count(&self) -> usize {
		self.arena.borrow().live_count()
	}

	/// Tag name of an element node
	pub fn tag_name(&self, node: NodeId) -> Option<String> {
		match &self.arena.borrow().get(node)?.kind {
			NodeKind::Element { tag, .. } => Some(tag.clone()),
			_ => None,
		}
	}

	/// Child nodes of `node`, in order
	pub fn children(&self, node: NodeId) -> Vec<NodeId> {
		self.arena
			.borrow()
			.get(node)
			.map(|data| data.children.clone())
			.unwrap_or_default()
	}

	/// Every descendant of `node` matching the CSS `selector`, in document
	/// order
	///
	/// An invalid selector matches nothing.
	pub fn query_all(&self, node: NodeId, selector: &str) -> Vec<NodeId> {
		self.try_query_all(node, selector).unwrap_or_else(|error| {
			tracing::warn!(%error, "Invalid selector");
			Vec::new()
		})
	}

	/// Like [`MemoryTree::query_all`], but reports an invalid selector
	pub fn try_query_all(&self, node: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
		let selector = compile(selector)?;
		Ok(select(&self.arena.borrow(), node, &selector))
	}

	/// Serialized HTML of `node` including its own tag
	pub fn outer_html(&self, node: NodeId) -> String {
		let mut out = String::new();
		write_node(&self.arena.borrow(), node, false, &mut out);
		out
	}

	/// Concatenated text content of `node`
	pub fn text_content(&self, node: NodeId) -> String {
		let mut out = String::new();
		write_text(&self.arena.borrow(), node, &mut out);
		out
	}

	fn check_live(&self, node: NodeId, operation: &'static str) -> bool {
		let live = self.is_live(node);
		if !live {
			tracing::warn!(%node, operation, "Ignoring operation on a released node");
		}
		live
	}

	fn insert(&self, parent: NodeId, node: NodeId, before: Option<NodeId>, operation: &'static str) {
		if !self.check_live(parent, operation) || !self.check_live(node, operation) {
			return;
		}
		let inserted = self.arena.borrow_mut().insert(parent, node, before);
		if !inserted {
			tracing::warn!(%parent, %node, operation, "Refusing to insert a node into itself");
		}
	}
}

impl Default for MemoryTree {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for MemoryTree {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryTree")
			.field("body", &self.body)
			.field("nodes", &self.node_count())
			.finish()
	}
}

impl HostTree for MemoryTree {
	fn create_element(&self, tag: &str) -> NodeId {
		self.arena.borrow_mut().alloc(
			NodeKind::Element {
				tag: tag.to_ascii_lowercase(),
				attributes: IndexMap::new(),
			},
			Origin::Host,
		)
	}

	fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
		let mut arena = self.arena.borrow_mut();
		match arena.get_mut(node).map(|data| &mut data.kind) {
			Some(NodeKind::Element { attributes, .. }) => {
				attributes.insert(name.to_string(), value.to_string());
			}
			Some(_) => tracing::warn!(%node, name, "Attributes can only be set on elements"),
			None => tracing::warn!(%node, name, "Ignoring attribute on a released node"),
		}
	}

	fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
		match &self.arena.borrow().get(node)?.kind {
			NodeKind::Element { attributes, .. } => attributes.get(name).cloned(),
			_ => None,
		}
	}

	fn query_descendant(&self, node: NodeId, selector: &str) -> Option<NodeId> {
		self.query_all(node, selector).into_iter().next()
	}

	fn parent_of(&self, node: NodeId) -> Option<NodeId> {
		self.arena.borrow().get(node)?.parent
	}

	fn next_sibling_of(&self, node: NodeId) -> Option<NodeId> {
		let arena = self.arena.borrow();
		let parent = arena.get(node)?.parent?;
		let siblings = &arena.get(parent)?.children;
		let position = siblings.iter().position(|child| *child == node)?;
		siblings.get(position + 1).copied()
	}

	fn insert_before(&self, parent: NodeId, node: NodeId, sibling: NodeId) {
		if node == sibling {
			return;
		}
		if self.parent_of(sibling) != Some(parent) {
			tracing::warn!(%parent, %sibling, "Sibling is not a child of parent; appending instead");
		}
		self.insert(parent, node, Some(sibling), "insert_before");
	}

	fn append_child(&self, parent: NodeId, node: NodeId) {
		self.insert(parent, node, None, "append_child");
	}

	fn remove_from_parent(&self, node: NodeId) {
		self.arena.borrow_mut().detach(node);
	}

	fn content(&self, node: NodeId) -> String {
		let mut out = String::new();
		write_children(&self.arena.borrow(), node, &mut out);
		out
	}

	fn set_content(&self, node: NodeId, html: &str) {
		if !self.check_live(node, "set_content") {
			return;
		}
		let mut arena = self.arena.borrow_mut();
		arena.discard_children(node);
		parse_into(&mut arena, node, html);
		tracing::trace!(%node, len = html.len(), "Content replaced");
	}

	fn release(&self, node: NodeId) {
		if node == self.body {
			tracing::warn!("The body of a memory tree cannot be released");
			return;
		}
		self.arena.borrow_mut().release(node);
	}
}
