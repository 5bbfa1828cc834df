//! HTML serialization of arena nodes

use super::arena::{Arena, NodeKind};
use crate::host::NodeId;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Elements that never have content or a closing tag
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Elements whose text content is written verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Attribute carrying a node's handle in marked serializations
pub(crate) const NODE_MARKER: &str = "data-tessera-node";

/// Serializes the children of `node` (its inner HTML)
pub(crate) fn write_children(arena: &Arena, node: NodeId, out: &mut String) {
	Writer::plain(arena, out).children(node);
}

/// Serializes `node` itself (its outer HTML)
pub(crate) fn write_node(arena: &Arena, node: NodeId, raw_text: bool, out: &mut String) {
	Writer::plain(arena, out).node(node, raw_text);
}

/// Serializes `node` with a [`NODE_MARKER`] attribute on every element, so a
/// parsed copy can be mapped back to arena handles
pub(crate) fn write_marked(arena: &Arena, node: NodeId, out: &mut String) {
	Writer {
		arena,
		marked: true,
		out,
	}
	.node(node, false);
}

struct Writer<'a> {
	arena: &'a Arena,
	marked: bool,
	out: &'a mut String,
}

impl<'a> Writer<'a> {
	fn plain(arena: &'a Arena, out: &'a mut String) -> Self {
		Self {
			arena,
			marked: false,
			out,
		}
	}

	fn children(&mut self, node: NodeId) {
		let arena = self.arena;
		let Some(data) = arena.get(node) else {
			return;
		};
		let raw = matches!(&data.kind, NodeKind::Element { tag, .. } if RAW_TEXT_ELEMENTS.contains(&tag.as_str()));
		for child in &data.children {
			self.node(*child, raw);
		}
	}

	fn node(&mut self, node: NodeId, raw_text: bool) {
		let arena = self.arena;
		let Some(data) = arena.get(node) else {
			return;
		};
		match &data.kind {
			NodeKind::Text(text) if raw_text => self.out.push_str(text),
			NodeKind::Text(text) => self.out.push_str(&encode_text(text)),
			NodeKind::Comment(comment) => {
				self.out.push_str("<!--");
				self.out.push_str(comment);
				self.out.push_str("-->");
			}
			NodeKind::Element { tag, attributes } => {
				self.out.push('<');
				self.out.push_str(tag);
				if self.marked {
					self.out.push_str(&format!(
						" {NODE_MARKER}=\"{}.{}\"",
						node.index(),
						node.generation()
					));
				}
				for (name, value) in attributes {
					if self.marked && name == NODE_MARKER {
						continue;
					}
					self.out.push(' ');
					self.out.push_str(name);
					self.out.push_str("=\"");
					self.out.push_str(&encode_double_quoted_attribute(value));
					self.out.push('"');
				}
				self.out.push('>');
				if VOID_ELEMENTS.contains(&tag.as_str()) {
					return;
				}
				self.children(node);
				self.out.push_str("</");
				self.out.push_str(tag);
				self.out.push('>');
			}
		}
	}
}

/// Concatenated text of `node` and its descendants
pub(crate) fn write_text(arena: &Arena, node: NodeId, out: &mut String) {
	let Some(data) = arena.get(node) else {
		return;
	};
	match &data.kind {
		NodeKind::Text(text) => out.push_str(text),
		NodeKind::Comment(_) => {}
		NodeKind::Element { .. } => {
			for child in &data.children {
				write_text(arena, *child, out);
			}
		}
	}
}
