//! Selector matching backed by `scraper`
//!
//! The arena is not a `scraper` document, so a query serializes the tree the
//! scope lives in with every element tagged by its handle, parses that copy
//! and maps the matches back. Matching therefore sees the scope's ancestors
//! and siblings, which combinators such as `h1 + section` or `body main p`
//! depend on, while results stay restricted to the scope's descendants.

use super::arena::{Arena, NodeKind};
use super::render::{NODE_MARKER, write_marked};
use crate::error::SelectorError;
use crate::host::NodeId;
use scraper::{Html, Selector};

/// Parses a CSS selector
pub(crate) fn compile(selector: &str) -> Result<Selector, SelectorError> {
	Selector::parse(selector).map_err(|error| SelectorError::Invalid {
		selector: selector.to_string(),
		reason: error.to_string(),
	})
}

/// Descendants of `scope` matching `selector`, in document order
///
/// Nodes the HTML parser would relocate (a `div` appended inside a `p`, say)
/// are matched at the position the parser gives them.
pub(crate) fn select(arena: &Arena, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
	if !arena.contains(scope) {
		return Vec::new();
	}
	let root = arena.root_of(scope);
	let mut html = String::new();
	write_marked(arena, root, &mut html);
	let document = if is_body(arena, root) {
		Html::parse_document(&html)
	} else {
		Html::parse_fragment(&html)
	};
	document
		.select(selector)
		.filter_map(|element| element.value().attr(NODE_MARKER).and_then(parse_marker))
		.filter(|id| *id != scope && arena.is_ancestor_or_self(scope, *id))
		.collect()
}

fn is_body(arena: &Arena, node: NodeId) -> bool {
	matches!(
		arena.get(node).map(|data| &data.kind),
		Some(NodeKind::Element { tag, .. }) if tag == "body"
	)
}

fn parse_marker(marker: &str) -> Option<NodeId> {
	let (index, generation) = marker.split_once('.')?;
	Some(NodeId::new(index.parse().ok()?, generation.parse().ok()?))
}
