//! HTML fragment parsing into the arena

use super::arena::{Arena, NodeKind, Origin};
use crate::host::NodeId;
use scraper::{ElementRef, Html, Node};

/// Parses `html` as a body fragment and appends the resulting nodes to `parent`
pub(crate) fn parse_into(arena: &mut Arena, parent: NodeId, html: &str) {
	if html.is_empty() {
		return;
	}
	let fragment = Html::parse_fragment(html);
	append_children(arena, parent, fragment.root_element());
}

fn append_children(arena: &mut Arena, parent: NodeId, element: ElementRef<'_>) {
	for child in element.children() {
		let kind = match child.value() {
			Node::Text(text) => NodeKind::Text(String::from(&**text)),
			Node::Comment(comment) => NodeKind::Comment(String::from(&**comment)),
			Node::Element(el) => NodeKind::Element {
				tag: el.name().to_string(),
				attributes: el
					.attrs()
					.map(|(name, value)| (name.to_string(), value.to_string()))
					.collect(),
			},
			_ => continue,
		};
		let id = arena.alloc(kind, Origin::Content);
		arena.insert(parent, id, None);
		if let Some(child_element) = ElementRef::wrap(child) {
			append_children(arena, id, child_element);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::memory::render::write_children;
	use indexmap::IndexMap;
	use rstest::rstest;

	fn parse(html: &str) -> (Arena, NodeId) {
		let mut arena = Arena::default();
		let root = arena.alloc(
			NodeKind::Element {
				tag: "div".to_string(),
				attributes: IndexMap::new(),
			},
			Origin::Host,
		);
		parse_into(&mut arena, root, html);
		(arena, root)
	}

	#[rstest]
	fn test_parse_nested_elements_and_attributes() {
		// Act
		let (arena, root) = parse(r#"<main id="m"><section data-region="aside">x</section></main>"#);

		// Assert
		let children = &arena.get(root).unwrap().children;
		assert_eq!(children.len(), 1);
		let main = arena.get(children[0]).unwrap();
		assert_eq!(
			main.kind,
			NodeKind::Element {
				tag: "main".to_string(),
				attributes: IndexMap::from([("id".to_string(), "m".to_string())]),
			}
		);
		// root, main, section and its text
		assert_eq!(arena.live_count(), 4);
	}

	#[rstest]
	#[case("plain text")]
	#[case("<p>a</p><p>b</p>")]
	#[case("<!-- note --><span>s</span>")]
	#[case(r#"<input type="text"><br>"#)]
	fn test_parse_then_render_is_stable(#[case] html: &str) {
		let (arena, root) = parse(html);

		let mut out = String::new();
		write_children(&arena, root, &mut out);

		assert_eq!(out, html);
	}

	#[rstest]
	fn test_parse_empty_creates_nothing() {
		let (arena, root) = parse("");

		assert!(arena.get(root).unwrap().children.is_empty());
		assert_eq!(arena.live_count(), 1);
	}
}
