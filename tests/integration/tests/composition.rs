//! End-to-end composition through the facade crate

use rstest::rstest;
use std::rc::Rc;
use tessera::prelude::*;
use tessera_integration_tests::{record_events, tree};

#[rstest]
fn test_settings_driven_layout_with_class_children(tree: Rc<MemoryTree>) {
	// Arrange
	let settings = ViewSettings::from_toml_str(
		r#"
		tag_name = "section"
		id = "app"

		[regions]
		list = "ul.items"
		"#,
	)
	.unwrap();
	let layout = View::with_options(
		tree.clone(),
		ViewOptions::from_settings(settings)
			.with_template(StaticTemplate::new(r#"<h1>Items</h1><ul class="items"></ul>"#)),
	);
	let item_class = ViewClass::new(
		"Item",
		ViewOptions::new()
			.with_tag_name("li")
			.with_template(|data: &Value| data["name"].as_str().unwrap_or_default().to_string()),
	);
	let model = Rc::new(Model::from_value(json!({"name": "first"})).unwrap());
	let item = item_class.instantiate(tree.clone(), ViewOptions::new().with_model(model));

	// Act
	layout.render().unwrap().attach(tree.body(), None).unwrap();
	layout.insert_child("list", item.clone()).unwrap();

	// Assert
	assert!(is_view_like(Some(&item as &dyn std::any::Any)));
	assert_eq!(
		tree.content(tree.body()),
		r#"<section id="app"><h1>Items</h1><ul class="items"><li>first</li></ul></section>"#
	);

	// Act
	layout.remove().unwrap();

	// Assert
	assert!(tree.children(tree.body()).is_empty());
	assert!(!item.is_removed());
	assert!(!item.is_attached());
}

#[rstest]
fn test_child_moves_from_one_layout_to_another(tree: Rc<MemoryTree>) {
	// Arrange
	let layout = |heading: &str| {
		View::with_options(
			tree.clone(),
			ViewOptions::new()
				.with_template(StaticTemplate::new(format!(
					r#"<h1>{heading}</h1><section></section>"#
				)))
				.with_regions(region_map([("body", "h1 + section")])),
		)
	};
	let left = layout("left");
	let right = layout("right");
	left.render().unwrap().attach(tree.body(), None).unwrap();
	right.render().unwrap().attach(tree.body(), None).unwrap();
	let card = View::with_options(
		tree.clone(),
		ViewOptions::new().with_template(StaticTemplate::new("card")),
	);
	left.insert_child("body", card.clone()).unwrap();
	let log = record_events(&card);

	// Act
	right.insert_child("body", card.clone()).unwrap();

	// Assert
	assert_eq!(
		tree.content(tree.body()),
		"<div><h1>left</h1><section></section></div>\
		 <div><h1>right</h1><section><div>card</div></section></div>"
	);
	assert_eq!(*log.borrow(), vec!["detach", "attach"]);
	assert_eq!(left.child("body"), Some(card));
}
