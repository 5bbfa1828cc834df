//! Lifecycle integration tests: render, attach, detach and remove

use proptest::prelude::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use tessera_core::{EventName, LifecycleOperation, Model, Observable, ViewError};
use tessera_dom::{HostTree, MemoryTree};
use tessera_views::{StaticTemplate, View, ViewOptions, ViewSettings};

#[fixture]
fn tree() -> Rc<MemoryTree> {
	Rc::new(MemoryTree::new())
}

fn record(view: &View) -> Rc<RefCell<Vec<String>>> {
	let log = Rc::new(RefCell::new(Vec::new()));
	view.events().on_any({
		let log = Rc::clone(&log);
		move |event| log.borrow_mut().push(event.name.to_string())
	});
	log
}

fn static_view(tree: &Rc<MemoryTree>, markup: &str) -> View {
	View::with_options(
		tree.clone(),
		ViewOptions::new().with_template(StaticTemplate::new(markup)),
	)
}

fn title_view(tree: &Rc<MemoryTree>, model: &Rc<Model>) -> View {
	View::with_options(
		tree.clone(),
		ViewOptions::new()
			.with_model(Rc::clone(model))
			.with_template(|data: &Value| {
				format!("<h1>{}</h1>", data["title"].as_str().unwrap_or_default())
			}),
	)
}

#[rstest]
fn test_render_attach_remove_scenario(tree: Rc<MemoryTree>) {
	// Arrange
	let existing = tree.create_element("nav");
	tree.append_child(tree.body(), existing);
	let view = static_view(&tree, "foo");
	let log = record(&view);

	// Act: render
	view.render().unwrap();

	// Assert
	assert_eq!(tree.content(view.node()), "foo");
	assert!(view.is_rendered());
	assert!(!view.is_attached());

	// Act: attach
	view.attach(tree.body(), None).unwrap();

	// Assert
	assert_eq!(tree.children(tree.body()), vec![existing, view.node()]);
	assert_eq!(*log.borrow(), vec!["render", "attach"]);

	// Act: remove
	let node = view.node();
	view.remove().unwrap();

	// Assert
	assert_eq!(tree.children(tree.body()), vec![existing]);
	assert_eq!(view.content(), None);
	assert!(view.is_removed());
	assert!(!view.is_rendered());
	assert!(!view.is_attached());
	assert!(!tree.is_live(node));
	assert_eq!(*log.borrow(), vec!["render", "attach", "detach", "remove"]);
}

#[rstest]
fn test_identical_render_is_a_no_op(tree: Rc<MemoryTree>) {
	// Arrange
	let view = static_view(&tree, "<p>same</p>");
	view.attach(tree.body(), None).unwrap();
	let log = record(&view);

	// Act
	view.render().unwrap();
	view.render().unwrap();

	// Assert
	assert_eq!(*log.borrow(), vec!["detach", "attach", "render"]);
}

#[rstest]
fn test_render_after_data_change_runs_again(tree: Rc<MemoryTree>) {
	let model = Rc::new(Model::from_value(json!({"title": "a"})).unwrap());
	let view = title_view(&tree, &model);
	view.render().unwrap();
	let log = record(&view);

	model.set("title", json!("b"));
	view.render().unwrap();

	assert_eq!(tree.content(view.node()), "<h1>b</h1>");
	assert_eq!(*log.borrow(), vec!["render"]);
}

#[rstest]
fn test_attach_and_detach_are_idempotent(tree: Rc<MemoryTree>) {
	let view = static_view(&tree, "x");
	let log = record(&view);

	view.attach(tree.body(), None).unwrap();
	view.attach(tree.body(), None).unwrap();
	view.detach().unwrap();
	view.detach().unwrap();

	assert_eq!(*log.borrow(), vec!["attach", "detach"]);
	assert_eq!(tree.parent_of(view.node()), None);
}

#[rstest]
fn test_render_keeps_position_before_sibling(tree: Rc<MemoryTree>) {
	// Arrange
	let body = tree.body();
	let before = tree.create_element("header");
	let after = tree.create_element("footer");
	tree.append_child(body, before);
	tree.append_child(body, after);
	let model = Rc::new(Model::from_value(json!({"title": "first"})).unwrap());
	let view = title_view(&tree, &model);
	view.attach(body, Some(after)).unwrap();

	// Act
	view.render().unwrap();
	model.set("title", json!("second"));
	view.render().unwrap();

	// Assert
	assert_eq!(tree.children(body), vec![before, view.node(), after]);
	assert_eq!(tree.next_sibling_of(view.node()), Some(after));
	assert_eq!(tree.content(view.node()), "<h1>second</h1>");
}

#[rstest]
#[case::render(|v: &View| v.render().map(|_| ()), LifecycleOperation::Render, "Views cannot be rendered after they have been removed.")]
#[case::attach(|v: &View| v.attach(v.host().create_element("div"), None).map(|_| ()), LifecycleOperation::Attach, "Views cannot be attached after they have been removed.")]
#[case::detach(|v: &View| v.detach().map(|_| ()), LifecycleOperation::Detach, "Views cannot be detached after they have been removed.")]
#[case::remove(|v: &View| v.remove().map(|_| ()), LifecycleOperation::Remove, "Views cannot be removed more than once.")]
fn test_operations_fail_after_remove(
	tree: Rc<MemoryTree>,
	#[case] operation: fn(&View) -> tessera_core::Result<()>,
	#[case] expected_operation: LifecycleOperation,
	#[case] expected_message: &str,
) {
	// Arrange
	let view = static_view(&tree, "x");
	view.render().unwrap();
	view.attach(tree.body(), None).unwrap();
	view.remove().unwrap();
	let log = record(&view);

	// Act
	let error = operation(&view).unwrap_err();

	// Assert
	assert!(error.is_invalid_state());
	assert_eq!(error.operation(), Some(expected_operation));
	assert_eq!(error.to_string(), expected_message);
	assert!(log.borrow().is_empty());
}

#[rstest]
fn test_render_without_template(tree: Rc<MemoryTree>) {
	let view = View::new(tree.clone());
	let log = record(&view);

	view.render().unwrap();
	view.render().unwrap();

	assert!(view.is_rendered());
	assert_eq!(view.compile(), None);
	assert_eq!(view.content(), None);
	assert_eq!(tree.content(view.node()), "");
	assert_eq!(*log.borrow(), vec!["render"]);
}

#[rstest]
fn test_first_render_of_empty_content_is_a_no_op(tree: Rc<MemoryTree>) {
	// Arrange
	let view = static_view(&tree, "");
	let log = record(&view);

	// Act
	view.render().unwrap();

	// Assert
	assert!(!view.is_rendered());
	assert_eq!(view.content(), None);
	assert!(log.borrow().is_empty());
}

#[rstest]
fn test_render_after_content_becomes_empty_clears_it(tree: Rc<MemoryTree>) {
	let model = Rc::new(Model::from_value(json!({"title": "a"})).unwrap());
	let view = View::with_options(
		tree.clone(),
		ViewOptions::new()
			.with_model(Rc::clone(&model))
			.with_template(|data: &Value| {
				data["title"]
					.as_str()
					.map(|title| format!("<h1>{title}</h1>"))
					.unwrap_or_default()
			}),
	);
	view.render().unwrap();
	let log = record(&view);

	model.set("title", Value::Null);
	view.render().unwrap();

	assert_eq!(view.content().as_deref(), Some(""));
	assert_eq!(tree.content(view.node()), "");
	assert_eq!(*log.borrow(), vec!["render"]);
}

#[rstest]
fn test_remove_unrendered_view(tree: Rc<MemoryTree>) {
	let view = View::new(tree.clone());
	let log = record(&view);

	view.remove().unwrap();

	assert!(view.is_removed());
	assert_eq!(*log.borrow(), vec!["remove"]);
}

#[rstest]
fn test_removal_from_detach_handler_stops_render(tree: Rc<MemoryTree>) {
	// Arrange
	let model = Rc::new(Model::from_value(json!({"title": "a"})).unwrap());
	let view = title_view(&tree, &model);
	view.render().unwrap().attach(tree.body(), None).unwrap();
	let weak = view.downgrade();
	view.once(EventName::DETACH, move |_| {
		if let Some(view) = weak.upgrade() {
			let _ = view.remove();
		}
	});
	model.set("title", json!("b"));

	// Act
	let result = view.render();

	// Assert
	let error = result.unwrap_err();
	assert_eq!(error.operation(), Some(LifecycleOperation::Render));
	assert!(view.is_removed());
	assert!(tree.children(tree.body()).is_empty());
}

#[rstest]
fn test_handlers_observe_committed_state(tree: Rc<MemoryTree>) {
	let view = static_view(&tree, "x");
	let seen = Rc::new(RefCell::new(Vec::new()));
	for name in [EventName::RENDER, EventName::ATTACH, EventName::DETACH] {
		let weak = view.downgrade();
		let seen = Rc::clone(&seen);
		view.on(name, move |event| {
			if let Some(view) = weak.upgrade() {
				seen.borrow_mut()
					.push((event.name.to_string(), view.is_rendered(), view.is_attached()));
			}
		});
	}

	view.render().unwrap();
	view.attach(tree.body(), None).unwrap();
	view.detach().unwrap();

	assert_eq!(
		*seen.borrow(),
		vec![
			("render".to_string(), true, false),
			("attach".to_string(), true, true),
			("detach".to_string(), true, false),
		]
	);
}

#[rstest]
fn test_listen_to_model_rerenders_until_removed(tree: Rc<MemoryTree>) {
	// Arrange
	let model = Rc::new(Model::from_value(json!({"title": "a"})).unwrap());
	let view = title_view(&tree, &model);
	let weak = view.downgrade();
	view.listen_to(&*model, EventName::CHANGE, move |_| {
		if let Some(view) = weak.upgrade() {
			let _ = view.render();
		}
	});
	view.render().unwrap();

	// Act
	model.set("title", json!("b"));

	// Assert
	assert_eq!(tree.content(view.node()), "<h1>b</h1>");

	// Act
	view.remove().unwrap();
	model.set("title", json!("c"));

	// Assert
	assert_eq!(model.events().listener_count(), 0);
}

#[rstest]
fn test_stop_listening_keeps_own_listeners(tree: Rc<MemoryTree>) {
	let model = Rc::new(Model::new());
	let view = View::new(tree.clone());
	view.listen_to(&*model, EventName::CHANGE, |_| {});
	view.listen_to(&*model, EventName::custom("change:title"), |_| {});
	let log = record(&view);

	let released = view.stop_listening();
	view.render().unwrap();

	assert_eq!(released, 2);
	assert_eq!(model.events().listener_count(), 0);
	assert_eq!(*log.borrow(), vec!["render"]);
}

#[rstest]
fn test_element_options(tree: Rc<MemoryTree>) {
	let view = View::with_options(
		tree.clone(),
		ViewOptions::new()
			.with_tag_name("section")
			.with_id("main")
			.with_class_name("page")
			.with_attribute("role", "region"),
	);

	assert_eq!(
		tree.outer_html(view.node()),
		r#"<section id="main" class="page" role="region"></section>"#
	);
}

#[rstest]
fn test_options_from_settings(tree: Rc<MemoryTree>) {
	let settings = ViewSettings::from_toml_str(
		r#"
		tag_name = "ul"
		class_name = "list"

		[attributes]
		data-kind = "items"
		"#,
	)
	.unwrap();

	let view = View::with_options(tree.clone(), ViewOptions::from_settings(settings));

	assert_eq!(
		tree.outer_html(view.node()),
		r#"<ul class="list" data-kind="items"></ul>"#
	);
}

#[rstest]
fn test_query_within_view(tree: Rc<MemoryTree>) {
	let view = static_view(&tree, r#"<p class="lead">a</p><p class="lead" id="second">b</p>"#);
	let outside = tree.create_element("p");
	tree.set_attribute(outside, "class", "lead");
	tree.append_child(tree.body(), outside);
	view.render().unwrap();

	let found = view.query("#second").unwrap();

	assert_eq!(tree.text_content(found), "b");
	assert_ne!(view.query(".lead"), Some(outside));
	view.remove().unwrap();
	assert_eq!(view.query(".lead"), None);
}

#[rstest]
fn test_collection_data_reaches_template(tree: Rc<MemoryTree>) {
	let collection = Rc::new(tessera_core::Collection::from_values(vec![
		json!({"name": "a"}),
		json!({"name": "b"}),
	]));
	let view = View::with_options(
		tree.clone(),
		ViewOptions::new()
			.with_collection(Rc::clone(&collection))
			.with_template(|data: &Value| {
				data["collection"]
					.as_array()
					.into_iter()
					.flatten()
					.map(|item| format!("<li>{}</li>", item["name"].as_str().unwrap_or_default()))
					.collect::<String>()
			}),
	);

	view.render().unwrap();

	assert_eq!(tree.content(view.node()), "<li>a</li><li>b</li>");
}

#[rstest]
fn test_view_error_is_reported_for_removed(tree: Rc<MemoryTree>) {
	let view = View::new(tree.clone());
	view.remove().unwrap();

	let error = view.render().unwrap_err();

	assert!(matches!(
		error,
		ViewError::InvalidState {
			operation: LifecycleOperation::Render,
			..
		}
	));
}

proptest! {
	#[test]
	fn prop_attached_flag_matches_tree(ops in proptest::collection::vec(0u8..4, 0..40)) {
		let tree = Rc::new(MemoryTree::new());
		let model = Rc::new(Model::from_value(json!({"title": "t"})).unwrap());
		let view = title_view(&tree, &model);

		for (step, op) in ops.into_iter().enumerate() {
			match op {
				0 => { view.render().unwrap(); }
				1 => { view.attach(tree.body(), None).unwrap(); }
				2 => { view.detach().unwrap(); }
				_ => { model.set("title", json!(step)); }
			}
			prop_assert_eq!(view.is_attached(), tree.parent_of(view.node()).is_some());
			if view.is_rendered() {
				prop_assert_eq!(Some(tree.content(view.node())), view.content());
			}
		}
	}
}
