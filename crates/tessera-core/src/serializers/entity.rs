//! Data source capabilities and their in-memory implementations

use crate::events::{EventEmitter, EventName, Observable};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single entity exposing an attribute mapping
pub trait Entity {
	/// Returns a copy of the entity's attributes
	fn attributes(&self) -> Map<String, Value>;
}

/// An ordered sequence of entities
pub trait EntityCollection {
	/// Returns the entities in iteration order
	fn entities(&self) -> Vec<Rc<dyn Entity>>;
}

/// In-memory entity with change notifications
///
/// `set` and `unset` emit `change` and a namespaced `change:<attribute>`
/// event whenever the stored value actually changes.
///
/// # Examples
///
/// ```
/// use tessera_core::serializers::{Entity, Model};
/// use serde_json::json;
///
/// let model = Model::from_value(json!({"id": 1})).unwrap();
/// model.set("title", json!("Hello"));
///
/// assert_eq!(model.get("title"), Some(json!("Hello")));
/// assert_eq!(model.attributes().len(), 2);
/// ```
#[derive(Default)]
pub struct Model {
	attributes: RefCell<Map<String, Value>>,
	events: EventEmitter,
}

impl Model {
	/// Creates a model without attributes
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a model from an attribute mapping
	pub fn from_attributes(attributes: Map<String, Value>) -> Self {
		Self {
			attributes: RefCell::new(attributes),
			events: EventEmitter::new(),
		}
	}

	/// Creates a model from a JSON object. Returns `None` for any other JSON value.
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(attributes) => Some(Self::from_attributes(attributes)),
			_ => None,
		}
	}

	/// Returns the value of an attribute
	pub fn get(&self, key: &str) -> Option<Value> {
		self.attributes.borrow().get(key).cloned()
	}

	/// Check if an attribute is present
	pub fn has(&self, key: &str) -> bool {
		self.attributes.borrow().contains_key(key)
	}

	/// Sets an attribute. Returns `true` if the stored value changed.
	pub fn set(&self, key: impl Into<String>, value: Value) -> bool {
		let key = key.into();
		let changed = {
			let mut attributes = self.attributes.borrow_mut();
			if attributes.get(&key) == Some(&value) {
				false
			} else {
				attributes.insert(key.clone(), value);
				true
			}
		};
		if changed {
			self.notify_change(&key);
		}
		changed
	}

	/// Removes an attribute. Returns `true` if it was present.
	pub fn unset(&self, key: &str) -> bool {
		let removed = self.attributes.borrow_mut().remove(key).is_some();
		if removed {
			self.notify_change(key);
		}
		removed
	}

	fn notify_change(&self, key: &str) {
		self.events.trigger_with(
			EventName::from_string(format!("change:{}", key)),
			vec![Value::String(key.to_string())],
		);
		self.events.trigger(EventName::CHANGE);
	}
}

impl Entity for Model {
	fn attributes(&self) -> Map<String, Value> {
		self.attributes.borrow().clone()
	}
}

impl Observable for Model {
	fn events(&self) -> &EventEmitter {
		&self.events
	}
}

impl fmt::Debug for Model {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Model")
			.field("attributes", &*self.attributes.borrow())
			.finish()
	}
}

impl Entity for Map<String, Value> {
	fn attributes(&self) -> Map<String, Value> {
		self.clone()
	}
}

/// In-memory ordered collection of models
///
/// `add` emits `add`; `reset` emits `reset`.
#[derive(Default)]
pub struct Collection {
	models: RefCell<Vec<Rc<Model>>>,
	events: EventEmitter,
}

impl Collection {
	/// Creates an empty collection
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a collection holding `models`, in order
	pub fn from_models(models: impl IntoIterator<Item = Rc<Model>>) -> Self {
		Self {
			models: RefCell::new(models.into_iter().collect()),
			events: EventEmitter::new(),
		}
	}

	/// Creates a collection from JSON objects; non-object values are skipped
	pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
		Self::from_models(values.into_iter().filter_map(Model::from_value).map(Rc::new))
	}

	/// Appends a model
	pub fn add(&self, model: Rc<Model>) {
		self.models.borrow_mut().push(model);
		self.events.trigger(EventName::ADD);
	}

	/// Replaces every model
	pub fn reset(&self, models: impl IntoIterator<Item = Rc<Model>>) {
		*self.models.borrow_mut() = models.into_iter().collect();
		self.events.trigger(EventName::RESET);
	}

	/// Returns the model at `index`
	pub fn get(&self, index: usize) -> Option<Rc<Model>> {
		self.models.borrow().get(index).cloned()
	}

	/// Snapshot of the models, in order
	pub fn models(&self) -> Vec<Rc<Model>> {
		self.models.borrow().clone()
	}

	/// Number of models
	pub fn len(&self) -> usize {
		self.models.borrow().len()
	}

	/// Check if the collection is empty
	pub fn is_empty(&self) -> bool {
		self.models.borrow().is_empty()
	}
}

impl EntityCollection for Collection {
	fn entities(&self) -> Vec<Rc<dyn Entity>> {
		self.models
			.borrow()
			.iter()
			.map(|m| Rc::clone(m) as Rc<dyn Entity>)
			.collect()
	}
}

impl Observable for Collection {
	fn events(&self) -> &EventEmitter {
		&self.events
	}
}

impl fmt::Debug for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Collection")
			.field("models", &*self.models.borrow())
			.finish()
	}
}
