//! Template data serialization
//!
//! Turns the data source of a view into the JSON value handed to its template.

use super::entity::{Entity, EntityCollection};
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;

/// Key under which collection entries are exposed to templates
pub const COLLECTION_KEY: &str = "collection";

/// Where a view gets its template data from
#[derive(Clone)]
pub enum DataSource {
	/// A single entity
	Model(Rc<dyn Entity>),
	/// An ordered collection of entities
	Collection(Rc<dyn EntityCollection>),
}

impl DataSource {
	/// Wraps a single entity
	pub fn model<E: Entity + 'static>(entity: Rc<E>) -> Self {
		Self::Model(entity)
	}

	/// Wraps a collection
	pub fn collection<C: EntityCollection + 'static>(collection: Rc<C>) -> Self {
		Self::Collection(collection)
	}

	/// Serializes the source with [`serialize_model`] or [`serialize_collection`]
	pub fn serialize(&self) -> Value {
		match self {
			Self::Model(entity) => serialize_model(entity.as_ref()),
			Self::Collection(collection) => serialize_collection(collection.as_ref()),
		}
	}
}

impl fmt::Debug for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Model(_) => f.write_str("DataSource::Model"),
			Self::Collection(_) => f.write_str("DataSource::Collection"),
		}
	}
}

/// Serializes an entity as a fresh shallow copy of its attributes
///
/// # Examples
///
/// ```
/// use tessera_core::serializers::{serialize_model, Model};
/// use serde_json::json;
///
/// let model = Model::from_value(json!({"id": 1})).unwrap();
/// assert_eq!(serialize_model(&model), json!({"id": 1}));
/// ```
pub fn serialize_model(entity: &dyn Entity) -> Value {
	Value::Object(entity.attributes())
}

/// Serializes a collection as `{ "collection": [entities...] }`, preserving order
///
/// # Examples
///
/// ```
/// use tessera_core::serializers::{serialize_collection, Collection};
/// use serde_json::json;
///
/// let collection = Collection::from_values(vec![json!({"id": 1}), json!({"id": 2})]);
/// assert_eq!(
///     serialize_collection(&collection),
///     json!({"collection": [{"id": 1}, {"id": 2}]})
/// );
/// ```
pub fn serialize_collection(collection: &dyn EntityCollection) -> Value {
	let entries = collection
		.entities()
		.iter()
		.map(|entity| serialize_model(entity.as_ref()))
		.collect();

	let mut data = Map::new();
	data.insert(COLLECTION_KEY.to_string(), Value::Array(entries));
	Value::Object(data)
}

/// Serializes an optional data source; no source yields `null`
pub fn serialize_data(source: Option<&DataSource>) -> Value {
	source.map_or(Value::Null, DataSource::serialize)
}
