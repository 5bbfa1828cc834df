//! Data sources and template data serialization
//!
//! - [`Entity`] / [`EntityCollection`]: the narrow data-source capabilities a view consumes
//! - [`Model`] / [`Collection`]: in-memory implementations with change events
//! - [`serialize_model`] / [`serialize_collection`]: conversion into template data

mod entity;
mod serializer;

pub use entity::{Collection, Entity, EntityCollection, Model};
pub use serializer::{
	COLLECTION_KEY, DataSource, serialize_collection, serialize_data, serialize_model,
};
