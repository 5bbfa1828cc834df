//! View construction options

use crate::regions::RegionProvider;
use crate::settings::ViewSettings;
use crate::template::Template;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;
use tessera_core::serializers::{DataSource, Entity, EntityCollection};

/// Tag used when no `tag_name` is given
pub const DEFAULT_TAG_NAME: &str = "div";

/// Options accepted by [`View::with_options`](crate::View::with_options)
///
/// # Examples
///
/// ```
/// use tessera_views::ViewOptions;
/// use tessera_views::regions::region_map;
///
/// let options = ViewOptions::new()
///     .with_tag_name("article")
///     .with_class_name("card")
///     .with_attribute("data-id", "7")
///     .with_template(|_: &serde_json::Value| "<div data-region=body></div>".to_string())
///     .with_regions(region_map([("body", "[data-region=body]")]));
///
/// assert_eq!(options.tag_name(), "article");
/// assert!(options.has_template());
/// ```
#[derive(Clone, Default)]
pub struct ViewOptions {
	pub(crate) tag_name: Option<String>,
	pub(crate) id: Option<String>,
	pub(crate) class_name: Option<String>,
	pub(crate) attributes: IndexMap<String, String>,
	pub(crate) template: Option<Rc<dyn Template>>,
	pub(crate) regions: Option<Rc<dyn RegionProvider>>,
	pub(crate) data_source: Option<DataSource>,
}

impl ViewOptions {
	/// Creates empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates options from declarative settings
	pub fn from_settings(settings: ViewSettings) -> Self {
		let ViewSettings {
			tag_name,
			id,
			class_name,
			attributes,
			regions,
		} = settings;
		Self {
			tag_name,
			id,
			class_name,
			attributes,
			regions: if regions.is_empty() {
				None
			} else {
				Some(Rc::new(regions))
			},
			..Self::default()
		}
	}

	/// Sets the element tag
	pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
		self.tag_name = Some(tag_name.into());
		self
	}

	/// Sets the element `id`
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the element `class`
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Adds an element attribute
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Sets the template
	pub fn with_template<T: Template + 'static>(self, template: T) -> Self {
		self.with_shared_template(Rc::new(template))
	}

	/// Sets a template shared with other views
	pub fn with_shared_template(mut self, template: Rc<dyn Template>) -> Self {
		self.template = Some(template);
		self
	}

	/// Sets the region descriptor
	pub fn with_regions<R: RegionProvider + 'static>(mut self, regions: R) -> Self {
		self.regions = Some(Rc::new(regions));
		self
	}

	/// Uses a single entity as data source
	pub fn with_model<E: Entity + 'static>(mut self, model: Rc<E>) -> Self {
		self.data_source = Some(DataSource::model(model));
		self
	}

	/// Uses a collection as data source
	pub fn with_collection<C: EntityCollection + 'static>(mut self, collection: Rc<C>) -> Self {
		self.data_source = Some(DataSource::collection(collection));
		self
	}

	/// Tag that will be created
	pub fn tag_name(&self) -> &str {
		self.tag_name.as_deref().unwrap_or(DEFAULT_TAG_NAME)
	}

	/// Check if a template is configured
	pub fn has_template(&self) -> bool {
		self.template.is_some()
	}

	/// Layers `overrides` on top of these options
	///
	/// Every value set in `overrides` wins; attributes are merged with the
	/// overriding values replacing existing ones.
	pub fn merge(mut self, overrides: ViewOptions) -> Self {
		self.tag_name = overrides.tag_name.or(self.tag_name);
		self.id = overrides.id.or(self.id);
		self.class_name = overrides.class_name.or(self.class_name);
		self.attributes.extend(overrides.attributes);
		self.template = overrides.template.or(self.template);
		self.regions = overrides.regions.or(self.regions);
		self.data_source = overrides.data_source.or(self.data_source);
		self
	}
}

impl fmt::Debug for ViewOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewOptions")
			.field("tag_name", &self.tag_name)
			.field("id", &self.id)
			.field("class_name", &self.class_name)
			.field("attributes", &self.attributes)
			.field("template", &self.template.is_some())
			.field("regions", &self.regions.is_some())
			.field("data_source", &self.data_source)
			.finish()
	}
}
