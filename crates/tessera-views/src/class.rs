//! View factories
//!
//! A [`ViewClass`] bundles default [`ViewOptions`] under a name, the way a
//! view subclass declares its template, tag and regions. Classes can be
//! extended; options given at instantiation override the class defaults.

use crate::options::ViewOptions;
use crate::view::View;
use std::fmt;
use std::rc::Rc;
use tessera_dom::HostTree;

struct ClassInner {
	name: String,
	parent: Option<ViewClass>,
	defaults: ViewOptions,
}

/// A named view factory
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use tessera_dom::{HostTree, MemoryTree};
/// use tessera_views::{StaticTemplate, ViewClass, ViewOptions};
///
/// let card = ViewClass::new(
///     "Card",
///     ViewOptions::new().with_class_name("card").with_template(StaticTemplate::new("<p>card</p>")),
/// );
/// let wide_card = card.extend("WideCard", ViewOptions::new().with_class_name("card wide"));
///
/// let tree = Rc::new(MemoryTree::new());
/// let view = wide_card.instantiate(tree.clone(), ViewOptions::new());
/// view.render()?;
///
/// assert_eq!(tree.attribute(view.node(), "class").as_deref(), Some("card wide"));
/// assert_eq!(tree.content(view.node()), "<p>card</p>");
/// assert!(wide_card.is_subclass_of(&card));
/// # Ok::<(), tessera_core::ViewError>(())
/// ```
#[derive(Clone)]
pub struct ViewClass {
	inner: Rc<ClassInner>,
}

impl ViewClass {
	/// Declares a class with default options
	pub fn new(name: impl Into<String>, defaults: ViewOptions) -> Self {
		Self {
			inner: Rc::new(ClassInner {
				name: name.into(),
				parent: None,
				defaults,
			}),
		}
	}

	/// Derives a class whose defaults are these defaults overridden by `overrides`
	pub fn extend(&self, name: impl Into<String>, overrides: ViewOptions) -> Self {
		Self {
			inner: Rc::new(ClassInner {
				name: name.into(),
				parent: Some(self.clone()),
				defaults: self.inner.defaults.clone().merge(overrides),
			}),
		}
	}

	/// Class name
	pub fn name(&self) -> &str {
		&self.inner.name
	}

	/// Class this one was extended from
	pub fn parent(&self) -> Option<&ViewClass> {
		self.inner.parent.as_ref()
	}

	/// Default options of the class
	pub fn defaults(&self) -> &ViewOptions {
		&self.inner.defaults
	}

	/// Check if this class is `other` or was extended from it, directly or not
	pub fn is_subclass_of(&self, other: &ViewClass) -> bool {
		let mut current = Some(self);
		while let Some(class) = current {
			if Rc::ptr_eq(&class.inner, &other.inner) {
				return true;
			}
			current = class.parent();
		}
		false
	}

	/// Creates a view from the class defaults overridden by `options`
	pub fn instantiate(&self, host: Rc<dyn HostTree>, options: ViewOptions) -> View {
		tracing::trace!(class = %self.name(), "Instantiating view");
		View::with_options(host, self.inner.defaults.clone().merge(options))
	}
}

impl fmt::Debug for ViewClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewClass")
			.field("name", &self.inner.name)
			.field("parent", &self.parent().map(ViewClass::name))
			.finish()
	}
}
