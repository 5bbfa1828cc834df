//! The view lifecycle controller
//!
//! A [`View`] wraps one element of a [`HostTree`] and moves it through four
//! phases: compiling content ([`View::render`]), entering the tree
//! ([`View::attach`]), leaving it ([`View::detach`]) and permanent removal
//! ([`View::remove`]). Child views are placed into named regions of the
//! parent's content and follow the parent's attach/detach transitions.
//!
//! `View` is a cheap handle; clones refer to the same view.

mod children;
mod lifecycle;

use crate::options::ViewOptions;
use crate::regions::RegionProvider;
use crate::template::Template;
use indexmap::IndexMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};
use tessera_core::events::{Event, EventEmitter, EventName, ListenerId, Listening, Observable};
use tessera_core::serializers::{DataSource, Entity, EntityCollection};
use tessera_dom::{HostTree, NodeId};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique view identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
	fn next() -> Self {
		Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Raw numeric value
	pub fn as_u64(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view{}", self.0)
	}
}

#[derive(Default)]
struct ViewState {
	/// Last compiled content, the baseline for skipping identical renders
	content: Option<String>,
	regions: IndexMap<String, String>,
	children: IndexMap<String, View>,
	data_source: Option<DataSource>,
	rendered: bool,
	attached: bool,
	removed: bool,
}

struct ViewInner {
	id: ViewId,
	host: Rc<dyn HostTree>,
	node: NodeId,
	template: Option<Rc<dyn Template>>,
	regions: Option<Rc<dyn RegionProvider>>,
	events: EventEmitter,
	listening: Listening,
	state: RefCell<ViewState>,
}

/// A stateful wrapper around one host-tree element
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use tessera_dom::{HostTree, MemoryTree};
/// use tessera_views::{View, ViewOptions};
///
/// let tree = Rc::new(MemoryTree::new());
/// let view = View::with_options(
///     tree.clone(),
///     ViewOptions::new().with_template(|_: &serde_json::Value| "foo".to_string()),
/// );
///
/// view.render()?.attach(tree.body(), None)?;
///
/// assert_eq!(tree.content(view.node()), "foo");
/// assert!(view.is_rendered() && view.is_attached());
///
/// view.remove()?;
/// assert!(view.is_removed());
/// # Ok::<(), tessera_core::ViewError>(())
/// ```
#[derive(Clone)]
pub struct View {
	inner: Rc<ViewInner>,
}

impl View {
	/// Creates a `div` view without template or regions
	pub fn new(host: Rc<dyn HostTree>) -> Self {
		Self::with_options(host, ViewOptions::new())
	}

	/// Creates a view, its element and the element's attributes
	pub fn with_options(host: Rc<dyn HostTree>, options: ViewOptions) -> Self {
		let node = host.create_element(options.tag_name());
		if let Some(id) = &options.id {
			host.set_attribute(node, "id", id);
		}
		if let Some(class_name) = &options.class_name {
			host.set_attribute(node, "class", class_name);
		}
		for (name, value) in &options.attributes {
			host.set_attribute(node, name, value);
		}

		let ViewOptions {
			template,
			regions,
			data_source,
			..
		} = options;
		let id = ViewId::next();
		tracing::debug!(view = %id, %node, "View created");

		Self {
			inner: Rc::new(ViewInner {
				id,
				host,
				node,
				template,
				regions,
				events: EventEmitter::new(),
				listening: Listening::new(),
				state: RefCell::new(ViewState {
					data_source,
					..ViewState::default()
				}),
			}),
		}
	}

	fn state(&self) -> Ref<'_, ViewState> {
		self.inner.state.borrow()
	}

	fn state_mut(&self) -> RefMut<'_, ViewState> {
		self.inner.state.borrow_mut()
	}

	/// Identifier used in logs
	pub fn id(&self) -> ViewId {
		self.inner.id
	}

	/// The element owned by this view. Stale once the view is removed.
	pub fn node(&self) -> NodeId {
		self.inner.node
	}

	/// The tree the element lives in
	pub fn host(&self) -> &Rc<dyn HostTree> {
		&self.inner.host
	}

	/// Check if content has been materialized at least once since creation
	pub fn is_rendered(&self) -> bool {
		self.state().rendered
	}

	/// Check if the element is inserted into a parent
	pub fn is_attached(&self) -> bool {
		self.state().attached
	}

	/// Check if the view has been removed
	pub fn is_removed(&self) -> bool {
		self.state().removed
	}

	/// Check if a template is configured
	pub fn has_template(&self) -> bool {
		self.inner.template.is_some()
	}

	/// The materialized content, `None` before the first render or without template
	pub fn content(&self) -> Option<String> {
		self.state().content.clone()
	}

	/// Region map computed by the last render
	pub fn regions(&self) -> IndexMap<String, String> {
		self.state().regions.clone()
	}

	/// First element inside this view matching `selector`
	pub fn query(&self, selector: &str) -> Option<NodeId> {
		if self.is_removed() {
			return None;
		}
		self.inner.host.query_descendant(self.inner.node, selector)
	}

	/// Current data source
	pub fn data_source(&self) -> Option<DataSource> {
		self.state().data_source.clone()
	}

	/// Uses a single entity as data source. Takes effect on the next render.
	pub fn set_model<E: Entity + 'static>(&self, model: Rc<E>) {
		self.state_mut().data_source = Some(DataSource::model(model));
	}

	/// Uses a collection as data source. Takes effect on the next render.
	pub fn set_collection<C: EntityCollection + 'static>(&self, collection: Rc<C>) {
		self.state_mut().data_source = Some(DataSource::collection(collection));
	}

	/// Drops the data source; templates then receive `null`
	pub fn clear_data_source(&self) {
		self.state_mut().data_source = None;
	}

	/// Subscribes to an event of this view
	pub fn on<F>(&self, name: EventName, handler: F) -> ListenerId
	where
		F: Fn(&Event) + 'static,
	{
		self.inner.events.on(name, handler)
	}

	/// Subscribes to the next occurrence of an event of this view
	pub fn once<F>(&self, name: EventName, handler: F) -> ListenerId
	where
		F: Fn(&Event) + 'static,
	{
		self.inner.events.once(name, handler)
	}

	/// Unsubscribes a handler registered with [`on`](Self::on) or [`once`](Self::once)
	pub fn off(&self, id: ListenerId) -> bool {
		self.inner.events.off(id)
	}

	/// Triggers an event on this view
	pub fn trigger(&self, name: EventName) -> usize {
		self.inner.events.trigger(name)
	}

	/// Subscribes to an event of another emitter. The subscription is released
	/// by [`stop_listening`](Self::stop_listening) and by [`remove`](Self::remove).
	///
	/// # Examples
	///
	/// ```
	/// use std::rc::Rc;
	/// use serde_json::{json, Value};
	/// use tessera_core::{EventName, Model};
	/// use tessera_dom::{HostTree, MemoryTree};
	/// use tessera_views::{View, ViewOptions};
	///
	/// let tree = Rc::new(MemoryTree::new());
	/// let model = Rc::new(Model::from_value(json!({"title": "a"})).unwrap());
	/// let view = View::with_options(
	///     tree.clone(),
	///     ViewOptions::new()
	///         .with_model(model.clone())
	///         .with_template(|data: &Value| data["title"].as_str().unwrap_or_default().to_string()),
	/// );
	/// let weak = view.downgrade();
	/// view.listen_to(&*model, EventName::CHANGE, move |_| {
	///     if let Some(view) = weak.upgrade() {
	///         let _ = view.render();
	///     }
	/// });
	///
	/// view.render()?;
	/// model.set("title", json!("b"));
	///
	/// assert_eq!(tree.content(view.node()), "b");
	/// # Ok::<(), tessera_core::ViewError>(())
	/// ```
	pub fn listen_to<O, F>(&self, source: &O, name: EventName, handler: F) -> ListenerId
	where
		O: Observable + ?Sized,
		F: Fn(&Event) + 'static,
	{
		self.inner.listening.listen_to(source, name, handler)
	}

	/// Like [`listen_to`](Self::listen_to), for a single occurrence
	pub fn listen_to_once<O, F>(&self, source: &O, name: EventName, handler: F) -> ListenerId
	where
		O: Observable + ?Sized,
		F: Fn(&Event) + 'static,
	{
		self.inner.listening.listen_to_once(source, name, handler)
	}

	/// Releases the subscriptions held on `source`
	pub fn stop_listening_to<O>(&self, source: &O) -> usize
	where
		O: Observable + ?Sized,
	{
		self.inner.listening.stop_listening_to(source)
	}

	/// Releases every subscription made with [`listen_to`](Self::listen_to)
	pub fn stop_listening(&self) -> usize {
		self.inner.listening.stop_listening()
	}

	/// Non-owning handle, for handlers that must not keep the view alive
	pub fn downgrade(&self) -> WeakView {
		WeakView {
			inner: Rc::downgrade(&self.inner),
		}
	}

	/// Check if both handles refer to the same view
	pub fn ptr_eq(&self, other: &View) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Observable for View {
	fn events(&self) -> &EventEmitter {
		&self.inner.events
	}
}

impl PartialEq for View {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl Eq for View {}

impl fmt::Debug for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state();
		f.debug_struct("View")
			.field("id", &self.inner.id)
			.field("node", &self.inner.node)
			.field("rendered", &state.rendered)
			.field("attached", &state.attached)
			.field("removed", &state.removed)
			.field("children", &state.children.keys().collect::<Vec<_>>())
			.finish()
	}
}

/// Weak reference to a [`View`]
#[derive(Clone, Debug, Default)]
pub struct WeakView {
	inner: Weak<ViewInner>,
}

impl WeakView {
	/// Returns the view if it is still alive
	pub fn upgrade(&self) -> Option<View> {
		self.inner.upgrade().map(|inner| View { inner })
	}
}
