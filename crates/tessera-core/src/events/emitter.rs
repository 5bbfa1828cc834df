//! Synchronous, single-threaded event emitter
//!
//! [`EventEmitter`] is the observable capability shared by views, models and
//! collections. Dispatch is synchronous: `trigger` runs every matching handler
//! to completion before it returns.
//!
//! Handlers are snapshotted before dispatch and no internal borrow is held
//! while they run, so a handler may freely call `on`, `off` or `trigger` on
//! the same emitter. Changes made during a dispatch take effect for the next
//! `trigger`.

use super::core::EventName;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier returned when registering a handler, used to unregister it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
	fn next() -> Self {
		Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
	}

	/// Raw numeric value
	pub fn as_u64(&self) -> u64 {
		self.0
	}
}

/// A dispatched event
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	/// Name the event was triggered with
	pub name: EventName,
	/// Extra arguments passed to `trigger`
	pub args: Vec<Value>,
}

impl Event {
	/// Creates an event without arguments
	pub fn new(name: EventName) -> Self {
		Self {
			name,
			args: Vec::new(),
		}
	}

	/// Creates an event carrying arguments
	pub fn with_args(name: EventName, args: Vec<Value>) -> Self {
		Self { name, args }
	}
}

/// Handler function type
pub type HandlerFn = Rc<dyn Fn(&Event)>;

struct Listener {
	id: ListenerId,
	/// `None` subscribes to every event
	name: Option<EventName>,
	handler: HandlerFn,
	once: bool,
	dispatch_uid: Option<String>,
}

impl Listener {
	fn matches(&self, name: &EventName) -> bool {
		self.name.as_ref().is_none_or(|n| n == name)
	}
}

type ListenerList = RefCell<Vec<Listener>>;

/// Observable event source
///
/// Cloning an emitter yields another handle to the same listener list.
///
/// # Examples
///
/// ```
/// use tessera_core::events::{EventEmitter, EventName};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let emitter = EventEmitter::new();
/// let hits = Rc::new(Cell::new(0));
///
/// let id = emitter.on(EventName::RENDER, {
///     let hits = Rc::clone(&hits);
///     move |_| hits.set(hits.get() + 1)
/// });
///
/// emitter.trigger(EventName::RENDER);
/// emitter.off(id);
/// emitter.trigger(EventName::RENDER);
///
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct EventEmitter {
	listeners: Rc<ListenerList>,
}

impl EventEmitter {
	/// Creates an emitter with no listeners
	pub fn new() -> Self {
		Self::default()
	}

	fn register(
		&self,
		name: Option<EventName>,
		handler: HandlerFn,
		once: bool,
		dispatch_uid: Option<String>,
	) -> ListenerId {
		let id = ListenerId::next();
		let mut listeners = self.listeners.borrow_mut();

		// Remove existing listener with same dispatch_uid
		if let Some(ref uid) = dispatch_uid {
			listeners.retain(|l| l.dispatch_uid.as_ref() != Some(uid));
		}

		listeners.push(Listener {
			id,
			name,
			handler,
			once,
			dispatch_uid,
		});
		id
	}

	/// Subscribes `handler` to `name`
	pub fn on<F>(&self, name: EventName, handler: F) -> ListenerId
	where
		F: Fn(&Event) + 'static,
	{
		self.register(Some(name), Rc::new(handler), false, None)
	}

	/// Subscribes `handler` to every event
	pub fn on_any<F>(&self, handler: F) -> ListenerId
	where
		F: Fn(&Event) + 'static,
	{
		self.register(None, Rc::new(handler), false, None)
	}

	/// Subscribes `handler` to the next occurrence of `name` only
	pub fn once<F>(&self, name: EventName, handler: F) -> ListenerId
	where
		F: Fn(&Event) + 'static,
	{
		self.register(Some(name), Rc::new(handler), true, None)
	}

	/// Subscribes `handler` under a unique id, replacing any earlier listener
	/// registered with the same id
	pub fn on_with_uid<F>(&self, name: EventName, dispatch_uid: impl Into<String>, handler: F) -> ListenerId
	where
		F: Fn(&Event) + 'static,
	{
		self.register(Some(name), Rc::new(handler), false, Some(dispatch_uid.into()))
	}

	/// Removes a single listener. Returns `false` if it was not registered.
	pub fn off(&self, id: ListenerId) -> bool {
		let mut listeners = self.listeners.borrow_mut();
		let original_len = listeners.len();
		listeners.retain(|l| l.id != id);
		listeners.len() < original_len
	}

	/// Removes every listener subscribed to `name` and returns how many were removed
	pub fn off_event(&self, name: &EventName) -> usize {
		let mut listeners = self.listeners.borrow_mut();
		let original_len = listeners.len();
		listeners.retain(|l| l.name.as_ref() != Some(name));
		original_len - listeners.len()
	}

	/// Removes every listener
	pub fn off_all(&self) {
		self.listeners.borrow_mut().clear();
	}

	/// Triggers `name` without arguments. Returns the number of handlers run.
	pub fn trigger(&self, name: EventName) -> usize {
		self.dispatch(Event::new(name))
	}

	/// Triggers `name` with arguments. Returns the number of handlers run.
	pub fn trigger_with(&self, name: EventName, args: Vec<Value>) -> usize {
		self.dispatch(Event::with_args(name, args))
	}

	fn dispatch(&self, event: Event) -> usize {
		let handlers: Vec<HandlerFn> = {
			let mut listeners = self.listeners.borrow_mut();
			let handlers = listeners
				.iter()
				.filter(|l| l.matches(&event.name))
				.map(|l| Rc::clone(&l.handler))
				.collect();
			listeners.retain(|l| !(l.once && l.matches(&event.name)));
			handlers
		};

		tracing::trace!(event = %event.name, handlers = handlers.len(), "dispatching event");

		for handler in &handlers {
			handler(&event);
		}
		handlers.len()
	}

	/// Number of registered listeners
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	/// Number of listeners that would run for `name`
	pub fn listener_count_for(&self, name: &EventName) -> usize {
		self.listeners
			.borrow()
			.iter()
			.filter(|l| l.matches(name))
			.count()
	}

	/// Check if the emitter has any listeners
	pub fn has_listeners(&self) -> bool {
		!self.listeners.borrow().is_empty()
	}

	/// Returns `true` if both handles share the same listener list
	pub fn ptr_eq(&self, other: &EventEmitter) -> bool {
		Rc::ptr_eq(&self.listeners, &other.listeners)
	}

	pub(crate) fn downgrade(&self) -> WeakEmitter {
		WeakEmitter {
			listeners: Rc::downgrade(&self.listeners),
		}
	}
}

impl fmt::Debug for EventEmitter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventEmitter")
			.field("listeners", &self.listener_count())
			.finish()
	}
}

/// Non-owning emitter handle, used to unsubscribe without keeping the source alive
#[derive(Clone)]
pub(crate) struct WeakEmitter {
	listeners: Weak<ListenerList>,
}

impl WeakEmitter {
	pub(crate) fn upgrade(&self) -> Option<EventEmitter> {
		self.listeners.upgrade().map(|listeners| EventEmitter { listeners })
	}
}

/// Anything that exposes an [`EventEmitter`]
pub trait Observable {
	/// The emitter events are dispatched on
	fn events(&self) -> &EventEmitter;
}

impl Observable for EventEmitter {
	fn events(&self) -> &EventEmitter {
		self
	}
}
