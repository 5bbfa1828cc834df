//! Bookkeeping for subscriptions an object holds on other emitters
//!
//! A view that reacts to its model registers handlers on the model's emitter.
//! [`Listening`] remembers those registrations so they can all be undone when
//! the view goes away, without the view having to track listener ids itself.

use super::core::EventName;
use super::emitter::{Event, ListenerId, Observable, WeakEmitter};
use std::cell::RefCell;

struct Subscription {
	source: WeakEmitter,
	id: ListenerId,
}

/// Subscriptions registered on other emitters
///
/// Sources are held weakly: listening to a model never keeps it alive.
#[derive(Default)]
pub struct Listening {
	subscriptions: RefCell<Vec<Subscription>>,
}

impl Listening {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Subscribes `handler` to `name` on `source` and records the subscription
	pub fn listen_to<O, F>(&self, source: &O, name: EventName, handler: F) -> ListenerId
	where
		O: Observable + ?Sized,
		F: Fn(&Event) + 'static,
	{
		let emitter = source.events();
		let id = emitter.on(name, handler);
		self.record(emitter.downgrade(), id);
		id
	}

	/// Like [`listen_to`](Self::listen_to), but the handler runs at most once
	pub fn listen_to_once<O, F>(&self, source: &O, name: EventName, handler: F) -> ListenerId
	where
		O: Observable + ?Sized,
		F: Fn(&Event) + 'static,
	{
		let emitter = source.events();
		let id = emitter.once(name, handler);
		self.record(emitter.downgrade(), id);
		id
	}

	fn record(&self, source: WeakEmitter, id: ListenerId) {
		self.subscriptions
			.borrow_mut()
			.push(Subscription { source, id });
	}

	/// Removes every subscription held on `source`. Returns how many were removed.
	pub fn stop_listening_to<O>(&self, source: &O) -> usize
	where
		O: Observable + ?Sized,
	{
		let target = source.events();
		let mut removed = 0;
		self.subscriptions.borrow_mut().retain(|sub| {
			match sub.source.upgrade() {
				Some(emitter) if emitter.ptr_eq(target) => {
					emitter.off(sub.id);
					removed += 1;
					false
				}
				Some(_) => true,
				// Source is gone, nothing left to unsubscribe from
				None => false,
			}
		});
		removed
	}

	/// Removes every recorded subscription. Returns how many were still live.
	pub fn stop_listening(&self) -> usize {
		let subscriptions = std::mem::take(&mut *self.subscriptions.borrow_mut());
		let mut removed = 0;
		for sub in subscriptions {
			if let Some(emitter) = sub.source.upgrade()
				&& emitter.off(sub.id)
			{
				removed += 1;
			}
		}
		if removed > 0 {
			tracing::debug!(removed, "stopped listening");
		}
		removed
	}

	/// Number of recorded subscriptions
	pub fn len(&self) -> usize {
		self.subscriptions.borrow().len()
	}

	/// Check if no subscriptions are recorded
	pub fn is_empty(&self) -> bool {
		self.subscriptions.borrow().is_empty()
	}
}

impl std::fmt::Debug for Listening {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Listening")
			.field("subscriptions", &self.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::events::EventEmitter;
	use rstest::rstest;
	use std::cell::Cell;
	use std::rc::Rc;

	#[rstest]
	fn test_stop_listening_unsubscribes_everything() {
		// Arrange
		let model = EventEmitter::new();
		let collection = EventEmitter::new();
		let listening = Listening::new();
		let hits = Rc::new(Cell::new(0));
		for source in [&model, &collection] {
			listening.listen_to(source, EventName::CHANGE, {
				let hits = Rc::clone(&hits);
				move |_| hits.set(hits.get() + 1)
			});
		}

		// Act
		let removed = listening.stop_listening();
		model.trigger(EventName::CHANGE);
		collection.trigger(EventName::CHANGE);

		// Assert
		assert_eq!(removed, 2);
		assert_eq!(hits.get(), 0);
		assert!(listening.is_empty());
		assert!(!model.has_listeners());
	}

	#[rstest]
	fn test_stop_listening_to_single_source() {
		let model = EventEmitter::new();
		let other = EventEmitter::new();
		let listening = Listening::new();
		listening.listen_to(&model, EventName::CHANGE, |_| {});
		listening.listen_to(&model, EventName::RESET, |_| {});
		listening.listen_to(&other, EventName::CHANGE, |_| {});

		let removed = listening.stop_listening_to(&model);

		assert_eq!(removed, 2);
		assert_eq!(listening.len(), 1);
		assert!(!model.has_listeners());
		assert!(other.has_listeners());
	}

	#[rstest]
	fn test_dropped_source_is_skipped() {
		let listening = Listening::new();
		{
			let model = EventEmitter::new();
			listening.listen_to(&model, EventName::CHANGE, |_| {});
		}

		assert_eq!(listening.stop_listening(), 0);
		assert!(listening.is_empty());
	}

	#[rstest]
	fn test_listen_to_once() {
		let model = EventEmitter::new();
		let listening = Listening::new();
		let hits = Rc::new(Cell::new(0));
		listening.listen_to_once(&model, EventName::ADD, {
			let hits = Rc::clone(&hits);
			move |_| hits.set(hits.get() + 1)
		});

		model.trigger(EventName::ADD);
		model.trigger(EventName::ADD);

		assert_eq!(hits.get(), 1);
		// The handler already unregistered itself
		assert_eq!(listening.stop_listening(), 0);
	}
}
