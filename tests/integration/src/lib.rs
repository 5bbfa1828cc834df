//! Integration test utilities for Tessera
//!
//! Shared fixtures for tests that exercise several Tessera crates together
//! through the `tessera` facade.

use rstest::fixture;
use std::cell::RefCell;
use std::rc::Rc;
use tessera::prelude::*;

/// Event names recorded by [`record_events`], in emission order
pub type EventLog = Rc<RefCell<Vec<String>>>;

/// A fresh in-memory host tree
#[fixture]
pub fn tree() -> Rc<MemoryTree> {
	Rc::new(MemoryTree::new())
}

/// Records the name of every event `view` emits from now on
pub fn record_events(view: &View) -> EventLog {
	let log = EventLog::default();
	view.events().on_any({
		let log = Rc::clone(&log);
		move |event| log.borrow_mut().push(event.name.to_string())
	});
	log
}
