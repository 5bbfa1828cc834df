//! Observable events
//!
//! - [`EventName`]: type-safe event names with lifecycle constants
//! - [`EventEmitter`]: synchronous `on` / `once` / `off` / `trigger`
//! - [`Listening`]: subscriptions held on other emitters (`listen_to` / `stop_listening`)

mod core;
mod emitter;
mod listening;

pub use self::core::EventName;
pub use emitter::{Event, EventEmitter, HandlerFn, ListenerId, Observable};
pub use listening::Listening;
