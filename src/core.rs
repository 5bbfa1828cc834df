//! Core module.
//!
//! Lifecycle errors, event emitters and data serializers.
//!
//! # Examples
//!
//! ```rust
//! use tessera::core::{EventEmitter, EventName};
//!
//! let emitter = EventEmitter::new();
//! emitter.on(EventName::RENDER, |_| {});
//! assert_eq!(emitter.trigger(EventName::RENDER), 1);
//! ```

pub use tessera_core::*;
