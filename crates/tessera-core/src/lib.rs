//! # Tessera Core
//!
//! Core building blocks shared by the Tessera crates:
//!
//! - [`error`]: the lifecycle error taxonomy ([`ViewError`])
//! - [`events`]: typed, synchronous event emitters and listener bookkeeping
//! - [`serializers`]: data-source capabilities and template data serialization
//!
//! Everything here is single-threaded: handles are `Rc`-based and dispatch is
//! synchronous.

pub mod error;
pub mod events;
pub mod serializers;

pub use error::{LifecycleOperation, Result, ViewError};
pub use events::{Event, EventEmitter, EventName, ListenerId, Listening, Observable};
pub use serializers::{Collection, DataSource, Entity, EntityCollection, Model};

// Re-export serde_json for template data
pub use serde_json;
