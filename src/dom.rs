//! Host tree module.
//!
//! The capability views render into, and an in-memory HTML implementation.

pub use tessera_dom::*;
