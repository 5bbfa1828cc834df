//! # Tessera DOM
//!
//! The tree capability Tessera views render into.
//!
//! - [`HostTree`]: the primitives a view needs (create, insert, detach,
//!   query, replace content, release)
//! - [`MemoryTree`]: an in-memory HTML implementation backed by `scraper`,
//!   used for server-side rendering and tests
//!
//! Handles ([`NodeId`]) carry a generation so trees can ignore operations on
//! nodes that were already released.

pub mod error;
pub mod host;
pub mod memory;

pub use error::SelectorError;
pub use host::{HostTree, NodeId};
pub use memory::MemoryTree;
