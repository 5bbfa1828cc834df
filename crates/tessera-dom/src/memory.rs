//! In-memory host tree
//!
//! [`MemoryTree`] is an arena of HTML nodes. Content is parsed with `scraper`
//! and serialized back with `html-escape`; region locators are CSS selectors
//! evaluated by `scraper`.

mod arena;
mod parser;
mod query;
mod render;
mod tree;

pub use tree::MemoryTree;
