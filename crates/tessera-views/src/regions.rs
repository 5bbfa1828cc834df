//! Region descriptors
//!
//! A region maps a name to a selector (the locator) resolved inside the
//! parent view's node after each content replacement.

use indexmap::IndexMap;

/// Supplies the region map of a view
///
/// Implemented by static mappings (`IndexMap<String, String>`) and by
/// closures returning one, which are re-evaluated after every render.
pub trait RegionProvider {
	/// Current region name → locator mapping
	fn regions(&self) -> IndexMap<String, String>;
}

impl RegionProvider for IndexMap<String, String> {
	fn regions(&self) -> IndexMap<String, String> {
		self.clone()
	}
}

impl<F> RegionProvider for F
where
	F: Fn() -> IndexMap<String, String>,
{
	fn regions(&self) -> IndexMap<String, String> {
		self()
	}
}

/// Builds a static region map from `(name, locator)` pairs
///
/// # Examples
///
/// ```
/// use tessera_views::regions::region_map;
///
/// let regions = region_map([("main", "[data-region=main]")]);
/// assert_eq!(regions["main"], "[data-region=main]");
/// ```
pub fn region_map<I, K, V>(pairs: I) -> IndexMap<String, String>
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<String>,
{
	pairs
		.into_iter()
		.map(|(name, locator)| (name.into(), locator.into()))
		.collect()
}
