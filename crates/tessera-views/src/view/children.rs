//! Child views placed into named regions

use super::View;
use tessera_core::Result;
use tessera_dom::NodeId;

impl View {
	/// Places `child` into `region`
	///
	/// When this view is rendered the child is rendered (if it never was)
	/// and attached into the region's element right away; otherwise it is
	/// placed by the next render or attach. A child attached somewhere else
	/// is detached first and moved into the region. A view previously held
	/// by the region is returned as is: it is neither detached nor removed.
	///
	/// # Errors
	///
	/// Propagates the child's render error, e.g. when the child was removed.
	/// The region keeps its previous child in that case.
	pub fn insert_child(&self, region: impl Into<String>, child: View) -> Result<Option<View>> {
		let region = region.into();
		let place_now = self.is_rendered();
		if place_now && !child.is_rendered() {
			child.render()?;
		}

		let previous = self
			.state_mut()
			.children
			.insert(region.clone(), child.clone());
		tracing::debug!(view = %self.id(), child = %child.id(), region = %region, "Child inserted");

		if place_now {
			self.attach_child(&region, &child);
		}
		Ok(previous)
	}

	/// Forgets the child of `region` and returns it
	///
	/// The child stays where it is; detaching or removing it is up to the
	/// caller.
	pub fn remove_child(&self, region: &str) -> Option<View> {
		let removed = self.state_mut().children.shift_remove(region);
		if removed.is_none() {
			tracing::trace!(view = %self.id(), region, "No child in region");
		}
		removed
	}

	/// The child placed into `region`
	pub fn child(&self, region: &str) -> Option<View> {
		self.state().children.get(region).cloned()
	}

	/// Every `(region, child)` pair, in insertion order
	pub fn children(&self) -> Vec<(String, View)> {
		self.state()
			.children
			.iter()
			.map(|(region, child)| (region.clone(), child.clone()))
			.collect()
	}

	/// Element the locator of `region` resolves to in the current content
	pub fn region_element(&self, region: &str) -> Option<NodeId> {
		let locator = self.state().regions.get(region).cloned()?;
		self.inner.host.query_descendant(self.inner.node, &locator)
	}

	pub(super) fn attach_children(&self) {
		for (region, child) in self.children() {
			self.attach_child(&region, &child);
		}
	}

	pub(super) fn detach_children(&self) {
		for (region, child) in self.children() {
			if child.is_removed() {
				continue;
			}
			if let Err(error) = child.detach() {
				tracing::warn!(view = %self.id(), child = %child.id(), region = %region, %error, "Failed to detach child");
			}
		}
	}

	fn attach_child(&self, region: &str, child: &View) {
		if child.is_removed() {
			tracing::warn!(view = %self.id(), child = %child.id(), region, "Skipping removed child view");
			return;
		}
		let Some(target) = self.region_element(region) else {
			tracing::warn!(view = %self.id(), child = %child.id(), region, "Region has no matching element");
			return;
		};
		if child.is_attached() && self.inner.host.parent_of(child.node()) != Some(target) {
			tracing::debug!(view = %self.id(), child = %child.id(), region, "Moving child attached elsewhere");
			if let Err(error) = child.detach() {
				tracing::warn!(view = %self.id(), child = %child.id(), region, %error, "Failed to detach child");
				return;
			}
		}
		if let Err(error) = child.attach(target, None) {
			tracing::warn!(view = %self.id(), child = %child.id(), region, %error, "Failed to attach child");
		}
	}
}
