//! Render, attach, detach and remove

use super::View;
use tessera_core::events::EventName;
use tessera_core::serializers::serialize_data;
use tessera_core::{LifecycleOperation, Result, ViewError};
use tessera_dom::NodeId;

impl View {
	fn ensure_not_removed(&self, operation: LifecycleOperation) -> Result<()> {
		if self.is_removed() {
			tracing::debug!(view = %self.id(), operation = operation.as_str(), "Rejected on removed view");
			return Err(ViewError::removed(operation));
		}
		Ok(())
	}

	/// Runs the template against the serialized data source
	///
	/// Returns `None` when no template is configured.
	pub fn compile(&self) -> Option<String> {
		let template = self.inner.template.clone()?;
		let source = self.state().data_source.clone();
		let data = serialize_data(source.as_ref());
		Some(template.render(&data))
	}

	/// Compiles and materializes content
	///
	/// Nothing happens when the compiled content equals what is materialized,
	/// which is the empty string before the first render; a template yielding
	/// `""` therefore leaves a fresh view unrendered. Without a template only
	/// the first render does anything. Otherwise an attached view is detached, its content
	/// replaced, its regions recomputed and the view reattached at the same
	/// position, then `render` is emitted.
	///
	/// # Errors
	///
	/// [`ViewError::InvalidState`] if the view has been removed, including
	/// removal by an event handler while rendering.
	pub fn render(&self) -> Result<&Self> {
		self.ensure_not_removed(LifecycleOperation::Render)?;
		let content = self.compile();

		let attached = {
			let state = self.state();
			let unchanged = match &content {
				Some(html) => state.content.as_deref().unwrap_or_default() == html,
				None => state.rendered,
			};
			if unchanged {
				tracing::trace!(view = %self.id(), "Content unchanged, render skipped");
				return Ok(self);
			}
			state.attached
		};

		let host = &self.inner.host;
		let node = self.inner.node;
		let position = if attached {
			host.parent_of(node)
				.map(|parent| (parent, host.next_sibling_of(node)))
		} else {
			None
		};

		if attached {
			self.detach()?;
			self.ensure_not_removed(LifecycleOperation::Render)?;
		} else {
			self.detach_children();
		}

		host.set_content(node, content.as_deref().unwrap_or_default());
		let regions = self
			.inner
			.regions
			.as_ref()
			.map(|provider| provider.regions())
			.unwrap_or_default();
		{
			let mut state = self.state_mut();
			state.content = content;
			state.regions = regions;
		}

		match position {
			Some((parent, next_sibling)) => {
				self.attach(parent, next_sibling)?;
				self.ensure_not_removed(LifecycleOperation::Render)?;
			}
			None => self.attach_children(),
		}

		self.state_mut().rendered = true;
		tracing::debug!(view = %self.id(), "Rendered");
		self.inner.events.trigger(EventName::RENDER);
		Ok(self)
	}

	/// Inserts the element into `parent`, before `next_sibling` or last,
	/// then attaches every child into its region and emits `attach`
	///
	/// Attaching an attached view does nothing.
	///
	/// # Errors
	///
	/// [`ViewError::InvalidState`] if the view has been removed.
	pub fn attach(&self, parent: NodeId, next_sibling: Option<NodeId>) -> Result<&Self> {
		self.ensure_not_removed(LifecycleOperation::Attach)?;
		if self.is_attached() {
			tracing::trace!(view = %self.id(), "Already attached");
			return Ok(self);
		}

		let host = &self.inner.host;
		match next_sibling {
			Some(sibling) => host.insert_before(parent, self.inner.node, sibling),
			None => host.append_child(parent, self.inner.node),
		}
		self.attach_children();

		self.state_mut().attached = true;
		tracing::debug!(view = %self.id(), %parent, "Attached");
		self.inner.events.trigger(EventName::ATTACH);
		Ok(self)
	}

	/// Takes the element out of its parent, detaches every child and emits
	/// `detach`
	///
	/// Detaching a detached view does nothing.
	///
	/// # Errors
	///
	/// [`ViewError::InvalidState`] if the view has been removed.
	pub fn detach(&self) -> Result<&Self> {
		self.ensure_not_removed(LifecycleOperation::Detach)?;
		if !self.is_attached() {
			tracing::trace!(view = %self.id(), "Already detached");
			return Ok(self);
		}

		self.inner.host.remove_from_parent(self.inner.node);
		self.detach_children();

		self.state_mut().attached = false;
		tracing::debug!(view = %self.id(), "Detached");
		self.inner.events.trigger(EventName::DETACH);
		Ok(self)
	}

	/// Permanently destroys the view
	///
	/// Detaches it, clears its content, releases its subscriptions and its
	/// element, then emits `remove`. Every later lifecycle call fails.
	///
	/// # Errors
	///
	/// [`ViewError::InvalidState`] if the view has already been removed.
	pub fn remove(&self) -> Result<&Self> {
		self.ensure_not_removed(LifecycleOperation::Remove)?;
		self.detach()?;
		self.ensure_not_removed(LifecycleOperation::Remove)?;
		self.detach_children();

		let host = &self.inner.host;
		host.set_content(self.inner.node, "");
		{
			let mut state = self.state_mut();
			state.content = None;
			state.regions.clear();
		}
		let subscriptions = self.inner.listening.stop_listening();
		host.release(self.inner.node);
		{
			let mut state = self.state_mut();
			state.rendered = false;
			state.removed = true;
		}

		tracing::debug!(view = %self.id(), subscriptions, "Removed");
		self.inner.events.trigger(EventName::REMOVE);
		Ok(self)
	}
}
