//! Generation-checked node storage

use crate::host::NodeId;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeKind {
	Element {
		tag: String,
		attributes: IndexMap<String, String>,
	},
	Text(String),
	Comment(String),
}

/// Who created a node
///
/// Nodes created by parsing content belong to the node whose content they
/// are and are freed when that content is replaced. Nodes created through
/// the host API survive content replacement; they are only detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
	Host,
	Content,
}

#[derive(Debug)]
pub(crate) struct NodeData {
	pub(crate) kind: NodeKind,
	pub(crate) origin: Origin,
	pub(crate) parent: Option<NodeId>,
	pub(crate) children: Vec<NodeId>,
}

#[derive(Debug, Default)]
struct Slot {
	generation: u32,
	node: Option<NodeData>,
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
	slots: Vec<Slot>,
	free: Vec<u32>,
}

impl Arena {
	pub(crate) fn alloc(&mut self, kind: NodeKind, origin: Origin) -> NodeId {
		let data = NodeData {
			kind,
			origin,
			parent: None,
			children: Vec::new(),
		};
		if let Some(index) = self.free.pop()
			&& let Some(slot) = self.slots.get_mut(index as usize)
		{
			slot.node = Some(data);
			return NodeId::new(index, slot.generation);
		}
		let index = self.slots.len() as u32;
		self.slots.push(Slot {
			generation: 0,
			node: Some(data),
		});
		NodeId::new(index, 0)
	}

	pub(crate) fn get(&self, id: NodeId) -> Option<&NodeData> {
		self.slots
			.get(id.index() as usize)
			.filter(|slot| slot.generation == id.generation())
			.and_then(|slot| slot.node.as_ref())
	}

	pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
		self.slots
			.get_mut(id.index() as usize)
			.filter(|slot| slot.generation == id.generation())
			.and_then(|slot| slot.node.as_mut())
	}

	pub(crate) fn contains(&self, id: NodeId) -> bool {
		self.get(id).is_some()
	}

	pub(crate) fn live_count(&self) -> usize {
		self.slots.iter().filter(|slot| slot.node.is_some()).count()
	}

	fn free(&mut self, id: NodeId) {
		if let Some(slot) = self.slots.get_mut(id.index() as usize)
			&& slot.generation == id.generation()
			&& slot.node.take().is_some()
		{
			slot.generation = slot.generation.wrapping_add(1);
			self.free.push(id.index());
		}
	}

	/// Takes `id` out of its parent's child list
	pub(crate) fn detach(&mut self, id: NodeId) {
		let Some(parent) = self.get_mut(id).and_then(|data| data.parent.take()) else {
			return;
		};
		if let Some(parent) = self.get_mut(parent) {
			parent.children.retain(|child| *child != id);
		}
	}

	/// Inserts `node` under `parent`, before `before` when given, else last.
	/// Returns `false` if the insertion would create a cycle.
	pub(crate) fn insert(&mut self, parent: NodeId, node: NodeId, before: Option<NodeId>) -> bool {
		if self.is_ancestor_or_self(node, parent) {
			return false;
		}
		self.detach(node);
		let Some(parent_data) = self.get_mut(parent) else {
			return false;
		};
		let position = before
			.and_then(|sibling| parent_data.children.iter().position(|c| *c == sibling))
			.unwrap_or(parent_data.children.len());
		parent_data.children.insert(position, node);
		if let Some(data) = self.get_mut(node) {
			data.parent = Some(parent);
		}
		true
	}

	/// Empties the child list of `id`, freeing content nodes and detaching
	/// host nodes
	pub(crate) fn discard_children(&mut self, id: NodeId) {
		let children = self
			.get_mut(id)
			.map(|data| std::mem::take(&mut data.children))
			.unwrap_or_default();
		for child in children {
			self.discard(child);
		}
	}

	fn discard(&mut self, id: NodeId) {
		let Some(data) = self.get_mut(id) else {
			return;
		};
		data.parent = None;
		if data.origin == Origin::Host {
			return;
		}
		self.discard_children(id);
		self.free(id);
	}

	/// Frees `id` itself, whatever its origin
	pub(crate) fn release(&mut self, id: NodeId) {
		self.detach(id);
		self.discard_children(id);
		self.free(id);
	}

	pub(crate) fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
		let mut current = Some(node);
		while let Some(id) = current {
			if id == ancestor {
				return true;
			}
			current = self.get(id).and_then(|data| data.parent);
		}
		false
	}

	/// Topmost ancestor of `id`, or `id` itself when it has no parent
	pub(crate) fn root_of(&self, id: NodeId) -> NodeId {
		let mut current = id;
		while let Some(parent) = self.get(current).and_then(|data| data.parent) {
			current = parent;
		}
		current
	}
}
