use alloc::vec::Vec;

use super::handle::NodeId;

/// A slot in the arena: either a live element or a link in the free list.
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<NodeId> },
}

/// A slot arena with an intrusive free list.
///
/// Freed slots are threaded into a LIFO list through their own storage, so
/// allocation reuses the most recently freed slot before growing the backing
/// vector. Handles stay valid for the lifetime of the element they were
/// allocated for; accessing a vacant slot is a caller bug.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `element` and returns its handle, reusing a vacant slot if one
    /// is available.
    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        self.len += 1;
        if let Some(id) = self.free_head {
            match self.slots[id.index()] {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("`Arena::alloc()` - free list points at an occupied slot!"),
            }
            self.slots[id.index()] = Slot::Occupied(element);
            id
        } else {
            // NodeId::from_index panics past NodeId::MAX, capping the arena.
            self.slots.push(Slot::Occupied(element));
            NodeId::from_index(self.slots.len() - 1)
        }
    }

    /// Returns true if `id` names a live element.
    #[inline]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.index()), Some(Slot::Occupied(_)))
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        match &self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("`Arena::get()` - `id` names a vacant slot!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("`Arena::get_mut()` - `id` names a vacant slot!"),
        }
    }

    /// Removes and returns the element at `id`, pushing the slot onto the
    /// free list.
    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let slot = core::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(element) => {
                self.free_head = Some(id);
                self.len -= 1;
                element
            }
            Slot::Vacant { next_free } => {
                // Undo the replace; the slot was already vacant.
                self.slots[id.index()] = Slot::Vacant { next_free };
                panic!("`Arena::take()` - `id` names a vacant slot!")
            }
        }
    }

    /// Drops every element and resets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}
