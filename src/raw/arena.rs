use super::node_id::NodeId;

/// Slot-vector allocator with a free list.
///
/// All tree nodes and values live here; handing out [`NodeId`]s instead of
/// references removes the owning parent/left/right pointer cycles of a
/// classic node-per-allocation BST and with them any recursive destructor.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.to_index()] = Some(element);
            id
        } else {
            // Strict less-than so the id for the pushed slot stays in range.
            assert!(
                self.slots.len() < NodeId::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                NodeId::MAX
            );
            self.slots.push(Some(element));
            NodeId::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.to_index()].as_ref().expect("`Arena::get()` - `id` is invalid!")
    }

    /// Returns a reference to an element by id from a raw pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `Arena<T>`.
    #[inline]
    pub(crate) unsafe fn get_ptr<'a>(ptr: *const Self, id: NodeId) -> &'a T {
        // SAFETY: Caller guarantees ptr is valid; only the slots field is read.
        unsafe { (&(*ptr).slots)[id.to_index()].as_ref().expect("`Arena::get_ptr()` - `id` is invalid!") }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.to_index()].as_mut().expect("`Arena::get_mut()` - `id` is invalid!")
    }

    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let element = self.slots[id.to_index()].take().expect("`Arena::take()` - `id` is invalid!");
        self.free.push(id);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
