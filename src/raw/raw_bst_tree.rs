use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::SmallVec;

use super::arena::Arena;
use super::node::{Node, Side};
use super::node_id::NodeId;

/// Stack used for iterative in-order walks (drain, invariant checks).
type TraversalStack = SmallVec<[NodeId; 32]>;

/// Where a key descent ended up.
enum Slot {
    /// The key is already present at this node.
    Occupied(NodeId),
    /// The key is absent; a new node goes under `parent` on `side`.
    /// `parent` is `None` only for an empty tree.
    Vacant { parent: Option<NodeId>, side: Side },
}

/// The unbalanced binary search tree backing `BstMap`, `BstSet` and
/// `BstMultiset`.
///
/// Nodes and values live in two separate arenas (the value split lets the
/// mutable iterators hand out `&mut V` without touching link structure).
/// `first` and `last` cache the leftmost and rightmost node and are
/// recomputed after every structural mutation; there is no sentinel node
/// threaded into the tree, the one-past-the-end position is simply `None`.
///
/// There is **no balancing invariant**: a sorted insertion sequence
/// degenerates into a linked list and operations become O(n).
#[derive(Clone)]
pub(crate) struct RawBstTree<K, V> {
    nodes: Arena<Node<K>>,
    values: Arena<V>,
    root: Option<NodeId>,
    len: usize,
    first: Option<NodeId>,
    last: Option<NodeId>,
}

impl<K, V> RawBstTree<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            len: 0,
            first: None,
            last: None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Theoretical upper bound on the number of elements: address space
    /// over node footprint.
    pub(crate) const fn max_size() -> usize {
        usize::MAX / core::mem::size_of::<Node<K>>()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.values.clear();
        self.root = None;
        self.len = 0;
        self.first = None;
        self.last = None;
    }

    pub(crate) const fn first_id(&self) -> Option<NodeId> {
        self.first
    }

    pub(crate) const fn last_id(&self) -> Option<NodeId> {
        self.last
    }

    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.nodes.get(id).key
    }

    pub(crate) fn value(&self, id: NodeId) -> &V {
        self.values.get(self.nodes.get(id).value)
    }

    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut V {
        let value_id = self.nodes.get(id).value;
        self.values.get_mut(value_id)
    }

    pub(crate) fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = self.nodes.get(id);
        (&node.key, self.values.get(node.value))
    }

    /// In-order successor: leftmost node of the right subtree if there is
    /// one, else the nearest ancestor reached from a left child.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id);
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }
        let mut current = id;
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let parent_node = self.nodes.get(parent_id);
            if parent_node.left == Some(current) {
                return Some(parent_id);
            }
            current = parent_id;
            parent = parent_node.parent;
        }
        None
    }

    /// In-order predecessor, the mirror of [`successor`](Self::successor).
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id);
        if let Some(left) = node.left {
            return Some(self.rightmost(left));
        }
        let mut current = id;
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let parent_node = self.nodes.get(parent_id);
            if parent_node.right == Some(current) {
                return Some(parent_id);
            }
            current = parent_id;
            parent = parent_node.parent;
        }
        None
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes.get(id).left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes.get(id).right {
            id = right;
        }
        id
    }

    fn refresh_ends(&mut self) {
        self.first = self.root.map(|root| self.leftmost(root));
        self.last = self.root.map(|root| self.rightmost(root));
    }

    /// Returns a key/mutable-value pair by id from a raw tree pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawBstTree<K, V>`.
    /// - The caller must have logical exclusive access to the node's value,
    ///   and must not mutate the node arena while the returned key
    ///   reference is live.
    pub(crate) unsafe fn entry_ptr<'a>(ptr: *mut Self, id: NodeId) -> (&'a K, &'a mut V) {
        // SAFETY: The key comes from the `nodes` arena and the value from
        // the disjoint `values` arena; neither access creates a reference
        // to the whole tree.
        let node = unsafe { Arena::get_ptr(core::ptr::addr_of!((*ptr).nodes), id) };
        let value = unsafe { (*core::ptr::addr_of_mut!((*ptr).values)).get_mut(node.value) };
        (&node.key, value)
    }

    /// [`successor`](Self::successor) from a raw tree pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawBstTree<K, V>`.
    /// - The node arena must not be mutated concurrently.
    pub(crate) unsafe fn successor_ptr(ptr: *const Self, id: NodeId) -> Option<NodeId> {
        // SAFETY: Only the `nodes` field is read, never aliasing `values`.
        let nodes = unsafe { core::ptr::addr_of!((*ptr).nodes) };
        let node = unsafe { Arena::get_ptr(nodes, id) };
        if let Some(right) = node.right {
            let mut current = right;
            while let Some(left) = unsafe { Arena::get_ptr(nodes, current) }.left {
                current = left;
            }
            return Some(current);
        }
        let mut current = id;
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let parent_node = unsafe { Arena::get_ptr(nodes, parent_id) };
            if parent_node.left == Some(current) {
                return Some(parent_id);
            }
            current = parent_id;
            parent = parent_node.parent;
        }
        None
    }

    /// [`predecessor`](Self::predecessor) from a raw tree pointer.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `RawBstTree<K, V>`.
    /// - The node arena must not be mutated concurrently.
    pub(crate) unsafe fn predecessor_ptr(ptr: *const Self, id: NodeId) -> Option<NodeId> {
        // SAFETY: Only the `nodes` field is read, never aliasing `values`.
        let nodes = unsafe { core::ptr::addr_of!((*ptr).nodes) };
        let node = unsafe { Arena::get_ptr(nodes, id) };
        if let Some(left) = node.left {
            let mut current = left;
            while let Some(right) = unsafe { Arena::get_ptr(nodes, current) }.right {
                current = right;
            }
            return Some(current);
        }
        let mut current = id;
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let parent_node = unsafe { Arena::get_ptr(nodes, parent_id) };
            if parent_node.right == Some(current) {
                return Some(parent_id);
            }
            current = parent_id;
            parent = parent_node.parent;
        }
        None
    }
}

impl<K: Ord, V> RawBstTree<K, V> {
    /// Descends comparing keys and reports where `key` belongs.
    ///
    /// With `duplicates` set, equal keys keep descending down the right
    /// branch so a fresh slot is always found (multiset placement rule).
    fn slot_for(&self, key: &K, duplicates: bool) -> Slot {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            match key.cmp(&node.key) {
                Ordering::Less => {
                    parent = Some(id);
                    side = Side::Left;
                    current = node.left;
                }
                Ordering::Equal if !duplicates => return Slot::Occupied(id),
                Ordering::Greater | Ordering::Equal => {
                    parent = Some(id);
                    side = Side::Right;
                    current = node.right;
                }
            }
        }
        Slot::Vacant { parent, side }
    }

    fn attach_new(&mut self, parent: Option<NodeId>, side: Side, key: K, value: V) -> NodeId {
        let value_id = self.values.alloc(value);
        let id = self.nodes.alloc(Node::new(key, value_id, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent_id) => self.nodes.get_mut(parent_id).set_child(side, Some(id)),
        }
        self.len += 1;
        self.refresh_ends();
        id
    }

    /// Inserts `key` if absent. An existing key is a no-op: the incoming
    /// value is dropped and the second element of the result is `false`.
    pub(crate) fn insert_unique(&mut self, key: K, value: V) -> (NodeId, bool) {
        match self.slot_for(&key, false) {
            Slot::Occupied(id) => (id, false),
            Slot::Vacant { parent, side } => (self.attach_new(parent, side, key, value), true),
        }
    }

    /// Always inserts; duplicates land down the right branch.
    pub(crate) fn insert_dup(&mut self, key: K, value: V) -> NodeId {
        match self.slot_for(&key, true) {
            Slot::Occupied(_) => unreachable!("duplicate descent always finds a vacant slot"),
            Slot::Vacant { parent, side } => self.attach_new(parent, side, key, value),
        }
    }

    /// Inserts `key` or overwrites the value in place; size changes only on
    /// a fresh insertion. Returns the previous value when assigning.
    pub(crate) fn insert_or_assign(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
        match self.slot_for(&key, false) {
            Slot::Occupied(id) => {
                let value_id = self.nodes.get(id).value;
                let old = core::mem::replace(self.values.get_mut(value_id), value);
                (id, Some(old))
            }
            Slot::Vacant { parent, side } => (self.attach_new(parent, side, key, value), None),
        }
    }

    pub(crate) fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(id),
            }
        }
        None
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// First node with key `>=` the target.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            if node.key.borrow() >= key {
                candidate = Some(id);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        candidate
    }

    /// First node with key strictly `>` the target.
    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            if node.key.borrow() > key {
                candidate = Some(id);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        candidate
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.search(key)?;
        Some(self.remove_node(id))
    }

    /// Splice-and-reinsert deletion.
    ///
    /// The node is unlinked from its parent (a root promotes one child in
    /// its place) and each orphaned child subtree is then reattached
    /// *wholesale* by an ordinary descent from the root: the hole left by
    /// the removed node bounds every key in its subtrees, so the descent
    /// lands them in order-correct positions. This preserves the BST order
    /// invariant but not tree shape or height, and is O(n) per erase in
    /// the worst case.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> (K, V) {
        let (parent, left, right) = {
            let node = self.nodes.get(id);
            (node.parent, node.left, node.right)
        };

        let mut orphans: SmallVec<[NodeId; 2]> = SmallVec::new();
        match parent {
            Some(parent_id) => {
                let parent_node = self.nodes.get_mut(parent_id);
                if parent_node.left == Some(id) {
                    parent_node.left = None;
                } else {
                    parent_node.right = None;
                }
                if let Some(left) = left {
                    orphans.push(left);
                }
                if let Some(right) = right {
                    orphans.push(right);
                }
            }
            None => match (left, right) {
                (Some(left), right) => {
                    self.root = Some(left);
                    self.nodes.get_mut(left).parent = None;
                    if let Some(right) = right {
                        orphans.push(right);
                    }
                }
                (None, Some(right)) => {
                    self.root = Some(right);
                    self.nodes.get_mut(right).parent = None;
                }
                (None, None) => self.root = None,
            },
        }

        for orphan in orphans {
            self.reattach(orphan);
        }

        let node = self.nodes.take(id);
        let value = self.values.take(node.value);
        self.len -= 1;
        self.refresh_ends();
        (node.key, value)
    }

    /// Reattaches a detached subtree by descending from the root on its
    /// root key. Strictly-less goes left, anything else right, the same
    /// placement rule fresh insertions use.
    fn reattach(&mut self, subtree: NodeId) {
        self.nodes.get_mut(subtree).parent = None;
        let Some(mut current) = self.root else {
            self.root = Some(subtree);
            return;
        };
        loop {
            let side = if self.nodes.get(subtree).key < self.nodes.get(current).key {
                Side::Left
            } else {
                Side::Right
            };
            match self.nodes.get(current).child(side) {
                Some(next) => current = next,
                None => {
                    self.nodes.get_mut(current).set_child(side, Some(subtree));
                    self.nodes.get_mut(subtree).parent = Some(current);
                    return;
                }
            }
        }
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let id = self.first?;
        Some(self.remove_node(id))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let id = self.last?;
        Some(self.remove_node(id))
    }

    /// Drains the whole tree into a sorted vector, cheapest way to build
    /// the owning iterators.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut ids = Vec::with_capacity(self.len);
        let mut stack: TraversalStack = SmallVec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes.get(id).left;
            }
            let Some(id) = stack.pop() else { break };
            current = self.nodes.get(id).right;
            ids.push(id);
        }

        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            let node = self.nodes.take(id);
            out.push((node.key, self.values.take(node.value)));
        }
        self.clear();
        out
    }
}
