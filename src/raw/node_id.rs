use core::num::NonZero;

/// Stable index of a tree node (or value slot) inside an [`Arena`].
///
/// Ids are `NonZero` so `Option<NodeId>` occupies the same four bytes as
/// `NodeId` itself; `None` plays the role of a null pointer in the
/// parent/left/right links.
///
/// [`Arena`]: super::arena::Arena
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<u32>);

impl NodeId {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        // Shifted by one so index zero maps onto the non-zero representation.
        match NonZero::new((index + 1) as u32) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
