//! Interned identifier handles.

use std::fmt;

/// Interned identifier.
///
/// Layout: bits 31-28 select the interner shard, bits 27-0 index into it.
/// Two names are equal exactly when their strings are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    pub const NUM_SHARDS: usize = 16;

    #[inline]
    pub(crate) const fn new(shard: u32, local: u32) -> Self {
        Name((shard << 28) | (local & Self::MAX_LOCAL))
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}
