//! Stable id newtypes and the two monotonic counters the translator owns.
//!
//! Both [`VarId`] and [`LabelId`] are distinct newtype wrappers over `u32` so
//! that a variable id can never be accidentally used where a label id is
//! expected. The two counters they come from never decrease and never
//! recycle within a compilation unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a variable (source-level name or compiler-generated
/// temporary). Both kinds share one id space -- see [`VarIdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarId(pub u32);

/// Identity of a jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelId(pub u32);

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label{}", self.0)
    }
}

/// Allocates fresh [`VarId`]s, monotonically, for both named variables
/// (via the symbol table) and compiler-generated temporaries (via
/// [`fresh_temp`](VarIdAllocator::fresh_temp)). Sharing one counter between
/// the two is what guarantees invariant 4: temporary ids never collide with
/// named-variable ids.
#[derive(Debug, Clone)]
pub struct VarIdAllocator {
    next: u32,
}

impl VarIdAllocator {
    pub fn new() -> Self {
        // Ids start at 1, matching the downstream assembler's `v1`, `v2`, ...
        // naming convention -- `v0` is never emitted.
        VarIdAllocator { next: 1 }
    }

    /// Allocate the next variable id. Used by the symbol table when a
    /// source-level name is first seen, and internally by
    /// [`fresh_temp`](VarIdAllocator::fresh_temp).
    pub fn alloc(&mut self) -> VarId {
        let id = VarId(self.next);
        self.next += 1;
        id
    }

    /// Allocate a fresh temporary variable id.
    pub fn fresh_temp(&mut self) -> VarId {
        self.alloc()
    }
}

impl Default for VarIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates fresh [`LabelId`]s, monotonically.
#[derive(Debug, Clone)]
pub struct LabelIdAllocator {
    next: u32,
}

impl LabelIdAllocator {
    pub fn new() -> Self {
        // Ids start at 1, matching `label1`, `label2`, ... in the dump.
        LabelIdAllocator { next: 1 }
    }

    pub fn fresh_label(&mut self) -> LabelId {
        let id = LabelId(self.next);
        self.next += 1;
        id
    }
}

impl Default for LabelIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
