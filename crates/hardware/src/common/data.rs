//! Memory Access Types.
//!
//! Categorizes bus accesses by width so faults can report what was attempted.

use std::fmt;

/// Width of a single bus access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
}

impl AccessWidth {
    /// Number of bytes covered by this access width.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => f.write_str("byte"),
            Self::Half => f.write_str("half"),
            Self::Word => f.write_str("word"),
        }
    }
}
