//! The flags register: `0b00000LGE`.

use std::cmp::Ordering;
use std::fmt;

/// Condition bits set by CMP.
///
/// At most one bit is ever set; CMP replaces the whole register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    pub const LESS: u8 = 0b0000_0100;
    pub const GREATER: u8 = 0b0000_0010;
    pub const EQUAL: u8 = 0b0000_0001;

    /// Flags for the result of comparing A against B.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self(Self::LESS),
            Ordering::Greater => Self(Self::GREATER),
            Ordering::Equal => Self(Self::EQUAL),
        }
    }

    /// The packed register value.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn less(self) -> bool {
        self.0 & Self::LESS != 0
    }

    pub fn greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }

    pub fn equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
