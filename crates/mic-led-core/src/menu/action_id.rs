use std::{fmt, num::ParseIntError, str::FromStr};

/// Synthetic identifier routing a menu command back to its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(u32);

impl ActionId {
    /// Counter value before the first assignment.
    pub const SEED: ActionId = ActionId(1023);

    /// First id handed out by [`MenuTreeBuilder`](crate::MenuTreeBuilder).
    pub const FIRST: ActionId = ActionId(Self::SEED.0 + 1);

    /// Wrap a raw id, e.g. one read back from a native menu event.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
