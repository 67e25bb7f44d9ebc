use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Session-unique identifier for a stroke.
/// Plain `u64` — Copy, Eq, Ord, Hash; ordering follows allocation order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrokeId(u64);

impl StrokeId {
    pub const fn new(raw: u64) -> Self {
        StrokeId(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Serialize for StrokeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for StrokeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(StrokeId)
    }
}

/// Hands out stroke ids in strictly increasing order.
///
/// Owned by a single canvas; ids are never reused, even after the strokes
/// that carried them are undone or cleared.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// The first id handed out.
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        Self { next: Self::FIRST }
    }

    /// Peek at the id the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> StrokeId {
        StrokeId(self.next)
    }

    pub fn allocate(&mut self) -> StrokeId {
        let id = StrokeId(self.next);
        self.next += 1;
        id
    }
}
