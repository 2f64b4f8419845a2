//! Index ranges into a math list

use serde::{Deserialize, Serialize};

/// A span of atom indices, used to map displays back to the atoms they came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AtomRange {
    pub location: usize,
    pub length: usize,
}

impl AtomRange {
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// One past the last index
    pub const fn end(&self) -> usize {
        self.location + self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn contains(&self, index: usize) -> bool {
        index >= self.location && index < self.end()
    }

    /// Smallest range covering both
    pub fn union(&self, other: AtomRange) -> AtomRange {
        let location = self.location.min(other.location);
        let end = self.end().max(other.end());
        AtomRange::new(location, end - location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        let range = AtomRange::new(2, 3);
        assert_eq!(range.end(), 5);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(AtomRange::default().is_empty());
    }

    #[test]
    fn test_range_union() {
        let a = AtomRange::new(0, 2);
        let b = AtomRange::new(4, 1);
        assert_eq!(a.union(b), AtomRange::new(0, 5));
        assert_eq!(b.union(a), AtomRange::new(0, 5));
    }
}
