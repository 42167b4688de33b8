// 🔢 Index - position in the displayed person list
//
// Users count from one, vectors count from zero. Keeping both behind one type
// stops off-by-one bugs at the command boundary.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Index { zero_based }
    }

    /// Returns None for 0, which is not a valid one-based index
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Index::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        assert!(Index::from_one_based(0).is_none());

        let first = Index::from_one_based(1).unwrap();
        assert_eq!(first.zero_based(), 0);
        assert_eq!(first, Index::from_zero_based(0));

        let fifth = Index::from_zero_based(4);
        assert_eq!(fifth.one_based(), 5);
        assert_eq!(fifth.to_string(), "5");
    }
}
