use std::iter::FusedIterator;

use crate::bitset::bitset_traits;

/// A compact set of cells of a 3x3 grid.
///
/// Cells are addressed by their row-major index `row * 3 + col`, so the
/// top-left cell is 0 and the bottom-right cell is 8.
///
/// ```
/// use uttt::CellSet;
/// let set = CellSet::new().insert(0).insert(4).insert(8);
/// assert!(set.has_line());
/// assert_eq!(Vec::from_iter(set), vec![0, 4, 8]);
/// ```
///
/// This is an immutable type, so its "mutating" methods return a new
/// value instead of mutating in-place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellSet {
    // Only the low 9 bits are used.
    pub(crate) bits: u16,
}

const VALID_BITS: u16 = 0b1_1111_1111;

/// The eight ways of getting three in a row: three rows, three columns and
/// the two diagonals.
pub const WIN_LINES: [CellSet; 8] = [
    CellSet { bits: 0b000_000_111 },
    CellSet { bits: 0b000_111_000 },
    CellSet { bits: 0b111_000_000 },
    CellSet { bits: 0b001_001_001 },
    CellSet { bits: 0b010_010_010 },
    CellSet { bits: 0b100_100_100 },
    CellSet { bits: 0b100_010_001 },
    CellSet { bits: 0b001_010_100 },
];

impl CellSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// The set containing all nine cells.
    pub fn full() -> Self {
        Self { bits: VALID_BITS }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn is_full(self) -> bool {
        self.bits == VALID_BITS
    }

    pub fn contains(self, idx: usize) -> bool {
        idx < 9 && (self.bits & (1u16 << idx)) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, idx: usize) -> Self {
        debug_assert!(idx < 9);
        Self {
            bits: self.bits | (1u16 << idx),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, idx: usize) -> Self {
        debug_assert!(idx < 9);
        Self {
            bits: self.bits & !(1u16 << idx),
        }
    }

    /// Whether the set covers at least one of the [`WIN_LINES`].
    pub fn has_line(self) -> bool {
        WIN_LINES.iter().any(|&line| self & line == line)
    }
}

bitset_traits!(CellSet, VALID_BITS);

impl FromIterator<usize> for CellSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        iter.into_iter().fold(CellSet::new(), CellSet::insert)
    }
}

pub struct CellSetIter {
    bits: u16,
}

impl Iterator for CellSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}

impl FusedIterator for CellSetIter {}

impl IntoIterator for CellSet {
    type Item = usize;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter { bits: self.bits }
    }
}
