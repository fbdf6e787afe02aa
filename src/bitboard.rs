//! A compact square cell set packed into an unsigned integer.
//!
//! The grid side length is chosen at runtime so the same type serves any
//! configured board, as long as `size * size` fits in the bits of `T`.
//! The type is `no_std` friendly and never allocates.

use core::ops::BitOr;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Cell;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested grid has more cells than `T` has bits.
    SizeTooLarge { size: usize, capacity: usize },
    /// Cell lies outside the grid.
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { size, capacity } => write!(
                f,
                "SizeTooLarge: {}x{}={} exceeds capacity {}",
                size,
                size,
                size * size,
                capacity
            ),
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A set of cells on a `size`×`size` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    bits: T,
}

/// Cell set wide enough for grids up to 11×11.
pub type Mask = BitGrid<u128>;

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells `T` can hold.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Create an empty grid without checking capacity. Cells beyond the
    /// capacity are rejected by [`BitGrid::insert`].
    #[inline]
    pub fn new(size: usize) -> Self {
        BitGrid {
            size,
            bits: T::zero(),
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if `size * size`
    /// exceeds the bits of `T`.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        if size.saturating_mul(size) > Self::CAPACITY {
            Err(BitBoardError::SizeTooLarge {
                size,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(Self::new(size))
        }
    }

    /// Build a grid holding every cell yielded by `cells`.
    pub fn from_cells<I>(size: usize, cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut grid = Self::try_new(size)?;
        for cell in cells {
            grid.insert(cell)?;
        }
        Ok(grid)
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if `cell` is in the set. Out-of-bounds cells are never
    /// members.
    pub fn contains(&self, cell: Cell) -> bool {
        match self.index(cell) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `cell` to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> Result<bool, BitBoardError> {
        let idx = self.index(cell)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Clears all cells.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// Returns true if the two sets share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    #[inline]
    fn index(&self, cell: Cell) -> Result<usize, BitBoardError> {
        let err = BitBoardError::IndexOutOfBounds {
            x: cell.x,
            y: cell.y,
        };
        if !cell.in_bounds(self.size) {
            return Err(err);
        }
        let idx = cell.y * self.size + cell.x;
        if idx >= Self::CAPACITY {
            return Err(err);
        }
        Ok(idx)
    }
}

impl<T> BitOr for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitGrid {
            size: self.size,
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", self.size)?;
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = if self.contains(Cell::new(x, y)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut grid = Mask::try_new(10).unwrap();
        assert!(grid.insert(Cell::new(3, 7)).unwrap());
        assert!(!grid.insert(Cell::new(3, 7)).unwrap());
        assert!(grid.contains(Cell::new(3, 7)));
        assert!(!grid.contains(Cell::new(7, 3)));
        assert_eq!(grid.count_ones(), 1);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut grid = Mask::try_new(10).unwrap();
        assert_eq!(
            grid.insert(Cell::new(10, 0)),
            Err(BitBoardError::IndexOutOfBounds { x: 10, y: 0 })
        );
        assert!(!grid.contains(Cell::new(0, 10)));
        assert_eq!(grid.count_ones(), 0);
    }

    #[test]
    fn size_too_large() {
        assert_eq!(
            Mask::try_new(12),
            Err(BitBoardError::SizeTooLarge {
                size: 12,
                capacity: 128
            })
        );
        assert!(BitGrid::<u64>::try_new(8).is_ok());
        assert!(BitGrid::<u64>::try_new(9).is_err());
    }

    #[test]
    fn set_operations() {
        let a = Mask::from_cells(10, [Cell::new(1, 1), Cell::new(2, 2)]).unwrap();
        let b = Mask::from_cells(10, [Cell::new(2, 2), Cell::new(3, 3)]).unwrap();
        assert!(a.intersects(&b));
        assert_eq!((a | b).count_ones(), 3);
        let c = Mask::from_cells(10, [Cell::new(4, 4)]).unwrap();
        assert!(!a.intersects(&c));
    }
}
