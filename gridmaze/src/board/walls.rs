use crate::dims::Dims;
use crate::array::Array2D;

/// Direction from a cell towards one of its four grid neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Way {
    Up,
    Down,
    Right,
    Left,
}

impl Way {
    /// The fixed probe order used everywhere adjacency is built or walked.
    /// Changing it changes every DFS trace, so it is part of the contract.
    pub fn get_in_order() -> [Way; 4] {
        use Way::*;
        [Up, Down, Right, Left]
    }

    pub fn offset(self) -> Dims {
        match self {
            Self::Up => Dims(0, 1),
            Self::Down => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Left => Dims(-1, 0),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Wall state of a `width x height` grid, `true` = wall present.
///
/// `vertical[(x, z)]` is the wall on the *left* side of cell `(x, z)`, so the
/// matrix is `(width + 1) x height` and column `x = width` is the right
/// perimeter. `horizontal[(x, z)]` is the wall *below* cell `(x, z)`, a
/// `width x (height + 1)` matrix whose row `z = height` is the top perimeter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    size: Dims,
    vertical: Array2D<bool>,
    horizontal: Array2D<bool>,
}

impl WallGrid {
    /// Fresh grid with every wall present.
    pub fn new(size: Dims) -> Self {
        assert!(size.all_positive(), "wall grid size must be positive");

        let (w, h) = (size.0 as usize, size.1 as usize);
        Self {
            size,
            vertical: Array2D::new(true, w + 1, h),
            horizontal: Array2D::new(true, w, h + 1),
        }
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.size.0 && 0 <= pos.1 && pos.1 < self.size.1
    }

    /// Wall on the left side of cell `pos`; out of range counts as present.
    pub fn vertical(&self, pos: Dims) -> bool {
        self.vertical.get(pos).copied().unwrap_or(true)
    }

    /// Wall below cell `pos`; out of range counts as present.
    pub fn horizontal(&self, pos: Dims) -> bool {
        self.horizontal.get(pos).copied().unwrap_or(true)
    }

    pub fn clear_vertical(&mut self, pos: Dims) {
        if let Some(wall) = self.vertical.get_mut(pos) {
            *wall = false;
        }
    }

    pub fn clear_horizontal(&mut self, pos: Dims) {
        if let Some(wall) = self.horizontal.get_mut(pos) {
            *wall = false;
        }
    }

    /// A cell is accessible iff at least one of its four surrounding walls
    /// is cleared. Out-of-range coordinates are never accessible.
    pub fn is_cell_accessible(&self, pos: Dims) -> bool {
        if !self.is_in_bounds(pos) {
            return false;
        }

        !(self.vertical(pos)
            && self.vertical(pos + Way::Right.offset())
            && self.horizontal(pos)
            && self.horizontal(pos + Way::Up.offset()))
    }

    /// State of the wall separating `pos` from its neighbor in direction
    /// `way`; `true` = wall present, out of range counts as present.
    pub fn wall_between(&self, pos: Dims, way: Way) -> bool {
        match way {
            Way::Left => self.vertical(pos),
            Way::Right => self.vertical(pos + Way::Right.offset()),
            Way::Down => self.horizontal(pos),
            Way::Up => self.horizontal(pos + Way::Up.offset()),
        }
    }

    pub fn clear_between(&mut self, pos: Dims, way: Way) {
        match way {
            Way::Left => self.clear_vertical(pos),
            Way::Right => self.clear_vertical(pos + Way::Right.offset()),
            Way::Down => self.clear_horizontal(pos),
            Way::Up => self.clear_horizontal(pos + Way::Up.offset()),
        }
    }

    /// Which direction leads from `from` to the grid-adjacent `to`, if any.
    pub fn which_way(from: Dims, to: Dims) -> Option<Way> {
        match (to.0 - from.0, to.1 - from.1) {
            (0, 1) => Some(Way::Up),
            (0, -1) => Some(Way::Down),
            (1, 0) => Some(Way::Right),
            (-1, 0) => Some(Way::Left),
            _ => None,
        }
    }

    /// True iff `from` and `to` are grid-adjacent, both in bounds, and the
    /// wall between them is cleared.
    pub fn is_open_between(&self, from: Dims, to: Dims) -> bool {
        match Self::which_way(from, to) {
            Some(way) => {
                self.is_in_bounds(from) && self.is_in_bounds(to) && !self.wall_between(from, way)
            }
            None => false,
        }
    }
}
