use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::line_ending,
        combinator::opt,
        error::{Error, ErrorKind},
        Err, IResult,
    },
    static_assertions::const_assert,
    strum::{EnumCount as EnumCountTrait, IntoEnumIterator},
    strum_macros::{EnumCount, EnumIter},
};

/// A cardinal direction on a grid whose `y` axis points down, matching text-file row order.
///
/// The discriminant order makes a quarter turn a `+1` (clockwise) or `+3` (counter-clockwise)
/// offset modulo 4.
#[derive(Clone, Copy, Debug, Default, EnumCount, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

// The turn arithmetic below masks instead of taking a remainder.
const_assert!(Direction::COUNT.is_power_of_two());

impl Direction {
    const MASK: u8 = Direction::COUNT as u8 - 1_u8;

    pub const fn from_u8(value: u8) -> Self {
        match value & Self::MASK {
            0_u8 => Self::North,
            1_u8 => Self::East,
            2_u8 => Self::South,
            _ => Self::West,
        }
    }

    pub const fn vec(self) -> IVec2 {
        match self {
            Self::North => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::South => IVec2::Y,
            Self::West => IVec2::NEG_X,
        }
    }

    pub const fn turn_right(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    pub const fn turn_left(self) -> Self {
        Self::from_u8(self as u8 + 3_u8)
    }

    pub const fn rev(self) -> Self {
        Self::from_u8(self as u8 + 2_u8)
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// A rectangular grid stored as a flat row-major `Vec`.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Eq, PartialEq)]
pub struct Grid2D<T> {
    cells: Vec<T>,
    dimensions: IVec2,
}

impl<T> Grid2D<T> {
    pub fn try_from_cells_and_dimensions(cells: Vec<T>, dimensions: IVec2) -> Option<Self> {
        (dimensions.cmpge(IVec2::ZERO).all()
            && cells.len() == dimensions.x as usize * dimensions.y as usize)
            .then(|| Self { cells, dimensions })
    }

    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.dimensions).all()
    }

    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        (pos.y * self.dimensions.x + pos.x) as usize
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let index: i32 = index as i32;

        IVec2::new(index % self.dimensions.x, index / self.dimensions.x)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.contains(pos)
            .then(|| &self.cells[self.index_from_pos(pos)])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        if self.contains(pos) {
            let index: usize = self.index_from_pos(pos);

            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0_usize..self.cells.len()).map(|index| self.pos_from_index(index))
    }
}

impl<T: Clone + Default> Grid2D<T> {
    pub fn allocate(dimensions: IVec2) -> Self {
        Self {
            cells: vec![T::default(); dimensions.x as usize * dimensions.y as usize],
            dimensions,
        }
    }
}

impl<T: Parse> Parse for Grid2D<T> {
    /// Parses a rectangular block of cells. Fails with `ErrorKind::Verify` on a ragged row.
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let mut cells: Vec<T> = Vec::new();
        let mut width: usize = 0_usize;
        let mut height: i32 = 0_i32;
        let mut remaining: &'i str = input;

        loop {
            let row_start: usize = cells.len();
            let mut row_input: &'i str = remaining;

            while let Ok((next_input, cell)) = T::parse(row_input) {
                cells.push(cell);
                row_input = next_input;
            }

            let row_len: usize = cells.len() - row_start;

            if row_len == 0_usize {
                break;
            }

            if height == 0_i32 {
                width = row_len;
            } else if row_len != width {
                return Err(Err::Failure(Error::new(remaining, ErrorKind::Verify)));
            }

            height += 1_i32;
            remaining = row_input;

            match opt(line_ending)(remaining)? {
                (next_input, Some(_)) => remaining = next_input,
                _ => break,
            }
        }

        Ok((
            remaining,
            Self {
                cells,
                dimensions: IVec2::new(width as i32, height),
            },
        ))
    }
}

impl<T: Copy + Into<char>> From<&Grid2D<T>> for String {
    fn from(grid: &Grid2D<T>) -> Self {
        let width: usize = grid.dimensions.x as usize;
        let mut string: String = String::with_capacity(grid.cells.len() + grid.cells.len() / width.max(1_usize));

        for (index, cell) in grid.cells.iter().copied().enumerate() {
            string.push(cell.into());

            if index % width == width - 1_usize {
                string.push('\n');
            }
        }

        string
    }
}

/// A grid position packed into two bytes, for cheap search-state keys.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SmallPos {
    pub x: u8,
    pub y: u8,
}

impl SmallPos {
    pub fn is_valid(pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmple(IVec2::splat(u8::MAX as i32)).all()
    }

    pub fn try_from_pos(pos: IVec2) -> Option<Self> {
        Self::is_valid(pos).then(|| Self {
            x: pos.x as u8,
            y: pos.y as u8,
        })
    }

    pub fn get(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SmallPosAndDir {
    pub pos: SmallPos,
    pub dir: Direction,
}

impl SmallPosAndDir {
    pub fn try_from_pos_and_dir(pos: IVec2, dir: Direction) -> Option<Self> {
        SmallPos::try_from_pos(pos).map(|pos| Self { pos, dir })
    }
}
