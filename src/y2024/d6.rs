use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{combinator::map_opt, error::Error, Err, IResult},
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
    strum::EnumCount,
};

/* --- Day 6: Guard Gallivant ---

A guard walks the lab, turning right at obstacles, until she leaves the mapped area. Part one
counts the distinct cells she visits. Part two counts the positions where one added obstacle
would trap her in a loop. */

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    enum Cell {
        #[default]
        Open = OPEN = b'.',
        Obstacle = OBSTACLE = b'#',
        Guard = GUARD = b'^',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    start: IVec2,
}

impl Solution {
    fn is_obstructed(&self, pos: IVec2, extra_obstacle: Option<IVec2>) -> bool {
        self.grid.get(pos) == Some(&Cell::Obstacle) || extra_obstacle == Some(pos)
    }

    /// Walks the patrol route. Returns the visited cell set if the guard exits the grid, or
    /// `None` if she re-enters a previous position-and-heading state.
    fn patrol_visited(&self, extra_obstacle: Option<IVec2>) -> Option<BitVec> {
        let cell_count: usize = self.grid.cells().len();
        let mut visited: BitVec = bitvec![0; cell_count];
        let mut states: BitVec = bitvec![0; cell_count * Direction::COUNT];
        let mut pos: IVec2 = self.start;
        let mut dir: Direction = Direction::North;

        loop {
            let cell_index: usize = self.grid.index_from_pos(pos);

            visited.set(cell_index, true);

            if states.replace(cell_index * Direction::COUNT + dir as usize, true) {
                return None;
            }

            let next: IVec2 = pos + dir.vec();

            if !self.grid.contains(next) {
                return Some(visited);
            }

            if self.is_obstructed(next, extra_obstacle) {
                dir = dir.turn_right();
            } else {
                pos = next;
            }
        }
    }

    fn visited_cell_count(&self) -> usize {
        self.patrol_visited(None)
            .map_or(0_usize, |visited| visited.count_ones())
    }

    /// Only cells on the unobstructed route can change the route, so those are the only
    /// candidate obstacle positions.
    fn looping_obstacle_count(&self) -> usize {
        self.patrol_visited(None).map_or(0_usize, |visited| {
            let candidates: Vec<IVec2> = visited
                .iter_ones()
                .map(|cell_index| self.grid.pos_from_index(cell_index))
                .filter(|&pos| pos != self.start)
                .collect();

            candidates
                .par_iter()
                .filter(|&&pos| self.patrol_visited(Some(pos)).is_none())
                .count()
        })
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid2D::parse, |grid: Grid2D<Cell>| {
            let start: IVec2 = grid
                .iter_positions()
                .find(|&pos| grid.get(pos) == Some(&Cell::Guard))?;

            Some(Self { grid, start })
        })(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.visited_cell_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.looping_obstacle_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
