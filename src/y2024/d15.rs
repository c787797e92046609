use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::{line_ending, one_of},
        combinator::{map_opt, opt},
        error::Error,
        multi::{many0, many1},
        sequence::terminated,
        Err, IResult,
    },
    std::{cmp::Reverse, collections::HashSet},
};

/* --- Day 15: Warehouse Woes ---

A robot pushes box chains around a warehouse. Part one sums the boxes' GPS coordinates (100 times
the row plus the column) after the move sequence. Part two doubles the warehouse width, making
every box two cells wide, and runs the same moves. */

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    enum Cell {
        #[default]
        Open = OPEN = b'.',
        Wall = WALL = b'#',
        Box = BOX = b'O',
        Robot = ROBOT = b'@',
    }
}

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    enum WideCell {
        #[default]
        Open = OPEN = b'.',
        Wall = WALL = b'#',
        BoxLeft = BOX_LEFT = b'[',
        BoxRight = BOX_RIGHT = b']',
    }
}

fn dir_from_char(c: char) -> Option<Direction> {
    match c {
        '^' => Some(Direction::North),
        '>' => Some(Direction::East),
        'v' => Some(Direction::South),
        '<' => Some(Direction::West),
        _ => None,
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    start: IVec2,
    moves: Vec<Direction>,
}

impl Solution {
    fn gps(pos: IVec2) -> i32 {
        100_i32 * pos.y + pos.x
    }

    fn gps_sum_after_moves(&self) -> i32 {
        let mut grid: Grid2D<Cell> = self.grid.clone();

        if let Some(cell) = grid.get_mut(self.start) {
            *cell = Cell::Open;
        }

        let mut robot: IVec2 = self.start;

        for &dir in &self.moves {
            let delta: IVec2 = dir.vec();
            let mut scan: IVec2 = robot + delta;

            while grid.get(scan) == Some(&Cell::Box) {
                scan += delta;
            }

            if grid.get(scan) == Some(&Cell::Open) {
                // The whole chain shifts, which is a single hop of the first box to the gap.
                if scan != robot + delta {
                    if let Some(cell) = grid.get_mut(scan) {
                        *cell = Cell::Box;
                    }

                    if let Some(cell) = grid.get_mut(robot + delta) {
                        *cell = Cell::Open;
                    }
                }

                robot += delta;
            }
        }

        grid.iter_positions()
            .filter(|&pos| grid.get(pos) == Some(&Cell::Box))
            .map(Self::gps)
            .sum()
    }

    fn widened_grid(&self) -> Option<Grid2D<WideCell>> {
        let mut cells: Vec<WideCell> = Vec::with_capacity(self.grid.cells().len() * 2_usize);

        for cell in self.grid.cells() {
            let pair: [WideCell; 2_usize] = match cell {
                Cell::Wall => [WideCell::Wall, WideCell::Wall],
                Cell::Box => [WideCell::BoxLeft, WideCell::BoxRight],
                Cell::Open | Cell::Robot => [WideCell::Open, WideCell::Open],
            };

            cells.extend_from_slice(&pair);
        }

        Grid2D::try_from_cells_and_dimensions(
            cells,
            self.grid.dimensions() * IVec2::new(2_i32, 1_i32),
        )
    }

    fn wide_gps_sum_after_moves(&self) -> i32 {
        let Some(mut grid) = self.widened_grid() else {
            return 0_i32;
        };

        let mut robot: IVec2 = IVec2::new(self.start.x * 2_i32, self.start.y);

        'moves: for &dir in &self.moves {
            let delta: IVec2 = dir.vec();

            // Collect every box cell the push would displace before moving anything.
            let mut frontier: Vec<IVec2> = vec![robot];
            let mut to_move: Vec<IVec2> = Vec::new();
            let mut seen: HashSet<IVec2> = HashSet::new();

            while let Some(pos) = frontier.pop() {
                let next: IVec2 = pos + delta;

                let box_cells: [IVec2; 2_usize] = match grid.get(next) {
                    None | Some(&WideCell::Wall) => continue 'moves,
                    Some(&WideCell::Open) => continue,
                    Some(&WideCell::BoxLeft) => [next, next + IVec2::X],
                    Some(&WideCell::BoxRight) => [next - IVec2::X, next],
                };

                for box_cell in box_cells {
                    if seen.insert(box_cell) {
                        to_move.push(box_cell);
                        frontier.push(box_cell);
                    }
                }
            }

            // Farthest cells along the push direction move first into guaranteed gaps.
            to_move.sort_by_key(|pos| Reverse(pos.x * delta.x + pos.y * delta.y));

            for pos in to_move {
                if let Some(&cell) = grid.get(pos) {
                    if let Some(target_cell) = grid.get_mut(pos + delta) {
                        *target_cell = cell;
                    }

                    if let Some(source_cell) = grid.get_mut(pos) {
                        *source_cell = WideCell::Open;
                    }
                }
            }

            robot += delta;
        }

        grid.iter_positions()
            .filter(|&pos| grid.get(pos) == Some(&WideCell::BoxLeft))
            .map(Self::gps)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let (input, grid) = map_opt(Grid2D::parse, |grid: Grid2D<Cell>| {
            let start: IVec2 = grid
                .iter_positions()
                .find(|&pos| grid.get(pos) == Some(&Cell::Robot))?;

            Some((grid, start))
        })(input)?;
        let (grid, start) = grid;
        let (input, _) = opt(line_ending)(input)?;
        let (input, move_lines) = many0(terminated(
            many1(map_opt(one_of("<^>v"), dir_from_char)),
            opt(line_ending),
        ))(input)?;

        Ok((
            input,
            Self {
                grid,
                start,
                moves: move_lines.into_iter().flatten().collect(),
            },
        ))
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.gps_sum_after_moves());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.wide_gps_sum_after_moves());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        ########\n\
        #..O.O.#\n\
        ##@.O..#\n\
        #...O..#\n\
        #.#.O..#\n\
        #...O..#\n\
        #......#\n\
        ########\n\
        \n\
        <^^>>>vv<v>>v<<\n",
        "\
        ##########\n\
        #..O..O.O#\n\
        #......O.#\n\
        #.OO..O.O#\n\
        #..O@..O.#\n\
        #O#..O...#\n\
        #O..O..O.#\n\
        #.OO.O.OO#\n\
        #....O...#\n\
        ##########\n\
        \n\
        <vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^\n\
        vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v\n\
        ><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<\n\
        <<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^\n\
        ^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><\n\
        ^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^\n\
        >^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^\n\
        <><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>\n\
        ^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>\n\
        v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^\n",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .map(|solution_str| Solution::try_from(*solution_str).unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_parse() {
        let small: &Solution = solution(0_usize);

        assert_eq!(small.grid.dimensions(), IVec2::new(8_i32, 8_i32));
        assert_eq!(small.start, IVec2::new(2_i32, 2_i32));
        assert_eq!(small.moves.len(), 15_usize);
        assert_eq!(small.moves[0_usize], Direction::West);
        assert_eq!(small.moves[1_usize], Direction::North);

        let large: &Solution = solution(1_usize);

        assert_eq!(large.grid.dimensions(), IVec2::new(10_i32, 10_i32));
        assert_eq!(large.start, IVec2::new(4_i32, 4_i32));
        assert_eq!(large.moves.len(), 700_usize);
    }

    #[test]
    fn test_gps_sum_after_moves() {
        for (index, gps_sum) in [2028_i32, 10092_i32].into_iter().enumerate() {
            assert_eq!(solution(index).gps_sum_after_moves(), gps_sum);
        }
    }

    #[test]
    fn test_wide_gps_sum_after_moves() {
        assert_eq!(solution(1_usize).wide_gps_sum_after_moves(), 9021_i32);
    }

    #[test]
    fn test_wide_gps_sum_small_example() {
        let solution: Solution = Solution::try_from(
            "\
            #######\n\
            #...#.#\n\
            #.....#\n\
            #..OO@#\n\
            #..O..#\n\
            #.....#\n\
            #######\n\
            \n\
            <vv<<^^<<^^\n",
        )
        .unwrap();

        assert_eq!(solution.wide_gps_sum_after_moves(), 618_i32);
    }
}
