use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::none_of,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
};

/* --- Day 8: Resonant Collinearity ---

Antennas on a grid, keyed by frequency character. Part one counts the in-bounds antinodes at the
2:1 points of every same-frequency pair. Part two counts every in-bounds grid point collinear
with a pair at its spacing, antennas included. */

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
struct Cell(char);

impl Parse for Cell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(none_of("\r\n"), Self)(input)
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Cell>);

impl Solution {
    const EMPTY: char = '.';

    fn antenna_groups(&self) -> HashMap<char, Vec<IVec2>> {
        let mut antenna_groups: HashMap<char, Vec<IVec2>> = HashMap::new();

        for pos in self.0.iter_positions() {
            if let Some(&Cell(frequency)) = self.0.get(pos) {
                if frequency != Self::EMPTY {
                    antenna_groups.entry(frequency).or_default().push(pos);
                }
            }
        }

        antenna_groups
    }

    fn for_each_antenna_pair<F: FnMut(IVec2, IVec2)>(&self, mut f: F) {
        for positions in self.antenna_groups().values() {
            for (index, &first) in positions.iter().enumerate() {
                for &second in &positions[index + 1_usize..] {
                    f(first, second);
                }
            }
        }
    }

    fn antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        self.for_each_antenna_pair(|first, second| {
            for candidate in [second + second - first, first + first - second] {
                if self.0.contains(candidate) {
                    antinodes.insert(candidate);
                }
            }
        });

        antinodes.len()
    }

    fn resonant_antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        self.for_each_antenna_pair(|first, second| {
            let delta: IVec2 = second - first;

            for (mut pos, step) in [(second, delta), (first, -delta)] {
                while self.0.contains(pos) {
                    antinodes.insert(pos);
                    pos += step;
                }
            }
        });

        antinodes.len()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.antinode_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.resonant_antinode_count());
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

    const SOLUTION_STRS: &'static [&'static str] = &["\
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .map(|solution_str| {
                    Solution(
                        Grid2D::try_from_cells_and_dimensions(
                            solution_str
                                .chars()
                                .filter(|&c| c != '\n')
                                .map(Cell)
                                .collect(),
                            IVec2::new(12_i32, 12_i32),
                        )
                        .unwrap(),
                    )
                })
                .collect()
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_antenna_groups() {
        let antenna_groups: HashMap<char, Vec<IVec2>> = solution(0_usize).antenna_groups();

        assert_eq!(antenna_groups.len(), 2_usize);
        assert_eq!(antenna_groups[&'0'].len(), 4_usize);
        assert_eq!(antenna_groups[&'A'].len(), 3_usize);
    }

    #[test]
    fn test_antinode_count() {
        for (index, antinode_count) in [14_usize].into_iter().enumerate() {
            assert_eq!(solution(index).antinode_count(), antinode_count);
        }
    }

    #[test]
    fn test_resonant_antinode_count() {
        for (index, resonant_antinode_count) in [34_usize].into_iter().enumerate() {
            assert_eq!(
                solution(index).resonant_antinode_count(),
                resonant_antinode_count
            );
        }
    }
}
