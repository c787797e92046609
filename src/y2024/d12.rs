use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{
        character::complete::none_of,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::HashSet,
};

/* --- Day 12: Garden Groups ---

Connected regions of equal plant labels. Part one prices each region at area times perimeter.
Part two prices at area times side count, where a straight fence run counts once. The side count
of a polygon equals its corner count, so corners are what get counted. */

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
struct Cell(char);

impl Parse for Cell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(none_of("\r\n"), Self)(input)
    }
}

struct RegionSearch<'g> {
    grid: &'g Grid2D<Cell>,
    seed: IVec2,
    region: HashSet<IVec2>,
}

impl BreadthFirstSearch for RegionSearch<'_> {
    type Vertex = IVec2;

    fn seeds(&self, seeds: &mut Vec<IVec2>) {
        seeds.push(self.seed);
    }

    fn neighbors(&self, vertex: &IVec2, neighbors: &mut Vec<IVec2>) {
        let label: Option<&Cell> = self.grid.get(*vertex);

        neighbors.extend(
            Direction::iter()
                .map(|dir| *vertex + dir.vec())
                .filter(|&neighbor| self.grid.get(neighbor) == label),
        );
    }

    fn visit(&mut self, _from: Option<&IVec2>, to: &IVec2) -> bool {
        self.region.insert(*to)
    }

    fn reset(&mut self) {
        self.region.clear();
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Cell>);

impl Solution {
    fn regions(&self) -> Vec<HashSet<IVec2>> {
        let mut assigned: BitVec = bitvec![0; self.0.cells().len()];
        let mut regions: Vec<HashSet<IVec2>> = Vec::new();

        for pos in self.0.iter_positions() {
            if !assigned[self.0.index_from_pos(pos)] {
                let mut search: RegionSearch = RegionSearch {
                    grid: &self.0,
                    seed: pos,
                    region: HashSet::new(),
                };

                search.run();

                for &region_pos in &search.region {
                    assigned.set(self.0.index_from_pos(region_pos), true);
                }

                regions.push(search.region);
            }
        }

        regions
    }

    fn perimeter(region: &HashSet<IVec2>) -> usize {
        region
            .iter()
            .map(|&pos| {
                Direction::iter()
                    .filter(|&dir| !region.contains(&(pos + dir.vec())))
                    .count()
            })
            .sum()
    }

    fn corner_count(region: &HashSet<IVec2>) -> usize {
        const DIAGONALS: [IVec2; 4_usize] = [
            IVec2::new(1_i32, 1_i32),
            IVec2::new(1_i32, -1_i32),
            IVec2::new(-1_i32, 1_i32),
            IVec2::new(-1_i32, -1_i32),
        ];

        region
            .iter()
            .map(|&pos| {
                DIAGONALS
                    .into_iter()
                    .filter(|&diagonal| {
                        let horizontal: bool =
                            region.contains(&(pos + IVec2::new(diagonal.x, 0_i32)));
                        let vertical: bool =
                            region.contains(&(pos + IVec2::new(0_i32, diagonal.y)));

                        // Convex corner, or concave corner with an unlike diagonal cell.
                        (!horizontal && !vertical)
                            || (horizontal && vertical && !region.contains(&(pos + diagonal)))
                    })
                    .count()
            })
            .sum()
    }

    fn fence_price_sum(&self) -> usize {
        self.regions()
            .iter()
            .map(|region| region.len() * Self::perimeter(region))
            .sum()
    }

    fn discounted_fence_price_sum(&self) -> usize {
        self.regions()
            .iter()
            .map(|region| region.len() * Self::corner_count(region))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.fence_price_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.discounted_fence_price_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
