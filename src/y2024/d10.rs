use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::{map, map_opt},
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
};

/* --- Day 10: Hoof It ---

A topographic map of heights 0 through 9. A trail climbs by exactly one per step, orthogonally.
Part one sums, per trailhead (height 0), the number of distinct reachable summits (height 9).
Part two sums the number of distinct trails instead. */

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, PartialEq)]
struct Height(u8);

impl Height {
    const TRAILHEAD: Self = Self(0_u8);
    const SUMMIT: Self = Self(9_u8);
}

impl Parse for Height {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(satisfy(|c| c.is_ascii_digit()), |c| {
            c.to_digit(10_u32).map(|digit| Self(digit as u8))
        })(input)
    }
}

struct TrailSearch<'g> {
    grid: &'g Grid2D<Height>,
    trailhead: IVec2,
    visited: HashSet<IVec2>,
}

impl BreadthFirstSearch for TrailSearch<'_> {
    type Vertex = IVec2;

    fn seeds(&self, seeds: &mut Vec<IVec2>) {
        seeds.push(self.trailhead);
    }

    fn neighbors(&self, vertex: &IVec2, neighbors: &mut Vec<IVec2>) {
        if let Some(&Height(height)) = self.grid.get(*vertex) {
            neighbors.extend(Direction::iter().map(|dir| *vertex + dir.vec()).filter(
                |&neighbor| self.grid.get(neighbor) == Some(&Height(height + 1_u8)),
            ));
        }
    }

    fn visit(&mut self, _from: Option<&IVec2>, to: &IVec2) -> bool {
        self.visited.insert(*to)
    }

    fn reset(&mut self) {
        self.visited.clear();
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Height>);

impl Solution {
    fn iter_trailheads(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.0
            .iter_positions()
            .filter(|&pos| self.0.get(pos) == Some(&Height::TRAILHEAD))
    }

    fn trailhead_score_sum(&self) -> usize {
        self.iter_trailheads()
            .map(|trailhead| {
                let mut search: TrailSearch = TrailSearch {
                    grid: &self.0,
                    trailhead,
                    visited: HashSet::new(),
                };

                search.run();

                search
                    .visited
                    .into_iter()
                    .filter(|&pos| self.0.get(pos) == Some(&Height::SUMMIT))
                    .count()
            })
            .sum()
    }

    /// Counts trails with a whole-grid wave: every trailhead starts with one route, and each
    /// height level pushes its route counts up to the next one. Summing the counts that reach
    /// the summits equals summing per-trailhead ratings.
    fn trailhead_rating_sum(&self) -> u64 {
        let mut route_counts: HashMap<IVec2, u64> = self
            .iter_trailheads()
            .map(|trailhead| (trailhead, 1_u64))
            .collect();

        for height in Height::TRAILHEAD.0..Height::SUMMIT.0 {
            let mut next_route_counts: HashMap<IVec2, u64> = HashMap::new();

            for (&pos, &count) in &route_counts {
                for dir in Direction::iter() {
                    let neighbor: IVec2 = pos + dir.vec();

                    if self.0.get(neighbor) == Some(&Height(height + 1_u8)) {
                        *next_route_counts.entry(neighbor).or_default() += count;
                    }
                }
            }

            route_counts = next_route_counts;
        }

        route_counts.values().sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.trailhead_score_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.trailhead_rating_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
