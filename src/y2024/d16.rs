use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map_opt, error::Error, Err, IResult},
    std::collections::{HashMap, HashSet},
};

/* --- Day 16: Reindeer Maze ---

A maze race scored by moves: a forward step costs 1, a quarter turn costs 1000. The reindeer
starts facing East. Part one finds the lowest possible score. Part two counts the tiles that lie
on at least one lowest-score path, which is where a spectator would want to sit. */

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    enum Cell {
        #[default]
        Open = OPEN = b'.',
        Wall = WALL = b'#',
        Start = START = b'S',
        End = END = b'E',
    }
}

const STEP_COST: u32 = 1_u32;
const TURN_COST: u32 = 1_000_u32;

/// Dijkstra over position-and-heading states. `is_end` never holds, so the run exhausts the
/// reachable states and leaves a complete cost map behind.
struct ScoreSearch<'g> {
    grid: &'g Grid2D<Cell>,
    start: SmallPosAndDir,
    costs: HashMap<SmallPosAndDir, u32>,
}

impl ScoreSearch<'_> {
    fn is_open(&self, pos: IVec2) -> bool {
        self.grid
            .get(pos)
            .map_or(false, |&cell| cell != Cell::Wall)
    }
}

impl UniformCostSearch for ScoreSearch<'_> {
    type Vertex = SmallPosAndDir;
    type Cost = u32;

    fn start(&self) -> SmallPosAndDir {
        self.start
    }

    fn is_end(&self, _vertex: &SmallPosAndDir) -> bool {
        false
    }

    fn cost_from_start(&self, vertex: &SmallPosAndDir) -> Option<u32> {
        self.costs.get(vertex).copied()
    }

    fn neighbors(
        &self,
        vertex: &SmallPosAndDir,
        neighbors: &mut Vec<OpenSetElement<SmallPosAndDir, u32>>,
    ) {
        for dir in [vertex.dir.turn_left(), vertex.dir.turn_right()] {
            neighbors.push(OpenSetElement(
                SmallPosAndDir {
                    pos: vertex.pos,
                    dir,
                },
                TURN_COST,
            ));
        }

        let forward: IVec2 = vertex.pos.get() + vertex.dir.vec();

        if self.is_open(forward) {
            if let Some(forward_vertex) = SmallPosAndDir::try_from_pos_and_dir(forward, vertex.dir)
            {
                neighbors.push(OpenSetElement(forward_vertex, STEP_COST));
            }
        }
    }

    fn record_cost(&mut self, vertex: &SmallPosAndDir, cost: u32) {
        self.costs.insert(*vertex, cost);
    }

    fn reset(&mut self) {
        self.costs.clear();
    }
}

/// Walks the cost map backwards from every minimum-score end state, following only
/// cost-consistent predecessors, so the visited states are exactly those on some optimal path.
struct OptimalTileSearch<'c> {
    costs: &'c HashMap<SmallPosAndDir, u32>,
    end: IVec2,
    min_score: u32,
    visited: HashSet<SmallPosAndDir>,
}

impl BreadthFirstSearch for OptimalTileSearch<'_> {
    type Vertex = SmallPosAndDir;

    fn seeds(&self, seeds: &mut Vec<SmallPosAndDir>) {
        seeds.extend(Direction::iter().filter_map(|dir| {
            let end_vertex: SmallPosAndDir = SmallPosAndDir::try_from_pos_and_dir(self.end, dir)?;

            (self.costs.get(&end_vertex) == Some(&self.min_score)).then_some(end_vertex)
        }));
    }

    fn neighbors(&self, vertex: &SmallPosAndDir, neighbors: &mut Vec<SmallPosAndDir>) {
        let Some(&vertex_cost) = self.costs.get(vertex) else {
            return;
        };

        let step_pos: IVec2 = vertex.pos.get() - vertex.dir.vec();

        if let (Some(step_vertex), Some(step_cost)) = (
            SmallPosAndDir::try_from_pos_and_dir(step_pos, vertex.dir),
            vertex_cost.checked_sub(STEP_COST),
        ) {
            if self.costs.get(&step_vertex) == Some(&step_cost) {
                neighbors.push(step_vertex);
            }
        }

        if let Some(turn_cost) = vertex_cost.checked_sub(TURN_COST) {
            for dir in [vertex.dir.turn_left(), vertex.dir.turn_right()] {
                let turn_vertex: SmallPosAndDir = SmallPosAndDir {
                    pos: vertex.pos,
                    dir,
                };

                if self.costs.get(&turn_vertex) == Some(&turn_cost) {
                    neighbors.push(turn_vertex);
                }
            }
        }
    }

    fn visit(&mut self, _from: Option<&SmallPosAndDir>, to: &SmallPosAndDir) -> bool {
        self.visited.insert(*to)
    }

    fn reset(&mut self) {
        self.visited.clear();
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct MazeSolution {
    min_score: u32,
    optimal_tiles: HashSet<IVec2>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid2D<Cell>,
    start: IVec2,
    end: IVec2,
}

impl Solution {
    /// `None` means the end is unreachable from the start. The start and end tiles are always
    /// members of the optimal tile set when a path exists.
    fn try_solve(&self) -> Option<MazeSolution> {
        let start: SmallPosAndDir =
            SmallPosAndDir::try_from_pos_and_dir(self.start, Direction::East)?;
        let mut score_search: ScoreSearch = ScoreSearch {
            grid: &self.grid,
            start,
            costs: HashMap::new(),
        };

        score_search.run();

        let costs: HashMap<SmallPosAndDir, u32> = score_search.costs;

        let min_score: u32 = Direction::iter()
            .filter_map(|dir| {
                costs
                    .get(&SmallPosAndDir::try_from_pos_and_dir(self.end, dir)?)
                    .copied()
            })
            .min()?;

        let mut tile_search: OptimalTileSearch = OptimalTileSearch {
            costs: &costs,
            end: self.end,
            min_score,
            visited: HashSet::new(),
        };

        tile_search.run();

        Some(MazeSolution {
            min_score,
            optimal_tiles: tile_search
                .visited
                .into_iter()
                .map(|vertex| vertex.pos.get())
                .collect(),
        })
    }

    fn tiles_string(&self, optimal_tiles: &HashSet<IVec2>) -> String {
        let mut string: String = String::new();

        for pos in self.grid.iter_positions() {
            string.push(if optimal_tiles.contains(&pos) {
                'O'
            } else {
                self.grid.get(pos).copied().map_or(' ', char::from)
            });

            if pos.x == self.grid.dimensions().x - 1_i32 {
                string.push('\n');
            }
        }

        string
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(Grid2D::parse, |grid: Grid2D<Cell>| {
            let start: IVec2 = grid
                .iter_positions()
                .find(|&pos| grid.get(pos) == Some(&Cell::Start))?;
            let end: IVec2 = grid
                .iter_positions()
                .find(|&pos| grid.get(pos) == Some(&Cell::End))?;

            Some(Self { grid, start, end })
        })(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_solve().map(|maze_solution| maze_solution.min_score));
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        let maze_solution: Option<MazeSolution> = self.try_solve();

        dbg!(maze_solution
            .as_ref()
            .map(|maze_solution| maze_solution.optimal_tiles.len()));

        if args.verbose {
            if let Some(maze_solution) = maze_solution {
                println!("{}", self.tiles_string(&maze_solution.optimal_tiles));
            }
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
