use {
    num::Zero,
    std::{
        cmp::Ordering,
        collections::{BinaryHeap, VecDeque},
        ops::Add,
    },
};

/// An open-set entry ordered by reversed cost, so that `BinaryHeap` pops the cheapest element
/// first.
pub struct OpenSetElement<V, C>(pub V, pub C);

impl<V, C: PartialEq> PartialEq for OpenSetElement<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<V, C: PartialOrd> PartialOrd for OpenSetElement<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.1.partial_cmp(&self.1)
    }
}

impl<V, C: Eq> Eq for OpenSetElement<V, C> {}

impl<V, C: Ord> Ord for OpenSetElement<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.1.cmp(&self.1)
    }
}

/// A flood traversal from one or more seed vertices.
///
/// `visit` both marks and filters: it returns whether `to` was newly visited, and only newly
/// visited vertices are enqueued. Seeds report a `None` source.
pub trait BreadthFirstSearch: Sized {
    type Vertex;

    fn seeds(&self, seeds: &mut Vec<Self::Vertex>);
    fn neighbors(&self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>);
    fn visit(&mut self, from: Option<&Self::Vertex>, to: &Self::Vertex) -> bool;
    fn reset(&mut self);

    fn run(&mut self) {
        self.reset();

        let mut seeds: Vec<Self::Vertex> = Vec::new();

        self.seeds(&mut seeds);

        let mut queue: VecDeque<Self::Vertex> = VecDeque::new();

        for seed in seeds {
            if self.visit(None, &seed) {
                queue.push_back(seed);
            }
        }

        let mut neighbors: Vec<Self::Vertex> = Vec::new();

        while let Some(vertex) = queue.pop_front() {
            self.neighbors(&vertex, &mut neighbors);

            for neighbor in neighbors.drain(..) {
                if self.visit(Some(&vertex), &neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }
}

/// Dijkstra's algorithm over an implicit graph, with the cost bookkeeping owned by the
/// implementor so it outlives the search.
///
/// The open set uses lazy deletion: improved vertices are pushed again, and stale entries are
/// recognized on extraction by comparing against the recorded cost. Extraction order is
/// non-decreasing in cost; ties fall wherever the heap puts them.
pub trait UniformCostSearch: Sized {
    type Vertex: Clone;
    type Cost: Add<Output = Self::Cost> + Copy + Ord + Zero;

    fn start(&self) -> Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;
    fn cost_from_start(&self, vertex: &Self::Vertex) -> Option<Self::Cost>;
    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    );
    fn record_cost(&mut self, vertex: &Self::Vertex, cost: Self::Cost);
    fn reset(&mut self);

    /// Runs to the first end vertex, or exhausts the reachable graph and returns `None` if
    /// `is_end` never holds.
    fn run(&mut self) -> Option<Self::Vertex> {
        self.reset();

        let start: Self::Vertex = self.start();

        self.record_cost(&start, Self::Cost::zero());

        let mut open_set: BinaryHeap<OpenSetElement<Self::Vertex, Self::Cost>> = BinaryHeap::new();

        open_set.push(OpenSetElement(start, Self::Cost::zero()));

        let mut neighbors: Vec<OpenSetElement<Self::Vertex, Self::Cost>> = Vec::new();

        while let Some(OpenSetElement(vertex, cost)) = open_set.pop() {
            if self
                .cost_from_start(&vertex)
                .map_or(true, |recorded_cost| cost > recorded_cost)
            {
                // Stale entry, a cheaper route to this vertex was already extracted.
                continue;
            }

            if self.is_end(&vertex) {
                return Some(vertex);
            }

            self.neighbors(&vertex, &mut neighbors);

            for OpenSetElement(neighbor, edge_cost) in neighbors.drain(..) {
                let neighbor_cost: Self::Cost = cost + edge_cost;

                if self
                    .cost_from_start(&neighbor)
                    .map_or(true, |recorded_cost| neighbor_cost < recorded_cost)
                {
                    self.record_cost(&neighbor, neighbor_cost);
                    open_set.push(OpenSetElement(neighbor, neighbor_cost));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashMap};

    struct EdgeListSearch {
        edges: Vec<(usize, usize, u32)>,
        start: usize,
        end: Option<usize>,
        costs: HashMap<usize, u32>,
    }

    impl EdgeListSearch {
        fn new(edges: Vec<(usize, usize, u32)>, start: usize) -> Self {
            Self {
                edges,
                start,
                end: None,
                costs: HashMap::new(),
            }
        }
    }

    impl UniformCostSearch for EdgeListSearch {
        type Vertex = usize;
        type Cost = u32;

        fn start(&self) -> usize {
            self.start
        }

        fn is_end(&self, vertex: &usize) -> bool {
            self.end == Some(*vertex)
        }

        fn cost_from_start(&self, vertex: &usize) -> Option<u32> {
            self.costs.get(vertex).copied()
        }

        fn neighbors(&self, vertex: &usize, neighbors: &mut Vec<OpenSetElement<usize, u32>>) {
            neighbors.extend(self.edges.iter().filter_map(|&(from, to, cost)| {
                (from == *vertex).then_some(OpenSetElement(to, cost))
            }));
        }

        fn record_cost(&mut self, vertex: &usize, cost: u32) {
            self.costs.insert(*vertex, cost);
        }

        fn reset(&mut self) {
            self.costs.clear();
        }
    }

    struct ReachabilitySearch {
        edges: Vec<(usize, usize)>,
        seeds: Vec<usize>,
        visited: Vec<bool>,
    }

    impl BreadthFirstSearch for ReachabilitySearch {
        type Vertex = usize;

        fn seeds(&self, seeds: &mut Vec<usize>) {
            seeds.extend_from_slice(&self.seeds);
        }

        fn neighbors(&self, vertex: &usize, neighbors: &mut Vec<usize>) {
            neighbors.extend(
                self.edges
                    .iter()
                    .filter_map(|&(from, to)| (from == *vertex).then_some(to)),
            );
        }

        fn visit(&mut self, _from: Option<&usize>, to: &usize) -> bool {
            !std::mem::replace(&mut self.visited[*to], true)
        }

        fn reset(&mut self) {
            self.visited.fill(false);
        }
    }

    #[test]
    fn test_uniform_cost_search_costs() {
        // Two routes from 0 to 3, the longer-hop route being cheaper overall.
        let mut search: EdgeListSearch = EdgeListSearch::new(
            vec![
                (0_usize, 1_usize, 10_u32),
                (0_usize, 2_usize, 2_u32),
                (2_usize, 1_usize, 3_u32),
                (1_usize, 3_usize, 1_u32),
                (2_usize, 3_usize, 100_u32),
            ],
            0_usize,
        );

        assert_eq!(search.run(), None);

        for (vertex, cost) in [
            (0_usize, 0_u32),
            (1_usize, 5_u32),
            (2_usize, 2_u32),
            (3_usize, 6_u32),
        ] {
            assert_eq!(search.cost_from_start(&vertex), Some(cost));
        }

        // Vertex 4 has no incoming edges.
        assert_eq!(search.cost_from_start(&4_usize), None);

        search.end = Some(3_usize);

        assert_eq!(search.run(), Some(3_usize));
        assert_eq!(search.cost_from_start(&3_usize), Some(6_u32));
    }

    #[test]
    fn test_breadth_first_search_multi_seed() {
        let mut search: ReachabilitySearch = ReachabilitySearch {
            edges: vec![
                (0_usize, 1_usize),
                (1_usize, 2_usize),
                (4_usize, 5_usize),
                (6_usize, 0_usize),
            ],
            seeds: vec![0_usize, 4_usize],
            visited: vec![false; 7_usize],
        };

        search.run();

        assert_eq!(
            search.visited,
            vec![true, true, true, false, true, true, false]
        );
    }
}
