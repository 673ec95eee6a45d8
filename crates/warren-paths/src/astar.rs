use std::collections::BinaryHeap;

use warren_core::{Grid, Point};

use crate::distance::manhattan;
use crate::pathfinder::{NodeRef, PathFinder};
use crate::traits::Walkable;

/// How the search treats the rediscovery of an already-known cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierPolicy {
    /// Update cost and parent when a strictly cheaper route to a known
    /// cell is found.
    #[default]
    Relax,
    /// Keep the first discovery even when a cheaper route appears later.
    /// With unit costs and the Manhattan heuristic this rarely matters,
    /// but it can return a slightly longer path in some orderings.
    FirstDiscovery,
}

impl PathFinder {
    /// Compute a path from `from` to `to` with A*: unit step cost, the
    /// four cardinal neighbours, Manhattan heuristic.
    ///
    /// Returns the full path including both endpoints, in traversal
    /// order. `from == to` yields `Some(vec![from])` without touching
    /// the map; `None` means no walkable path exists.
    pub fn find_path<W: Walkable>(
        &mut self,
        map: &W,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.find_path_with(map, from, to, FrontierPolicy::default())
    }

    /// [`find_path`](Self::find_path) with an explicit rediscovery
    /// policy.
    pub fn find_path_with<W: Walkable>(
        &mut self,
        map: &W,
        from: Point,
        to: Point,
        policy: FrontierPolicy,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale heap entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            for np in current_point.neighbors_4() {
                if !map.is_open(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    match policy {
                        FrontierPolicy::FirstDiscovery => continue,
                        FrontierPolicy::Relax if tentative_g >= n.g => continue,
                        FrontierPolicy::Relax => {}
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        if !found {
            return None;
        }

        // Reconstruct by walking parent indices back to the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

/// One-shot path query for callers that do not retain a [`PathFinder`].
pub fn find_path(grid: &Grid, from: Point, to: Point) -> Option<Vec<Point>> {
    let mut finder = PathFinder::for_grid(grid);
    finder.find_path(grid, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::collections::VecDeque;
    use warren_core::{Grid, Tile};
    use warren_gen::{GenParams, MazeGen};

    /// Assert the path walks unit cardinal steps over open cells from
    /// `from` to `to` without revisiting a cell.
    fn assert_valid_path(grid: &Grid, path: &[Point], from: Point, to: Point) {
        assert_eq!(*path.first().unwrap(), from);
        assert_eq!(*path.last().unwrap(), to);
        let mut seen = HashSet::new();
        for p in path {
            assert!(grid.is_open(*p), "path crosses a wall at {p}");
            assert!(seen.insert(*p), "path revisits {p}");
        }
        for pair in path.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1, "non-unit step in path");
        }
    }

    /// Reference shortest-path distance by plain BFS.
    fn bfs_distance(grid: &Grid, from: Point, to: Point) -> Option<usize> {
        let mut dist = std::collections::HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(from, 0usize);
        queue.push_back(from);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return Some(dist[&p]);
            }
            for n in p.neighbors_4() {
                if grid.is_open(n) && !dist.contains_key(&n) {
                    dist.insert(n, dist[&p] + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }

    #[test]
    fn open_field_path_is_manhattan_optimal() {
        let grid = Grid::new(5, 5).unwrap();
        let from = Point::new(1, 1);
        let to = Point::new(3, 3);
        let path = find_path(&grid, from, to).unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, from, to);
    }

    #[test]
    fn detours_around_single_obstacle() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(Point::new(2, 2), Tile::Wall);
        let from = Point::new(1, 2);
        let to = Point::new(3, 2);
        let path = find_path(&grid, from, to).unwrap();
        // Straight line is blocked: two extra steps around the wall.
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, from, to);
        assert!(!path.contains(&Point::new(2, 2)));
    }

    #[test]
    fn degenerate_start_equals_goal() {
        let grid = Grid::new(5, 5).unwrap();
        let c = Point::new(2, 3);
        assert_eq!(find_path(&grid, c, c), Some(vec![c]));
    }

    #[test]
    fn walled_off_pocket_is_unreachable() {
        let mut grid = Grid::new(7, 7).unwrap();
        // Seal the corner cell (5, 5) behind walls.
        grid.set(Point::new(4, 5), Tile::Wall);
        grid.set(Point::new(5, 4), Tile::Wall);
        grid.set(Point::new(4, 4), Tile::Wall);
        assert_eq!(find_path(&grid, Point::new(1, 1), Point::new(5, 5)), None);
    }

    #[test]
    fn goal_on_wall_is_unreachable() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(Point::new(3, 3), Tile::Wall);
        assert_eq!(find_path(&grid, Point::new(1, 1), Point::new(3, 3)), None);
        // Border cells are walls too.
        assert_eq!(find_path(&grid, Point::new(1, 1), Point::new(0, 2)), None);
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(find_path(&grid, Point::new(-1, 1), Point::new(3, 3)), None);
        assert_eq!(find_path(&grid, Point::new(1, 1), Point::new(9, 3)), None);
    }

    #[test]
    fn matches_bfs_distance_on_generated_maze() {
        let grid = MazeGen::new(StdRng::seed_from_u64(67218))
            .generate(32, 32, &GenParams::default())
            .unwrap();
        let from = Point::new(1, 1);
        let to = Point::new(29, 29);

        let astar = find_path(&grid, from, to);
        let bfs = bfs_distance(&grid, from, to);
        match (astar, bfs) {
            (Some(path), Some(d)) => {
                assert_valid_path(&grid, &path, from, to);
                assert_eq!(path.len(), d + 1, "path is not shortest");
            }
            (None, None) => {}
            (a, b) => panic!("search disagrees with BFS: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn first_discovery_is_valid_and_never_shorter() {
        let mut grid = Grid::new(9, 9).unwrap();
        grid.set(Point::new(4, 3), Tile::Wall);
        grid.set(Point::new(4, 4), Tile::Wall);
        grid.set(Point::new(4, 5), Tile::Wall);

        let from = Point::new(1, 4);
        let to = Point::new(7, 4);
        let mut finder = PathFinder::for_grid(&grid);
        let relaxed = finder
            .find_path_with(&grid, from, to, FrontierPolicy::Relax)
            .unwrap();
        let first = finder
            .find_path_with(&grid, from, to, FrontierPolicy::FirstDiscovery)
            .unwrap();
        // Relax is shortest: the straight line costs 6 edges, the wall
        // band forces a 2-out-2-back detour, so 11 cells total.
        assert_eq!(relaxed.len(), 11);
        assert_valid_path(&grid, &relaxed, from, to);
        // FirstDiscovery may keep a worse route but never a better one.
        assert!(first.len() >= relaxed.len());
        assert_valid_path(&grid, &first, from, to);
    }

    #[test]
    fn policies_agree_on_the_open_field() {
        let grid = Grid::new(7, 7).unwrap();
        let from = Point::new(1, 1);
        let to = Point::new(5, 4);
        let mut finder = PathFinder::for_grid(&grid);
        let relaxed = finder
            .find_path_with(&grid, from, to, FrontierPolicy::Relax)
            .unwrap();
        let first = finder
            .find_path_with(&grid, from, to, FrontierPolicy::FirstDiscovery)
            .unwrap();
        // Every route inside the bounding rectangle is monotone, so the
        // first discovery of each cell is already optimal.
        assert_eq!(relaxed.len(), 8);
        assert_eq!(first.len(), 8);
        assert_valid_path(&grid, &first, from, to);
    }

    #[test]
    fn finder_is_reusable_across_edits() {
        let mut grid = Grid::new(7, 7).unwrap();
        let from = Point::new(1, 1);
        let to = Point::new(5, 1);
        let mut finder = PathFinder::for_grid(&grid);

        let direct = finder.find_path(&grid, from, to).unwrap();
        assert_eq!(direct.len(), 5);

        // Cut the straight corridor; the next query must detour.
        grid.set(Point::new(3, 1), Tile::Wall);
        let detour = finder.find_path(&grid, from, to).unwrap();
        assert_eq!(detour.len(), 7);
        assert_valid_path(&grid, &detour, from, to);
    }

    #[test]
    fn finder_follows_regeneration() {
        let params = GenParams::default();
        let mut mazegen = MazeGen::new(StdRng::seed_from_u64(4));
        let small = mazegen.generate(16, 16, &params).unwrap();
        let mut finder = PathFinder::for_grid(&small);
        let _ = finder.find_path(&small, Point::new(1, 1), Point::new(14, 14));

        let big = mazegen.generate(48, 48, &params).unwrap();
        finder.set_bounds(big.bounds());
        let from = Point::new(1, 1);
        let to = Point::new(45, 45);
        if let Some(path) = finder.find_path(&big, from, to) {
            assert_valid_path(&big, &path, from, to);
        }
    }
}
