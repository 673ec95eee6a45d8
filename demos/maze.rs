//! Terminal maze demo: generate a maze, place items, draw the A* path.
//!
//! Run: cargo run --bin maze [seed]

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use warren_core::{Grid, Point, Tile};
use warren_gen::{Collectible, DEFAULT_ITEM_COUNT, GenParams, MazeGen, SpawnZones, place_items};
use warren_paths::find_path;

const WIDTH: i32 = 48;
const HEIGHT: i32 = 24;
const DEFAULT_SEED: u64 = 67218;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse().unwrap_or(DEFAULT_SEED))
        .unwrap_or(DEFAULT_SEED);

    let mut mazegen = MazeGen::new(StdRng::seed_from_u64(seed));
    let grid = match mazegen.generate(WIDTH, HEIGHT, &GenParams::default()) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let zones = SpawnZones::corners(&grid);
    let items = place_items(&grid, DEFAULT_ITEM_COUNT, &zones.reserved(), &mut mazegen.rng);

    let start = zones.start[0];
    let goal = zones.end[0];
    let path = find_path(&grid, start, goal);

    render(&grid, &zones, &items, path.as_deref());
    match path {
        Some(p) => println!(
            "\nseed {seed}: path of {} cells from {start} to {goal}",
            p.len()
        ),
        None => println!("\nseed {seed}: {goal} is not reachable from {start}"),
    }
}

fn render(grid: &Grid, zones: &SpawnZones, items: &[Collectible], path: Option<&[Point]>) {
    let on_path: HashSet<Point> = path.unwrap_or(&[]).iter().copied().collect();
    for y in 0..grid.height() {
        let mut line = String::new();
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if zones.start.contains(&p) {
                'A'
            } else if zones.end.contains(&p) {
                'B'
            } else if on_path.contains(&p) {
                '*'
            } else if items.iter().any(|i| i.pos == p && !i.collected) {
                'o'
            } else if grid.at(p) == Some(Tile::Wall) {
                '#'
            } else {
                ' '
            };
            line.push(ch);
        }
        println!("{line}");
    }
}
