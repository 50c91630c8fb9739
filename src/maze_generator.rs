//! Maze generation
//!
//! Passages are carved with a randomized depth-first search with
//! backtracking, which produces a perfect maze: every cell is reachable and
//! there is exactly one path between any two cells.

use anyhow::bail;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::grid::{Direction, Grid, Point};

/// Borders on which the entrance and exit are placed
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Orientation {
    /// Entrance on the top border, exit on the bottom border
    Vertical,
    /// Entrance on the left border, exit on the right border
    Horizontal,
}

impl Orientation {
    /// Number of positions available along the entrance/exit borders
    fn axis_len(self, rows: usize, columns: usize) -> usize {
        match self {
            Orientation::Vertical => columns,
            Orientation::Horizontal => rows,
        }
    }
}

/// Entrance and exit placement
///
/// `entrance` and `exit` are column indices for [Orientation::Vertical] and
/// row indices for [Orientation::Horizontal]. They are never equal.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Openings {
    pub orientation: Orientation,
    pub entrance: usize,
    pub exit: usize,
}

/// Finished maze
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Maze {
    grid: Grid,
    openings: Openings,
}

impl Maze {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn openings(&self) -> Openings {
        self.openings
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Entrance cell and the side of it that faces outwards
    pub fn entrance(&self) -> (Point, Direction) {
        entrance_of(&self.openings)
    }

    /// Exit cell and the side of it that faces outwards
    pub fn exit(&self) -> (Point, Direction) {
        exit_of(&self.openings, &self.grid)
    }
}

fn entrance_of(openings: &Openings) -> (Point, Direction) {
    match openings.orientation {
        Orientation::Vertical => (Point::new(0, openings.entrance), Direction::Top),
        Orientation::Horizontal => (Point::new(openings.entrance, 0), Direction::Left),
    }
}

fn exit_of(openings: &Openings, grid: &Grid) -> (Point, Direction) {
    match openings.orientation {
        Orientation::Vertical => (
            Point::new(grid.rows() - 1, openings.exit),
            Direction::Bottom,
        ),
        Orientation::Horizontal => (
            Point::new(openings.exit, grid.columns() - 1),
            Direction::Right,
        ),
    }
}

/// Reusable buffer for the unvisited neighbours of one cell
#[derive(Default)]
struct Neighbours {
    points: [Point; 4],
    len: usize,
}

impl Neighbours {
    fn clear(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, p: Point) {
        self.points[self.len] = p;
        self.len += 1;
    }

    fn as_slice(&self) -> &[Point] {
        &self.points[..self.len]
    }
}

/// Maze generator, holding the random source for all draws.
pub struct MazeGenerator {
    random: StdRng,
    neighbours: Neighbours,
}

impl MazeGenerator {
    /// Create generator; without `seed`, the random source is seeded from
    /// system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
            neighbours: Neighbours::default(),
        }
    }

    /// Generate a perfect maze of `rows` x `columns` cells
    ///
    /// Returns error, if either dimension is zero, or if the maze is a single
    /// cell (entrance and exit could not be distinct).
    ///
    /// # Examples
    /// ```
    /// use dfs_maze::MazeGenerator;
    ///
    /// let mut gen = MazeGenerator::new(Some(7));
    /// let maze = gen.generate(4, 6).unwrap();
    /// assert_eq!((maze.rows(), maze.columns()), (4, 6));
    /// assert_ne!(maze.openings().entrance, maze.openings().exit);
    /// ```
    pub fn generate(&mut self, rows: usize, columns: usize) -> anyhow::Result<Maze> {
        if rows == 0 || columns == 0 {
            bail!("Maze dimensions must be positive, got {rows}x{columns}");
        }
        let openings = self.select_openings(rows, columns)?;
        debug!(rows, columns, ?openings, "Selected entrance and exit");

        let mut grid = Grid::new(rows, columns);
        self.carve_passages(&mut grid, &openings);
        Ok(Maze { grid, openings })
    }

    /// Choose orientation and two distinct border positions
    ///
    /// Orientation is drawn among those whose borders have at least two
    /// positions. Positions are re-rolled as a pair until they differ.
    fn select_openings(&mut self, rows: usize, columns: usize) -> anyhow::Result<Openings> {
        let orientation = match (columns > 1, rows > 1) {
            (true, true) => {
                if self.random.gen_bool(0.5) {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                }
            }
            (true, false) => Orientation::Vertical,
            (false, true) => Orientation::Horizontal,
            (false, false) => bail!("Cannot place distinct entrance and exit in a single cell"),
        };

        let len = orientation.axis_len(rows, columns);
        loop {
            let entrance = self.random.gen_range(0..len);
            let exit = self.random.gen_range(0..len);
            if entrance != exit {
                return Ok(Openings {
                    orientation,
                    entrance,
                    exit,
                });
            }
            trace!(entrance, "Entrance and exit coincide, drawing again");
        }
    }

    /// Randomized depth-first search from the top-left cell
    fn carve_passages(&mut self, grid: &mut Grid, openings: &Openings) {
        let start = Point::new(0, 0);
        let mut stack = vec![start];
        grid.cell_mut(start).visited = true;
        open_border(grid, openings, start);

        let mut carved = 0usize;
        while let Some(&current) = stack.last() {
            match self.random_neighbour(grid, current) {
                Some(next) => {
                    carve_wall(grid, current, next);
                    open_border(grid, openings, next);
                    grid.cell_mut(next).visited = true;
                    stack.push(next);
                    carved += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }
        debug!(carved, "Carved passages");
    }

    /// Random unvisited neighbour of `p`, or `None` if there is no such
    /// neighbour left.
    fn random_neighbour(&mut self, grid: &Grid, p: Point) -> Option<Point> {
        self.neighbours.clear();
        for dir in Direction::ALL {
            if let Some(q) = grid.neighbour(p, dir) {
                if !grid.cell(q).visited {
                    self.neighbours.push(q);
                }
            }
        }
        self.neighbours.as_slice().choose(&mut self.random).copied()
    }
}

/// Remove the wall shared by adjacent cells `from` and `to`, on both cells
fn carve_wall(grid: &mut Grid, from: Point, to: Point) {
    let dir = Direction::between(from, to);
    debug_assert!(dir.is_some(), "{from:?} and {to:?} are not adjacent");
    if let Some(dir) = dir {
        grid.cell_mut(from).open(dir);
        grid.cell_mut(to).open(dir.opposite());
    }
}

/// Open the outer wall of `p`, if `p` is the entrance or exit cell
fn open_border(grid: &mut Grid, openings: &Openings, p: Point) {
    for (cell, dir) in [entrance_of(openings), exit_of(openings, grid)] {
        if cell == p {
            grid.cell_mut(p).open(dir);
        }
    }
}
