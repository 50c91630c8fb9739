//! Rectangular cell grid with per-cell walls

/// Location in the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Point {
    /// Row index
    pub y: usize,
    /// Column index
    pub x: usize,
}

impl Point {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

/// Side of a cell
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions, in the order the walls are stored
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The side facing this one on the adjacent cell
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Direction of the step from `from` to `to`.
    ///
    /// Returns `None`, if the points are not adjacent.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match (to.y as isize - from.y as isize, to.x as isize - from.x as isize) {
            (-1, 0) => Some(Direction::Top),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Bottom),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Single maze square
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    /// Walls in [Direction::ALL] order, `true` if the wall is standing
    walls: [bool; 4],
    /// Whether generation has reached this cell
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }
}

impl Cell {
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    /// Knock down the wall on side `dir`
    pub fn open(&mut self, dir: Direction) {
        self.walls[dir.index()] = false;
    }
}

/// Flat row-major storage of `rows * columns` cells
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create grid where every cell has all four walls and is unvisited
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::default(); rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, p: Point) -> bool {
        p.y < self.rows && p.x < self.columns
    }

    /// Linear index of `p` in the backing storage
    pub fn index(&self, p: Point) -> usize {
        p.y * self.columns + p.x
    }

    /// Panics if `p` is outside the grid.
    pub fn cell(&self, p: Point) -> &Cell {
        &self.cells[self.index(p)]
    }

    /// Panics if `p` is outside the grid.
    pub fn cell_mut(&mut self, p: Point) -> &mut Cell {
        let idx = self.index(p);
        &mut self.cells[idx]
    }

    /// Adjacent point on side `dir`, if it lies within the grid
    pub fn neighbour(&self, p: Point, dir: Direction) -> Option<Point> {
        let next = match dir {
            Direction::Top => Point::new(p.y.checked_sub(1)?, p.x),
            Direction::Right => Point::new(p.y, p.x + 1),
            Direction::Bottom => Point::new(p.y + 1, p.x),
            Direction::Left => Point::new(p.y, p.x.checked_sub(1)?),
        };
        self.contains(next).then_some(next)
    }

    /// Iterate over cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Point, &Cell)> {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Point::new(i / columns, i % columns), cell))
    }
}
