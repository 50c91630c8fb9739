//! Output of finished mazes as SVG drawings or plain text

use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use svg::node::element::{Group, Line, Rectangle};
use svg::Document;

use crate::grid::{Direction, Grid, Point};
use crate::maze_generator::Maze;

/// Drawing dimensions, in SVG user units
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side length of one cell
    pub cell_size: usize,
    /// Empty space around the maze
    pub margin: usize,
    /// Wall line width
    pub stroke_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 20,
            margin: 20,
            stroke_width: 2,
        }
    }
}

/// Draw remaining walls of the maze
///
/// Every wall shared by two cells is drawn once. Open entrance and exit
/// walls are left out, like carved passages.
pub fn to_svg(maze: &Maze, options: &RenderOptions) -> Document {
    let grid = maze.grid();
    let cs = options.cell_size;
    let m = options.margin;

    let mut walls = Group::new()
        .set("stroke", "black")
        .set("stroke-width", options.stroke_width)
        .set("stroke-linecap", "square");

    for (p, cell) in grid.cells() {
        let x0 = p.x * cs + m;
        let y0 = p.y * cs + m;
        let (x1, y1) = (x0 + cs, y0 + cs);

        let mut sides = vec![Direction::Top, Direction::Left];
        if p.x + 1 == grid.columns() {
            sides.push(Direction::Right);
        }
        if p.y + 1 == grid.rows() {
            sides.push(Direction::Bottom);
        }

        for dir in sides.into_iter().filter(|d| cell.has_wall(*d)) {
            let ((ax, ay), (bx, by)) = match dir {
                Direction::Top => ((x0, y0), (x1, y0)),
                Direction::Right => ((x1, y0), (x1, y1)),
                Direction::Bottom => ((x0, y1), (x1, y1)),
                Direction::Left => ((x0, y0), (x0, y1)),
            };
            walls = walls.add(
                Line::new()
                    .set("x1", ax)
                    .set("y1", ay)
                    .set("x2", bx)
                    .set("y2", by),
            );
        }
    }

    let width = grid.columns() * cs + 2 * m;
    let height = grid.rows() * cs + 2 * m;
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        )
        .add(walls)
}

/// Write the SVG drawing of `maze` to `path`
pub fn save_svg(maze: &Maze, options: &RenderOptions, path: &Path) -> anyhow::Result<()> {
    svg::save(path, &to_svg(maze, options))
        .with_context(|| format!("Could not write maze to {}", path.display()))
}

/// Plain-text drawing of the maze
///
/// Each cell takes three characters horizontally; `+` marks wall corners.
///
/// # Examples
/// ```
/// use dfs_maze::{render, MazeGenerator};
///
/// let maze = MazeGenerator::new(Some(1)).generate(3, 5).unwrap();
/// let text = render::to_text(&maze);
/// assert_eq!(text.lines().count(), 7);
/// ```
pub fn to_text(maze: &Maze) -> String {
    let grid = maze.grid();
    let last_row = grid.rows() - 1;
    let mut lines = Vec::with_capacity(2 * grid.rows() + 1);
    for y in 0..grid.rows() {
        lines.push(horizontal_line(grid, y, Direction::Top));
        lines.push(vertical_line(grid, y));
    }
    lines.push(horizontal_line(grid, last_row, Direction::Bottom));
    lines.iter().join("\n")
}

fn horizontal_line(grid: &Grid, y: usize, side: Direction) -> String {
    let segments = (0..grid.columns())
        .map(|x| {
            if grid.cell(Point::new(y, x)).has_wall(side) {
                "+---"
            } else {
                "+   "
            }
        })
        .join("");
    segments + "+"
}

fn vertical_line(grid: &Grid, y: usize) -> String {
    let segments = (0..grid.columns())
        .map(|x| {
            if grid.cell(Point::new(y, x)).has_wall(Direction::Left) {
                "|   "
            } else {
                "    "
            }
        })
        .join("");
    let last = grid.cell(Point::new(y, grid.columns() - 1));
    segments + if last.has_wall(Direction::Right) { "|" } else { " " }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_generator::{MazeGenerator, Orientation};

    fn standing_walls(grid: &Grid) -> usize {
        grid.cells()
            .map(|(p, cell)| {
                let mut n = [Direction::Top, Direction::Left]
                    .iter()
                    .filter(|d| cell.has_wall(**d))
                    .count();
                if p.x + 1 == grid.columns() && cell.has_wall(Direction::Right) {
                    n += 1;
                }
                if p.y + 1 == grid.rows() && cell.has_wall(Direction::Bottom) {
                    n += 1;
                }
                n
            })
            .sum()
    }

    #[test]
    fn svg_has_one_line_per_wall() {
        let maze = MazeGenerator::new(Some(5)).generate(6, 8).unwrap();
        let doc = to_svg(&maze, &RenderOptions::default()).to_string();

        assert_eq!(doc.matches("<line").count(), standing_walls(maze.grid()));
        assert!(doc.contains("width=\"200\""));
        assert!(doc.contains("height=\"160\""));
        assert!(doc.contains("fill=\"white\""));
    }

    #[test]
    fn svg_uses_render_options() {
        let maze = MazeGenerator::new(Some(5)).generate(2, 3).unwrap();
        let options = RenderOptions {
            cell_size: 10,
            margin: 5,
            stroke_width: 3,
        };
        let doc = to_svg(&maze, &options).to_string();
        assert!(doc.contains("width=\"40\""));
        assert!(doc.contains("height=\"30\""));
        assert!(doc.contains("stroke-width=\"3\""));
    }

    #[test]
    fn text_corridor() {
        for seed in 0..5 {
            let maze = MazeGenerator::new(Some(seed)).generate(1, 3).unwrap();
            let openings = maze.openings();
            assert_eq!(openings.orientation, Orientation::Vertical);

            let border = |gap: usize| {
                (0..3)
                    .map(|x| if x == gap { "+   " } else { "+---" })
                    .join("")
                    + "+"
            };
            let expected = [
                border(openings.entrance),
                "|           |".to_string(),
                border(openings.exit),
            ]
            .join("\n");
            assert_eq!(to_text(&maze), expected);
        }
    }

    #[test]
    fn text_line_widths() {
        let maze = MazeGenerator::new(Some(9)).generate(4, 7).unwrap();
        let text = to_text(&maze);
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().all(|l| l.chars().count() == 29));
    }
}
