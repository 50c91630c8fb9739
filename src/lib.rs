//! Generate perfect rectangular mazes and draw them as SVG
//!
//! Passages are carved by randomized depth-first search, so every cell is
//! connected to every other cell by exactly one path. The entrance and exit
//! are placed on opposite borders, never directly across from each other.
//!
//! # Examples
//! ```
//! use dfs_maze::{render, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(2024));
//! let maze = gen.generate(8, 12).unwrap();
//!
//! let document = render::to_svg(&maze, &render::RenderOptions::default());
//! assert!(document.to_string().contains("<line"));
//! println!("{}", render::to_text(&maze));
//! ```

pub mod grid;
pub mod maze_generator;
pub mod render;

pub use grid::{Cell, Direction, Grid, Point};
pub use maze_generator::{Maze, MazeGenerator, Openings, Orientation};
