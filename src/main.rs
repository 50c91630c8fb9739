//! CLI for maze generation

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use dfs_maze::{
    render::{self, RenderOptions},
    MazeGenerator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output drawing format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Svg,
    Text,
}

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    rows: usize,

    /// Number of columns
    columns: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// File, where to write the maze. Use `-` for stdout.
    #[arg(short, long, default_value = "maze.svg")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Side length of one cell
    #[arg(long, default_value_t = 20)]
    cell_size: usize,

    /// Empty space around the maze
    #[arg(long, default_value_t = 20)]
    margin: usize,

    /// Wall line width
    #[arg(long, default_value_t = 2)]
    stroke_width: usize,

    /// Log more details; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Both dimensions must be positive, and at least one larger than one
    fn validate(&self) -> anyhow::Result<()> {
        if self.rows == 0 || self.columns == 0 {
            bail!("Rows and columns must be positive integers");
        }
        if self.rows < 2 && self.columns < 2 {
            bail!("Either rows or columns must be larger than 1");
        }
        if self.cell_size == 0 {
            bail!("Cell size must be positive");
        }
        Ok(())
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Generate maze, write it out
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    args.validate()?;

    let mut gen = MazeGenerator::new(args.seed);
    let maze = gen.generate(args.rows, args.columns)?;
    info!(rows = args.rows, columns = args.columns, "Generated maze");

    let options = RenderOptions {
        cell_size: args.cell_size,
        margin: args.margin,
        stroke_width: args.stroke_width,
    };
    let to_stdout = args.output.to_str() == Some("-");
    match (args.format, to_stdout) {
        (Format::Svg, false) => render::save_svg(&maze, &options, &args.output)?,
        (Format::Svg, true) => {
            println!("{}", render::to_svg(&maze, &options));
        }
        (Format::Text, false) => {
            std::fs::write(&args.output, render::to_text(&maze) + "\n")
                .with_context(|| format!("Could not write maze to {}", args.output.display()))?;
        }
        (Format::Text, true) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", render::to_text(&maze))?;
        }
    }
    if !to_stdout {
        info!(path = %args.output.display(), "Saved maze");
    }
    Ok(())
}
