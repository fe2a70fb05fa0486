#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sparse_life::{Config, Generation, Record};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Guess from the file extension: `.csv`, `.json`, anything else is text
    Auto,
    Text,
    Csv,
    Record,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Render,
    Csv,
    Record,
}

/// Conway's Game of Life on an unbounded grid.
#[derive(Parser)]
#[command(name = "sparse_life")]
struct Args {
    /// Pattern file; standard input when omitted.
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "auto")]
    format: Format,

    /// Start from a named pattern instead of a file.
    #[arg(long, conflicts_with_all = ["input", "random"])]
    pattern: Option<String>,

    /// Start from a random square soup with this side length.
    #[arg(long, conflicts_with = "input")]
    random: Option<u16>,

    #[arg(long, default_value_t = 0.3)]
    fill_rate: f64,

    #[arg(long)]
    seed: Option<u64>,

    /// Number of generations to advance.
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    steps: i64,

    #[arg(long, value_enum, default_value = "render")]
    output: Output,

    #[arg(long, default_value_t = Config::LIVE_CHAR)]
    live: char,

    #[arg(long, default_value_t = Config::DEAD_CHAR)]
    dead: char,
}

fn load(args: &Args) -> Result<Generation> {
    if let Some(name) = &args.pattern {
        return Ok(Generation::from_pattern(name)?);
    }
    if let Some(side) = args.random {
        return Ok(Generation::random(side, side, args.fill_rate, args.seed)?);
    }

    let (data, format) = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let format = match args.format {
                Format::Auto => match path.extension().and_then(|ext| ext.to_str()) {
                    Some("csv") => Format::Csv,
                    Some("json") => Format::Record,
                    _ => Format::Text,
                },
                format => format,
            };
            (data, format)
        }
        None => {
            let data = std::io::read_to_string(std::io::stdin())
                .context("failed to read standard input")?;
            (data, args.format)
        }
    };

    let life = match format {
        Format::Auto | Format::Text => Generation::parse_text(&data),
        Format::Csv => Generation::from_csv(data.lines())?,
        Format::Record => Generation::from_record(&Record::from_json(&data)?)?,
    };
    Ok(life)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let timer = Instant::now();
    let mut life = load(&args)?;
    log::info!(
        "Time on loading {} live cells: {:?}",
        life.count(),
        timer.elapsed()
    );

    let timer = Instant::now();
    life.advance(args.steps)?;
    log::info!(
        "Time on update to generation {}: {:?}",
        life.generation(),
        timer.elapsed()
    );

    match args.output {
        Output::Render => println!("{}", life.render(args.live, args.dead)),
        Output::Csv => {
            for line in life.to_csv() {
                println!("{line}");
            }
        }
        Output::Record => println!("{}", life.to_record().to_json()?),
    }
    Ok(())
}
