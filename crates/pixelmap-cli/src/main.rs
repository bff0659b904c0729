// crates/pixelmap-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "pixelmap-cli")]
#[command(about = "Pixel <-> signal traversal maps (Hilbert, Moore, zigzag)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe a generator and its dimensions
    Describe(cmd::describe::DescribeArgs),

    /// Print the traversal coordinates (text or jsonl)
    Coords(cmd::coords::CoordsArgs),

    /// Inspect a traversal (LUT id, bijection, max step, closed loop)
    Inspect(cmd::inspect::InspectArgs),

    /// Transcode a raw image (LE u32 ARGB) to a raw signal (LE f32) or back
    Transcode(cmd::transcode::TranscodeArgs),

    /// Rotate a raw image along the traversal
    Shift(cmd::shift::ShiftArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Describe(args) => cmd::describe::run(args),
        Commands::Coords(args) => cmd::coords::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Transcode(args) => cmd::transcode::run(args),
        Commands::Shift(args) => cmd::shift::run(args),
    }
}
