// crates/pixelmap-cli/src/cmd/coords.rs

use clap::{Args, ValueEnum};

use crate::cmd::common::GenArgs;
use crate::io::text;

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CoordsFmt {
    /// "pos x y" per line
    Text,
    /// {"pos":N,"x":N,"y":N} per line
    Jsonl,
}

#[derive(Args, Debug)]
pub struct CoordsArgs {
    #[command(flatten)]
    pub gen: GenArgs,

    #[arg(long, value_enum, default_value_t = CoordsFmt::Text)]
    pub fmt: CoordsFmt,

    /// Only the first N steps
    #[arg(long)]
    pub limit: Option<usize>,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: CoordsArgs) -> anyhow::Result<()> {
    let gen = args.gen.build()?;
    let coords = gen.coords();
    let n = args.limit.map_or(coords.len(), |l| l.min(coords.len()));

    let body = match args.fmt {
        CoordsFmt::Text => text::coords_text(&coords[..n]),
        CoordsFmt::Jsonl => text::coords_jsonl(&coords[..n]),
    };
    text::write_out(args.out.as_deref(), &body)?;

    if let Some(out) = args.out.as_deref() {
        eprintln!("coords = {} of {} -> {}", n, coords.len(), out);
    }
    Ok(())
}
