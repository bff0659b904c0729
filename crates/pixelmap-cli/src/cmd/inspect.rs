// crates/pixelmap-cli/src/cmd/inspect.rs

use clap::Args;
use pixelmap_core::PixelMap;

use crate::cmd::common::GenArgs;

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub gen: GenArgs,
}

/// Both tables invert each other and cover 0..n.
fn is_bijection(map: &PixelMap) -> bool {
    let s2i = map.signal_to_image();
    let i2s = map.image_to_signal();
    s2i.len() == i2s.len()
        && s2i.iter().enumerate().all(|(i, &p)| i2s.get(p) == Some(&i))
        && i2s.iter().enumerate().all(|(p, &i)| s2i.get(i) == Some(&p))
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let gen = args.gen.build()?;
    let map = gen.map();
    let first = map.coords()[0];
    let last = map.coords()[map.size() - 1];

    eprintln!("--- inspect ---");
    eprintln!("gen       = {}", gen.kind());
    eprintln!("width     = {}", map.width());
    eprintln!("height    = {}", map.height());
    eprintln!("size      = {}", map.size());
    eprintln!("lut_id    = {}", map.lut_id_hex());
    eprintln!("bijection = {}", is_bijection(map));
    eprintln!("max_step  = {}", map.max_step());
    eprintln!("closed    = {}", map.is_closed());
    eprintln!("first     = ({}, {})", first.x, first.y);
    eprintln!("last      = ({}, {})", last.x, last.y);

    if map.max_step() > 1 && gen.kind().uses_depth() {
        eprintln!("WARNING: curve has a step longer than one cell (should never happen)");
    }
    Ok(())
}
