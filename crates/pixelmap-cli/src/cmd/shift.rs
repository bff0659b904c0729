// crates/pixelmap-cli/src/cmd/shift.rs

use anyhow::bail;
use clap::Args;
use pixelmap_core::PixelAudioMapper;

use crate::cmd::common::GenArgs;
use crate::io::raw;

#[derive(Args, Debug)]
pub struct ShiftArgs {
    #[command(flatten)]
    pub gen: GenArgs,

    /// Input image (LE u32 ARGB, row-major)
    #[arg(long)]
    pub r#in: String,

    #[arg(long)]
    pub out: String,

    /// Steps to move along the traversal; negative moves the other way
    #[arg(long, allow_negative_numbers = true)]
    pub pixels: isize,
}

pub fn run(args: ShiftArgs) -> anyhow::Result<()> {
    let gen = args.gen.build()?;
    let mapper = PixelAudioMapper::new(&*gen);

    let mut img = raw::read_u32_file(&args.r#in)?;
    if img.len() != mapper.size() {
        bail!("image has {} pixels, traversal has {}", img.len(), mapper.size());
    }
    mapper.shift_pixels(&mut img, args.pixels)?;
    let crc = raw::write_bytes_file(&args.out, &raw::u32_bytes(&img))?;

    eprintln!("--- shift ---");
    eprintln!("gen    = {}", gen.kind());
    eprintln!("pixels = {}", args.pixels);
    eprintln!("out    = {}", args.out);
    eprintln!("crc32  = {:08x}", crc);
    Ok(())
}
