// crates/pixelmap-cli/src/cmd/transcode.rs

use anyhow::bail;
use clap::{Args, ValueEnum};
use pixelmap_core::color::MID_GRAY;
use pixelmap_core::{Channel, PixelAudioMapper};

use crate::cmd::common::{ChannelArg, GenArgs};
use crate::io::raw;

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum Direction {
    /// Image (LE u32 ARGB, row-major) -> signal (LE f32, traversal order)
    Img2sig,
    /// Signal -> image
    Sig2img,
}

#[derive(Args, Debug)]
pub struct TranscodeArgs {
    #[command(flatten)]
    pub gen: GenArgs,

    /// Input raw buffer
    #[arg(long)]
    pub r#in: String,

    /// Output raw buffer
    #[arg(long)]
    pub out: String,

    #[arg(long, value_enum)]
    pub dir: Direction,

    #[arg(long, value_enum, default_value_t = ChannelArg::All)]
    pub channel: ChannelArg,

    /// Same index on both sides, no traversal reordering
    #[arg(long, default_value_t = false)]
    pub direct: bool,

    /// sig2img only: image whose other channels are kept (default: opaque mid gray)
    #[arg(long)]
    pub base: Option<String>,
}

pub fn run(args: TranscodeArgs) -> anyhow::Result<()> {
    let gen = args.gen.build()?;
    let mapper = PixelAudioMapper::new(&*gen);
    let channel = Channel::from(args.channel);
    let n = mapper.size();

    let (count, crc) = match args.dir {
        Direction::Img2sig => {
            if args.base.is_some() {
                bail!("--base only applies to --dir sig2img");
            }
            let img = raw::read_u32_file(&args.r#in)?;
            if img.len() != n {
                bail!("image has {} pixels, traversal has {}", img.len(), n);
            }
            let mut sig = vec![0.0f32; n];
            if args.direct {
                mapper.write_img_to_sig(&img, &mut sig, channel)?;
            } else {
                mapper.map_img_to_sig(&img, &mut sig, channel)?;
            }
            (n, raw::write_bytes_file(&args.out, &raw::f32_bytes(&sig))?)
        }
        Direction::Sig2img => {
            let sig = raw::read_f32_file(&args.r#in)?;
            if sig.len() != n {
                bail!("signal has {} samples, traversal has {}", sig.len(), n);
            }
            let mut img = match args.base.as_deref() {
                Some(path) => raw::read_u32_file(path)?,
                None => vec![MID_GRAY; n],
            };
            if args.direct {
                mapper.write_sig_to_img(&sig, &mut img, channel)?;
            } else {
                mapper.map_sig_to_img(&sig, &mut img, channel)?;
            }
            (n, raw::write_bytes_file(&args.out, &raw::u32_bytes(&img))?)
        }
    };

    eprintln!("--- transcode ---");
    eprintln!("gen     = {}", gen.kind());
    eprintln!("dir     = {:?}", args.dir);
    eprintln!("channel = {}", channel);
    eprintln!("direct  = {}", args.direct);
    eprintln!("values  = {}", count);
    eprintln!("out     = {}", args.out);
    eprintln!("crc32   = {:08x}", crc);
    Ok(())
}
