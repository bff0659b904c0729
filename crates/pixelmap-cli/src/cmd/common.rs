// crates/pixelmap-cli/src/cmd/common.rs
//
// Arguments shared by every subcommand: which generator, and how big.

use anyhow::bail;
use clap::{Args, ValueEnum};
use pixelmap_core::gen::{HilbertGen, MooreGen};
use pixelmap_core::{build_gen, Channel, GenKind, PixelMapGen};

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum GenArg {
    /// Hilbert curve, square power-of-2 side
    Hilbert,
    /// Moore curve (closed Hilbert loop), square power-of-2 side >= 4
    Moore,
    /// Square anti-diagonal zigzag
    Zigzag,
    /// Diagonal zigzag over any rectangle >= 2x2
    Diagonal,
}

impl From<GenArg> for GenKind {
    fn from(g: GenArg) -> Self {
        match g {
            GenArg::Hilbert => GenKind::Hilbert,
            GenArg::Moore => GenKind::Moore,
            GenArg::Zigzag => GenKind::Zigzag,
            GenArg::Diagonal => GenKind::DiagonalZigzag,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ChannelArg {
    R,
    G,
    B,
    H,
    S,
    /// HSB brightness
    L,
    A,
    /// Grayscale luminance
    All,
}

impl From<ChannelArg> for Channel {
    fn from(c: ChannelArg) -> Self {
        match c {
            ChannelArg::R => Channel::Red,
            ChannelArg::G => Channel::Green,
            ChannelArg::B => Channel::Blue,
            ChannelArg::H => Channel::Hue,
            ChannelArg::S => Channel::Saturation,
            ChannelArg::L => Channel::Brightness,
            ChannelArg::A => Channel::Alpha,
            ChannelArg::All => Channel::All,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenArgs {
    /// Traversal generator
    #[arg(long = "gen", value_enum, default_value_t = GenArg::Hilbert)]
    pub generator: GenArg,

    /// Recursion depth for hilbert/moore (side = 2^depth). Overrides --width/--height.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Raster width
    #[arg(long)]
    pub width: Option<usize>,

    /// Raster height (defaults to --width)
    #[arg(long)]
    pub height: Option<usize>,
}

impl GenArgs {
    pub fn build(&self) -> anyhow::Result<Box<dyn PixelMapGen>> {
        let gen: Box<dyn PixelMapGen> = match (self.generator, self.depth) {
            (GenArg::Hilbert, Some(depth)) => Box::new(HilbertGen::new(depth)?),
            (GenArg::Moore, Some(depth)) => Box::new(MooreGen::new(depth)?),
            (GenArg::Zigzag | GenArg::Diagonal, Some(_)) => {
                bail!("--depth only applies to hilbert and moore; use --width/--height")
            }
            (kind, None) => {
                let (w, h) = self.dims()?;
                build_gen(kind.into(), w, h)?
            }
        };
        log::info!("built {} {}x{}", gen.kind(), gen.width(), gen.height());
        Ok(gen)
    }

    fn dims(&self) -> anyhow::Result<(usize, usize)> {
        let Some(w) = self.width else {
            bail!("need --width (or --depth for hilbert/moore)");
        };
        Ok((w, self.height.unwrap_or(w)))
    }
}
