// crates/pixelmap-core/src/gen/mod.rs
//
// Traversal generators: each produces an ordered list of raster cells (the traversal)
// and the two inverse lookup tables between traversal order and row-major order.
//
//   signal_to_image[i] = x + width * y  of traversal step i
//   image_to_signal[signal_to_image[i]] == i

pub mod diagonal;
pub mod hilbert;
pub mod moore;
pub mod zigzag;

use std::fmt;
use std::str::FromStr;

use crate::error::{MapError, Result};

pub use crate::validate::{find_power_of_two, is_power_of_two, nearest_power_of_two_below};
pub use diagonal::DiagonalZigzagGen;
pub use hilbert::HilbertGen;
pub use moore::MooreGen;
pub use zigzag::ZigzagGen;

const LUT_ID_MAGIC: &[u8; 4] = b"PXM1";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index in a raster of the given width.
    #[inline]
    pub const fn index(self, width: usize) -> usize {
        self.x + width * self.y
    }

    /// |dx| + |dy|; 1 means the cells share an edge.
    #[inline]
    pub fn step_distance(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A complete traversal of a `width` x `height` raster.
///
/// Only the validating constructors build one, so every `PixelMap` is a bijection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMap {
    width: usize,
    height: usize,
    coords: Vec<Coord>,
    signal_to_image: Vec<usize>,
    image_to_signal: Vec<usize>,
}

impl PixelMap {
    /// Builds both LUTs from an ordered coordinate list.
    /// Fails unless the list visits every cell exactly once.
    pub fn from_coords(width: usize, height: usize, coords: Vec<Coord>) -> Result<Self> {
        let size = checked_size(width, height)?;
        if coords.len() != size {
            return Err(MapError::Validation(format!(
                "pixelmap: {} coords for a {}x{} raster",
                coords.len(),
                width,
                height
            )));
        }

        let mut signal_to_image = Vec::with_capacity(size);
        let mut image_to_signal = vec![usize::MAX; size];
        for (i, c) in coords.iter().enumerate() {
            if c.x >= width || c.y >= height {
                return Err(MapError::Validation(format!(
                    "pixelmap: step {} at ({}, {}) is outside {}x{}",
                    i, c.x, c.y, width, height
                )));
            }
            let p = c.index(width);
            if image_to_signal[p] != usize::MAX {
                return Err(MapError::Validation(format!(
                    "pixelmap: cell ({}, {}) visited twice (steps {} and {})",
                    c.x, c.y, image_to_signal[p], i
                )));
            }
            image_to_signal[p] = i;
            signal_to_image.push(p);
        }

        Ok(PixelMap {
            width,
            height,
            coords,
            signal_to_image,
            image_to_signal,
        })
    }

    /// Adopts an arbitrary signal-to-image permutation (e.g. a shuffled order).
    pub fn from_signal_lut(width: usize, height: usize, lut: Vec<usize>) -> Result<Self> {
        if width == 0 {
            return Err(MapError::Validation("pixelmap: width must be > 0".into()));
        }
        let coords = lut
            .iter()
            .map(|&p| Coord::new(p % width, p / width))
            .collect();
        Self::from_coords(width, height, coords)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.signal_to_image.len()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn signal_to_image(&self) -> &[usize] {
        &self.signal_to_image
    }

    pub fn image_to_signal(&self) -> &[usize] {
        &self.image_to_signal
    }

    /// Largest step distance between consecutive traversal cells.
    pub fn max_step(&self) -> usize {
        self.coords
            .windows(2)
            .map(|w| w[0].step_distance(w[1]))
            .max()
            .unwrap_or(0)
    }

    /// True when the last cell is edge-adjacent to the first.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(a), Some(b)) if self.coords.len() > 2 => a.step_distance(*b) == 1,
            _ => false,
        }
    }

    /// Stable 16-byte id of the dimensions and traversal order.
    pub fn lut_id_16(&self) -> [u8; 16] {
        let mut h = blake3::Hasher::new();
        h.update(LUT_ID_MAGIC);
        h.update(&(self.width as u64).to_le_bytes());
        h.update(&(self.height as u64).to_le_bytes());
        for &p in &self.signal_to_image {
            h.update(&(p as u64).to_le_bytes());
        }
        let hash = h.finalize();
        let mut out = [0u8; 16];
        out.copy_from_slice(&hash.as_bytes()[0..16]);
        out
    }

    pub fn lut_id_hex(&self) -> String {
        self.lut_id_16().iter().map(|b| format!("{b:02x}")).collect()
    }
}

fn checked_size(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(MapError::Validation(format!(
            "pixelmap: empty raster {width}x{height}"
        )));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| MapError::Validation("pixelmap: width*height overflow".into()))
}

/// Contract shared by all traversal generators.
///
/// Concrete generators validate and generate in their constructors, so a value of
/// any implementing type always carries complete tables.
pub trait PixelMapGen {
    /// What the ordering looks like and which dimensions it accepts.
    fn describe(&self) -> &'static str;

    /// Whether this kind of generator accepts `width` x `height`. Pure.
    fn validate(&self, width: usize, height: usize) -> bool;

    /// Rebuilds the canonical coordinates and both LUTs; returns `signal_to_image`.
    fn generate(&mut self) -> Result<&[usize]>;

    fn map(&self) -> &PixelMap;

    fn kind(&self) -> GenKind;

    fn width(&self) -> usize {
        self.map().width()
    }

    fn height(&self) -> usize {
        self.map().height()
    }

    fn size(&self) -> usize {
        self.map().size()
    }

    /// signal_to_image
    fn pixel_map(&self) -> &[usize] {
        self.map().signal_to_image()
    }

    fn pixel_map_copy(&self) -> Vec<usize> {
        self.map().signal_to_image().to_vec()
    }

    /// image_to_signal
    fn sample_map(&self) -> &[usize] {
        self.map().image_to_signal()
    }

    fn sample_map_copy(&self) -> Vec<usize> {
        self.map().image_to_signal().to_vec()
    }

    fn coords(&self) -> &[Coord] {
        self.map().coords()
    }

    fn coords_copy(&self) -> Vec<Coord> {
        self.map().coords().to_vec()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenKind {
    Hilbert,
    Moore,
    Zigzag,
    DiagonalZigzag,
}

impl GenKind {
    pub fn name(self) -> &'static str {
        match self {
            GenKind::Hilbert => "hilbert",
            GenKind::Moore => "moore",
            GenKind::Zigzag => "zigzag",
            GenKind::DiagonalZigzag => "diagonal",
        }
    }

    /// Whether the kind is sized by a single recursion depth (side = 2^depth).
    pub fn uses_depth(self) -> bool {
        matches!(self, GenKind::Hilbert | GenKind::Moore)
    }
}

impl fmt::Display for GenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GenKind {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hilbert" => Ok(GenKind::Hilbert),
            "moore" => Ok(GenKind::Moore),
            "zigzag" => Ok(GenKind::Zigzag),
            "diagonal" | "diagonal-zigzag" => Ok(GenKind::DiagonalZigzag),
            other => Err(MapError::Validation(format!("unknown generator: {other}"))),
        }
    }
}

/// Builds a generator of the given kind for a `width` x `height` raster.
pub fn build_gen(kind: GenKind, width: usize, height: usize) -> Result<Box<dyn PixelMapGen>> {
    let gen: Box<dyn PixelMapGen> = match kind {
        GenKind::Hilbert => Box::new(HilbertGen::with_size(width, height)?),
        GenKind::Moore => Box::new(MooreGen::with_size(width, height)?),
        GenKind::Zigzag => {
            if width != height {
                return Err(MapError::Validation(format!(
                    "zigzag: width and height must be equal, got {width}x{height}"
                )));
            }
            Box::new(ZigzagGen::new(width)?)
        }
        GenKind::DiagonalZigzag => Box::new(DiagonalZigzagGen::new(width, height)?),
    };
    Ok(gen)
}
