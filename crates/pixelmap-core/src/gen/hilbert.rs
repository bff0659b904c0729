// crates/pixelmap-core/src/gen/hilbert.rs
//
// Hilbert curve over a 2^depth x 2^depth raster, starting at (0, 0) and ending at (side-1, 0).
//
// The bit-peeling loops only visit the `depth` bits of each coordinate. Orientation is the
// same at every depth, so a deeper curve extends a shallower one.

use log::debug;

use crate::error::{MapError, Result};
use crate::gen::{Coord, GenKind, PixelMap, PixelMapGen};
use crate::validate::{find_power_of_two, is_power_of_two, side_for_depth};

pub const DESCRIPTION: &str = "HilbertGen generates a Hilbert curve over a square bitmap \
     starting at (0, 0) and ending at (width - 1, 0). Width and height must be equal powers of 2. \
     HilbertGen::new(depth) sets width and height to 2^depth.";

/// Rotate/flip a quadrant.
#[inline(always)]
fn rot(s: usize, x: &mut usize, y: &mut usize, rx: usize, ry: usize) {
    if ry == 0 {
        if rx == 1 {
            *x = s - 1 - *x;
            *y = s - 1 - *y;
        }
        std::mem::swap(x, y);
    }
}

fn walk_to(side: usize, index: usize) -> Coord {
    let (mut x, mut y) = (0usize, 0usize);
    let mut t = index;
    let mut s = 1usize;
    while s < side {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        rot(s, &mut x, &mut y, rx, ry);
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    Coord::new(x, y)
}

/// Coordinate of traversal step `index` on the depth-`depth` curve.
/// `None` when the depth is too large for a usize cell count or `index` is past the last step.
pub fn d2xy(depth: u32, index: usize) -> Option<Coord> {
    let side = side_for_depth(depth).ok()?;
    if index >= side * side {
        return None;
    }
    Some(walk_to(side, index))
}

/// Traversal step of cell (x, y) on the depth-`depth` curve.
/// `None` when the depth is too large or (x, y) lies outside the raster.
pub fn xy2d(depth: u32, x: usize, y: usize) -> Option<usize> {
    let side = side_for_depth(depth).ok()?;
    if x >= side || y >= side {
        return None;
    }
    let (mut x, mut y) = (x, y);
    let mut d = 0usize;
    let mut s = side / 2;
    while s > 0 {
        let rx = usize::from((x & s) > 0);
        let ry = usize::from((y & s) > 0);
        d += s * s * ((3 * rx) ^ ry);
        // x, y < side, so the mirror cannot underflow
        rot(side, &mut x, &mut y, rx, ry);
        s /= 2;
    }
    Some(d)
}

pub(crate) fn hilbert_coords(depth: u32) -> Vec<Coord> {
    let side = 1usize << depth;
    (0..side * side).map(|i| walk_to(side, i)).collect()
}

#[derive(Clone, Debug)]
pub struct HilbertGen {
    depth: u32,
    map: PixelMap,
}

impl HilbertGen {
    /// Curve of the given recursion depth; width = height = 2^depth.
    pub fn new(depth: u32) -> Result<Self> {
        let side = side_for_depth(depth)?;
        Self::with_size(side, side)
    }

    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        if !Self::validate(width, height) {
            return Err(MapError::Validation(format!(
                "hilbert: width and height must be equal powers of 2 >= 2, got {width}x{height}"
            )));
        }
        let depth = find_power_of_two(width)?;
        let map = PixelMap::from_coords(width, height, hilbert_coords(depth))?;
        debug!("hilbert: depth={} size={}", depth, map.size());
        Ok(HilbertGen { depth, map })
    }

    pub fn validate(width: usize, height: usize) -> bool {
        width >= 2 && width == height && is_power_of_two(width)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Traversal step of (x, y) on this curve, following any symmetry transforms applied.
    pub fn lookup(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.map.width() || y >= self.map.height() {
            return None;
        }
        Some(self.map.image_to_signal()[x + self.map.width() * y])
    }

    /// Mirrors every x coordinate.
    pub fn flip_x(&mut self) -> Result<()> {
        let m = self.map.width() - 1;
        self.relabel(|c| Coord::new(m - c.x, c.y))
    }

    /// Mirrors every y coordinate.
    pub fn flip_y(&mut self) -> Result<()> {
        let m = self.map.height() - 1;
        self.relabel(|c| Coord::new(c.x, m - c.y))
    }

    /// Exchanges the roles of x and y.
    pub fn swap_coords(&mut self) -> Result<()> {
        self.relabel(|c| Coord::new(c.y, c.x))
    }

    /// Moves the traversal start `offset` steps along the curve (negative moves it back).
    pub fn rotate_left(&mut self, offset: isize) -> Result<()> {
        let mut coords = self.map.coords().to_vec();
        crate::mapper::shift::rotate_left(&mut coords, offset);
        self.map = PixelMap::from_coords(self.map.width(), self.map.height(), coords)?;
        Ok(())
    }

    fn relabel(&mut self, f: impl Fn(Coord) -> Coord) -> Result<()> {
        let coords = self.map.coords().iter().map(|&c| f(c)).collect();
        self.map = PixelMap::from_coords(self.map.width(), self.map.height(), coords)?;
        Ok(())
    }
}

impl PixelMapGen for HilbertGen {
    fn describe(&self) -> &'static str {
        DESCRIPTION
    }

    fn validate(&self, width: usize, height: usize) -> bool {
        HilbertGen::validate(width, height)
    }

    fn generate(&mut self) -> Result<&[usize]> {
        let side = self.map.width();
        self.map = PixelMap::from_coords(side, side, hilbert_coords(self.depth))?;
        Ok(self.map.signal_to_image())
    }

    fn map(&self) -> &PixelMap {
        &self.map
    }

    fn kind(&self) -> GenKind {
        GenKind::Hilbert
    }
}
