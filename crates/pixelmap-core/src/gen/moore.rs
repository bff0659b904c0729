// crates/pixelmap-core/src/gen/moore.rs
//
// Moore curve: four Hilbert curves of depth-1 (side m = side/2) laid out so the path closes.
//
//   Q1 (x <  m, y <  m): (m-1-hy, hx)           starts at (m-1, 0)
//   Q2 (x <  m, y >= m): Q1 shifted down by m
//   Q3 (x >= m, y >= m): (hy+m, m-1-hx+m)
//   Q4 (x >= m, y <  m): (hy+m, m-1-hx)         ends at (m, 0)

use log::debug;

use crate::error::{MapError, Result};
use crate::gen::hilbert::hilbert_coords;
use crate::gen::{Coord, GenKind, PixelMap, PixelMapGen};
use crate::validate::{find_power_of_two, is_power_of_two, side_for_depth};

pub const DESCRIPTION: &str = "MooreGen generates a Moore curve over a square bitmap starting at \
     (width/2 - 1, 0) and ending at (width/2, 0), so the path is a closed loop. \
     Width and height must be equal powers of 2, at least 4. \
     MooreGen::new(depth) sets width and height to 2^depth and requires depth >= 2.";

pub const MIN_DEPTH: u32 = 2;

/// Moore traversal of a 2^depth square, built from the depth-1 Hilbert curve.
pub fn moore_coords(depth: u32) -> Vec<Coord> {
    let half = hilbert_coords(depth - 1);
    let m = 1usize << (depth - 1);

    let mut out = Vec::with_capacity(half.len() * 4);
    out.extend(half.iter().map(|h| Coord::new(m - 1 - h.y, h.x)));
    out.extend(half.iter().map(|h| Coord::new(m - 1 - h.y, h.x + m)));
    out.extend(half.iter().map(|h| Coord::new(h.y + m, m - 1 - h.x + m)));
    out.extend(half.iter().map(|h| Coord::new(h.y + m, m - 1 - h.x)));
    out
}

#[derive(Clone, Debug)]
pub struct MooreGen {
    depth: u32,
    map: PixelMap,
}

impl MooreGen {
    pub fn new(depth: u32) -> Result<Self> {
        if depth < MIN_DEPTH {
            return Err(MapError::Validation(format!(
                "moore: depth must be >= {MIN_DEPTH}, got {depth}"
            )));
        }
        let side = side_for_depth(depth)?;
        Self::with_size(side, side)
    }

    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        if !Self::validate(width, height) {
            return Err(MapError::Validation(format!(
                "moore: width and height must be equal powers of 2 >= 4, got {width}x{height}"
            )));
        }
        let depth = find_power_of_two(width)?;
        let map = PixelMap::from_coords(width, height, moore_coords(depth))?;
        debug!("moore: depth={} size={}", depth, map.size());
        Ok(MooreGen { depth, map })
    }

    pub fn validate(width: usize, height: usize) -> bool {
        width >= 4 && width == height && is_power_of_two(width)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl PixelMapGen for MooreGen {
    fn describe(&self) -> &'static str {
        DESCRIPTION
    }

    fn validate(&self, width: usize, height: usize) -> bool {
        MooreGen::validate(width, height)
    }

    fn generate(&mut self) -> Result<&[usize]> {
        let side = self.map.width();
        self.map = PixelMap::from_coords(side, side, moore_coords(self.depth))?;
        Ok(self.map.signal_to_image())
    }

    fn map(&self) -> &PixelMap {
        &self.map
    }

    fn kind(&self) -> GenKind {
        GenKind::Moore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth2_path() {
        let g = MooreGen::new(2).unwrap();
        let expect = [
            (1, 0), (0, 0), (0, 1), (1, 1),
            (1, 2), (0, 2), (0, 3), (1, 3),
            (2, 3), (3, 3), (3, 2), (2, 2),
            (2, 1), (3, 1), (3, 0), (2, 0),
        ];
        let got: Vec<(usize, usize)> = g.coords().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(got, expect);
    }

    #[test]
    fn closed_and_local() {
        for depth in 2..=6 {
            let g = MooreGen::new(depth).unwrap();
            assert_eq!(g.map().max_step(), 1, "depth={depth}");
            assert!(g.map().is_closed(), "depth={depth}");
        }
    }

    #[test]
    fn rejects_shallow_depth_and_bad_sizes() {
        assert!(matches!(MooreGen::new(1), Err(MapError::Validation(_))));
        assert!(MooreGen::new(0).is_err());
        assert!(MooreGen::with_size(2, 2).is_err());
        assert!(MooreGen::with_size(12, 12).is_err());
        assert!(MooreGen::with_size(8, 16).is_err());
        assert!(MooreGen::validate(16, 16));
    }
}
