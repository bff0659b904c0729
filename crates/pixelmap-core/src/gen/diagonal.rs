// crates/pixelmap-core/src/gen/diagonal.rs
//
// Diagonal zigzag over any rectangle >= 2x2. A single direction flag drives the walk:
// step diagonally, and on reaching an edge take one axis step and reverse.

use log::debug;

use crate::error::{MapError, Result};
use crate::gen::{Coord, GenKind, PixelMap, PixelMapGen};

pub const DESCRIPTION: &str = "DiagonalZigzagGen generates a diagonal zigzag scan over a \
     rectangular bitmap of any width and height >= 2, starting at (0, 0) and ending at \
     (width - 1, height - 1). There is no power-of-2 restriction.";

/// Diagonal zigzag traversal of a `width` x `height` rectangle.
pub fn diagonal_coords(width: usize, height: usize) -> Vec<Coord> {
    let mut out = Vec::with_capacity(width * height);
    let (mut x, mut y) = (0usize, 0usize);
    let mut moving_up = false;

    while x < width && y < height {
        out.push(Coord::new(x, y));
        if moving_up {
            if x == width - 1 {
                y += 1;
                moving_up = false;
            } else if y == 0 {
                x += 1;
                moving_up = false;
            } else {
                x += 1;
                y -= 1;
            }
        } else if y == height - 1 {
            x += 1;
            moving_up = true;
        } else if x == 0 {
            y += 1;
            moving_up = true;
        } else {
            x -= 1;
            y += 1;
        }
    }
    out
}

#[derive(Clone, Debug)]
pub struct DiagonalZigzagGen {
    map: PixelMap,
}

impl DiagonalZigzagGen {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if !Self::validate(width, height) {
            return Err(MapError::Validation(format!(
                "diagonal: width and height must be >= 2, got {width}x{height}"
            )));
        }
        let map = PixelMap::from_coords(width, height, diagonal_coords(width, height))?;
        debug!("diagonal: {}x{} size={}", width, height, map.size());
        Ok(DiagonalZigzagGen { map })
    }

    pub fn validate(width: usize, height: usize) -> bool {
        width >= 2 && height >= 2
    }
}

impl PixelMapGen for DiagonalZigzagGen {
    fn describe(&self) -> &'static str {
        DESCRIPTION
    }

    fn validate(&self, width: usize, height: usize) -> bool {
        DiagonalZigzagGen::validate(width, height)
    }

    fn generate(&mut self) -> Result<&[usize]> {
        let (w, h) = (self.map.width(), self.map.height());
        self.map = PixelMap::from_coords(w, h, diagonal_coords(w, h))?;
        Ok(self.map.signal_to_image())
    }

    fn map(&self) -> &PixelMap {
        &self.map
    }

    fn kind(&self) -> GenKind {
        GenKind::DiagonalZigzag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_strip() {
        let got: Vec<(usize, usize)> = diagonal_coords(4, 2).iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            got,
            [(0, 0), (0, 1), (1, 0), (2, 0), (1, 1), (2, 1), (3, 0), (3, 1)]
        );
    }

    #[test]
    fn square_matches_zigzag() {
        let sq = crate::gen::zigzag::zigzag_coords(5);
        assert_eq!(diagonal_coords(5, 5), sq);
    }

    #[test]
    fn rejects_thin() {
        assert!(DiagonalZigzagGen::new(1, 5).is_err());
        assert!(DiagonalZigzagGen::new(5, 1).is_err());
        assert!(DiagonalZigzagGen::new(2, 9).is_ok());
    }
}
