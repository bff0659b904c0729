// crates/pixelmap-core/src/gen/zigzag.rs
//
// Square zigzag over anti-diagonals, JPEG-style: 2*order - 1 passes, each diagonal
// walked in the opposite direction of the one before.

use log::debug;

use crate::error::{MapError, Result};
use crate::gen::{Coord, GenKind, PixelMap, PixelMapGen};

pub const DESCRIPTION: &str = "ZigzagGen generates a zigzag scan over the anti-diagonals of a \
     square bitmap, starting at (0, 0) and ending at (width - 1, height - 1). \
     Width and height must be equal. ZigzagGen::new(order) sets both to order.";

/// Zigzag traversal of an `order` x `order` square.
pub fn zigzag_coords(order: usize) -> Vec<Coord> {
    let d = order;
    let mut out = Vec::with_capacity(d * d);

    // rising half: diagonals of length 1..=d
    for n in 1..=d {
        for i in 0..n {
            let c = if n % 2 == 0 {
                Coord::new(i, n - 1 - i)
            } else {
                Coord::new(n - 1 - i, i)
            };
            out.push(c);
        }
    }
    // falling half: diagonal lengths d-1 down to 1, numbered n = d+1..2d-1
    for n in d + 1..2 * d {
        let len = 2 * d - n;
        for i in 0..len {
            let c = if n % 2 == 0 {
                Coord::new(i + n - d, d - 1 - i)
            } else {
                Coord::new(d - 1 - i, i + n - d)
            };
            out.push(c);
        }
    }
    out
}

#[derive(Clone, Debug)]
pub struct ZigzagGen {
    map: PixelMap,
}

impl ZigzagGen {
    pub fn new(order: usize) -> Result<Self> {
        if !Self::validate(order, order) {
            return Err(MapError::Validation(format!(
                "zigzag: order must be >= 1, got {order}"
            )));
        }
        let map = PixelMap::from_coords(order, order, zigzag_coords(order))?;
        debug!("zigzag: order={} size={}", order, map.size());
        Ok(ZigzagGen { map })
    }

    pub fn validate(width: usize, height: usize) -> bool {
        width >= 1 && width == height
    }

    pub fn order(&self) -> usize {
        self.map.width()
    }
}

impl PixelMapGen for ZigzagGen {
    fn describe(&self) -> &'static str {
        DESCRIPTION
    }

    fn validate(&self, width: usize, height: usize) -> bool {
        ZigzagGen::validate(width, height)
    }

    fn generate(&mut self) -> Result<&[usize]> {
        let d = self.order();
        self.map = PixelMap::from_coords(d, d, zigzag_coords(d))?;
        Ok(self.map.signal_to_image())
    }

    fn map(&self) -> &PixelMap {
        &self.map
    }

    fn kind(&self) -> GenKind {
        GenKind::Zigzag
    }
}
