// crates/pixelmap-core/src/validate.rs
//
// Shared checks for generator dimensions and mapper call arguments.
// Every check runs before any write so a failed call leaves caller arrays untouched.

use crate::error::{MapError, Result};

pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Exponent `k` such that `2^k == n`.
pub fn find_power_of_two(n: usize) -> Result<u32> {
    if !is_power_of_two(n) {
        return Err(MapError::Validation(format!(
            "expected a positive power of 2, got {n}"
        )));
    }
    Ok(n.trailing_zeros())
}

/// Largest power of two strictly less than `n`.
pub fn nearest_power_of_two_below(n: usize) -> Result<usize> {
    if n <= 1 {
        return Err(MapError::Validation(format!(
            "no power of 2 below {n}"
        )));
    }
    // floor(log2(n - 1)): the highest bit of n - 1
    Ok(1usize << (usize::BITS - 1 - (n - 1).leading_zeros()))
}

/// Side length `2^depth`, rejecting depths that overflow a usize cell count.
pub fn side_for_depth(depth: u32) -> Result<usize> {
    // n = side * side must fit in usize
    if depth >= usize::BITS / 2 {
        return Err(MapError::Validation(format!("depth {depth} is too large")));
    }
    Ok(1usize << depth)
}

pub fn check_len(what: &str, got: usize, want: usize) -> Result<()> {
    if got != want {
        return Err(MapError::Bounds(format!(
            "{what}: length {got} does not match mapper size {want}"
        )));
    }
    Ok(())
}

/// `src` must hold exactly `len` values.
pub fn check_source(what: &str, got: usize, len: usize) -> Result<()> {
    if got != len {
        return Err(MapError::Bounds(format!(
            "{what}: need exactly {len} values, source has {got}"
        )));
    }
    Ok(())
}

/// A run `pos..pos+len` must lie inside an array of `n` values.
pub fn check_run(pos: usize, len: usize, n: usize) -> Result<()> {
    let end = pos
        .checked_add(len)
        .ok_or_else(|| MapError::Bounds("run: position overflow".into()))?;
    if end > n {
        return Err(MapError::Bounds(format!(
            "run: pos={pos} len={len} extends past size {n}"
        )));
    }
    Ok(())
}

/// Raster coordinate (x, y) must be a cell of a `width` x `height` grid.
pub fn check_coord(x: usize, y: usize, width: usize, height: usize) -> Result<()> {
    if x >= width || y >= height {
        return Err(MapError::Bounds(format!(
            "coord: ({x}, {y}) outside {width}x{height}"
        )));
    }
    Ok(())
}

/// Rectangle (x, y, w, h) must lie inside a `width` x `height` raster.
pub fn check_rect(
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    width: usize,
    height: usize,
) -> Result<()> {
    let right = x.checked_add(w);
    let bottom = y.checked_add(h);
    match (right, bottom) {
        (Some(r), Some(b)) if r <= width && b <= height => Ok(()),
        _ => Err(MapError::Bounds(format!(
            "rect: x={x} y={y} w={w} h={h} outside {width}x{height}"
        ))),
    }
}
