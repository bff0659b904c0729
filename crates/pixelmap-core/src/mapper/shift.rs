// crates/pixelmap-core/src/mapper/shift.rs
//
// In-place rotation by three reversals, and a shift buffer that remembers how far it has moved.

use crate::error::{MapError, Result};

/// Reduce a signed rotation to a left rotation in 0..len.
#[inline]
fn left_amount(len: usize, d: isize) -> usize {
    if len == 0 {
        return 0;
    }
    // rem_euclid keeps negative shifts in 0..len
    d.rem_euclid(len as isize) as usize
}

/// Rotate `arr` left by `d` (element `d` becomes element 0). Negative `d` rotates right.
///
/// Three reversals: `[0, d)`, `[d, len)`, then the whole slice. O(len), no allocation.
pub fn rotate_left<T>(arr: &mut [T], d: isize) {
    let d = left_amount(arr.len(), d);
    reverse3(arr, d);
}

/// Rotate `arr` right by `d`. Negative `d` rotates left.
pub fn rotate_right<T>(arr: &mut [T], d: isize) {
    let len = arr.len();
    // reduce before inverting: -isize::MIN does not exist
    let right = left_amount(len, d);
    reverse3(arr, if right == 0 { 0 } else { len - right });
}

#[inline]
fn reverse3<T>(arr: &mut [T], d: usize) {
    if d == 0 {
        return;
    }
    arr[..d].reverse();
    arr[d..].reverse();
    arr.reverse();
}

/// A backing array that is rotated in place for animation, tracking the net displacement.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftArray<T> {
    data: Vec<T>,
    anim_step: isize,
    /// net signed displacement of counted shifts (left positive)
    pixel_shift: isize,
    /// number of counted `shift_left` minus `shift_right` calls
    shift_step: isize,
}

impl<T> ShiftArray<T> {
    pub fn new(data: Vec<T>, anim_step: isize) -> Self {
        Self {
            data,
            anim_step,
            pixel_shift: 0,
            shift_step: 0,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn anim_step(&self) -> isize {
        self.anim_step
    }

    pub fn set_anim_step(&mut self, step: isize) {
        self.anim_step = step;
    }

    pub fn pixel_shift(&self) -> isize {
        self.pixel_shift
    }

    pub fn shift_step(&self) -> isize {
        self.shift_step
    }

    /// Replaces the contents; the new data must have the same length. Counters are kept.
    pub fn set_data(&mut self, data: Vec<T>) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(MapError::Bounds(format!(
                "shift array: new data has length {}, expected {}",
                data.len(),
                self.data.len()
            )));
        }
        self.data = data;
        Ok(())
    }

    /// Rotate left by `anim_step`.
    pub fn shift_left(&mut self) {
        self.shift(self.anim_step, true);
        self.shift_step += 1;
    }

    /// Rotate right by `anim_step`.
    pub fn shift_right(&mut self) {
        self.shift(self.anim_step.wrapping_neg(), true);
        self.shift_step -= 1;
    }

    /// Rotate left by `d` (right when negative). Only counted shifts move `pixel_shift`,
    /// so an uncounted shift repositions the origin.
    pub fn shift(&mut self, d: isize, counted: bool) {
        rotate_left(&mut self.data, d);
        if counted {
            self.pixel_shift = self.pixel_shift.wrapping_add(d);
        }
    }

    /// Undo every counted shift and zero both counters.
    pub fn reset_shift(&mut self) {
        rotate_right(&mut self.data, self.pixel_shift);
        self.pixel_shift = 0;
        self.shift_step = 0;
    }
}
