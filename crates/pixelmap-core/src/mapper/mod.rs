// crates/pixelmap-core/src/mapper/mod.rs
//
// PixelAudioMapper: moves values between an image (packed ARGB, row-major) and a
// signal (f32 samples, traversal order) through a generator's lookup tables.
//
//   signal index i  <->  image index signal_to_image[i]
//
// The mapper owns copies of the tables and nothing else. Callers own the arrays.
// Every public call checks lengths and ranges first, so an Err means nothing was written.

pub mod shift;
pub mod subarray;

use log::debug;

use crate::color::channel::Channel;
use crate::error::{MapError, Result};
use crate::gen::{Coord, GenKind, PixelMap, PixelMapGen};
use crate::validate::{check_coord, check_len};

pub use shift::{rotate_left, rotate_right, ShiftArray};
pub use subarray::Rect;

#[derive(Clone, Debug)]
pub struct PixelAudioMapper {
    width: usize,
    height: usize,
    len: usize,
    kind: Option<GenKind>,
    signal_to_image: Vec<usize>,
    image_to_signal: Vec<usize>,
    coords: Vec<Coord>,
}

impl PixelAudioMapper {
    /// Copies the tables of an already generated traversal.
    pub fn new(gen: &dyn PixelMapGen) -> Self {
        let mut m = Self::from_pixel_map(gen.map());
        m.kind = Some(gen.kind());
        debug!("mapper: {} {}x{}", gen.kind(), m.width, m.height);
        m
    }

    /// Mapper over any validated traversal, e.g. a shuffled one.
    pub fn from_pixel_map(map: &PixelMap) -> Self {
        Self {
            width: map.width(),
            height: map.height(),
            len: map.size(),
            kind: None,
            signal_to_image: map.signal_to_image().to_vec(),
            image_to_signal: map.image_to_signal().to_vec(),
            coords: map.coords().to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.len
    }

    /// Generator kind the tables came from; `None` for a custom traversal.
    pub fn kind(&self) -> Option<GenKind> {
        self.kind
    }

    pub fn pixel_map(&self) -> &[usize] {
        &self.signal_to_image
    }

    pub fn pixel_map_copy(&self) -> Vec<usize> {
        self.signal_to_image.clone()
    }

    pub fn sample_map(&self) -> &[usize] {
        &self.image_to_signal
    }

    pub fn sample_map_copy(&self) -> Vec<usize> {
        self.image_to_signal.clone()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn coords_copy(&self) -> Vec<Coord> {
        self.coords.clone()
    }

    // ---- lookups ----

    /// Traversal position of raster cell (x, y).
    pub fn signal_pos(&self, x: usize, y: usize) -> Result<usize> {
        check_coord(x, y, self.width, self.height)?;
        Ok(self.image_to_signal[x + y * self.width])
    }

    /// Raster index visited at traversal position `pos`.
    pub fn image_index(&self, pos: usize) -> Result<usize> {
        self.signal_to_image
            .get(pos)
            .copied()
            .ok_or_else(|| self.pos_error(pos))
    }

    /// Raster coordinate visited at traversal position `pos`.
    pub fn coord_at(&self, pos: usize) -> Result<Coord> {
        self.coords
            .get(pos)
            .copied()
            .ok_or_else(|| self.pos_error(pos))
    }

    fn pos_error(&self, pos: usize) -> MapError {
        MapError::Bounds(format!("position {pos} outside size {}", self.len))
    }

    fn check_image(&self, img: &[u32]) -> Result<()> {
        check_len("image", img.len(), self.len)
    }

    fn check_signal(&self, sig: &[f32]) -> Result<()> {
        check_len("signal", sig.len(), self.len)
    }

    // ---- full transcodes ----

    /// Writes each sample into `channel` of the pixel it maps to.
    /// `Channel::All` writes gray; other channels keep the rest of the pixel.
    pub fn map_sig_to_img(&self, sig: &[f32], img: &mut [u32], channel: Channel) -> Result<()> {
        self.check_signal(sig)?;
        self.check_image(img)?;
        for (&s, &p) in sig.iter().zip(&self.signal_to_image) {
            img[p] = channel.apply(s, img[p]);
        }
        Ok(())
    }

    /// Reads `channel` of each pixel into the sample at its traversal position.
    pub fn map_img_to_sig(&self, img: &[u32], sig: &mut [f32], channel: Channel) -> Result<()> {
        self.check_image(img)?;
        self.check_signal(sig)?;
        for (s, &p) in sig.iter_mut().zip(&self.signal_to_image) {
            *s = channel.extract(img[p]);
        }
        Ok(())
    }

    /// Like `map_sig_to_img` but index for index, without the lookup table.
    pub fn write_sig_to_img(&self, sig: &[f32], img: &mut [u32], channel: Channel) -> Result<()> {
        self.check_signal(sig)?;
        self.check_image(img)?;
        for (c, &s) in img.iter_mut().zip(sig) {
            *c = channel.apply(s, *c);
        }
        Ok(())
    }

    /// Like `map_img_to_sig` but index for index, without the lookup table.
    pub fn write_img_to_sig(&self, img: &[u32], sig: &mut [f32], channel: Channel) -> Result<()> {
        self.check_image(img)?;
        self.check_signal(sig)?;
        for (s, &c) in sig.iter_mut().zip(img) {
            *s = channel.extract(c);
        }
        Ok(())
    }

    /// Raw (un-remapped) channel values of `img` in raster order.
    pub fn pull_raw_channel(&self, img: &[u32], channel: Channel) -> Result<Vec<f32>> {
        self.check_image(img)?;
        Ok(img.iter().map(|&c| channel.extract_raw(c)).collect())
    }

    // ---- shifting ----

    /// Rotates `sig` left by `d` along the traversal and maps it into `channel` of `img`.
    pub fn shift_signal(
        &self,
        img: &mut [u32],
        sig: &mut [f32],
        d: isize,
        channel: Channel,
    ) -> Result<()> {
        self.check_image(img)?;
        self.check_signal(sig)?;
        rotate_left(sig, d);
        self.map_sig_to_img(sig, img, channel)
    }

    /// Moves every pixel `d` steps back along the traversal (the pixel at step d lands on step 0).
    pub fn shift_pixels(&self, img: &mut [u32], d: isize) -> Result<()> {
        self.check_image(img)?;
        let mut along: Vec<u32> = self.signal_to_image.iter().map(|&p| img[p]).collect();
        rotate_left(&mut along, d);
        for (&c, &p) in along.iter().zip(&self.signal_to_image) {
            img[p] = c;
        }
        Ok(())
    }
}
