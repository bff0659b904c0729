// crates/pixelmap-core/src/mapper/subarray.rs
//
// Partial reads and writes.
//
//   pluck / plant: a run of `len` steps along the traversal, starting at pos = x + y*width.
//                  Contiguous in the signal, scattered in the image.
//   peel / stamp:  a rectangle in raster coordinates, read and written row by row.
//                  Contiguous rows in the image, scattered in the signal.
//
// Image-side values are packed colors, signal-side values are samples. The `_as_audio`,
// `_from_audio`, `_as_rgb` and `_from_rgb` variants transcode through a channel on the way.

use crate::color::channel::Channel;
use crate::color::{compose_rgb, sample_to_byte};
use crate::error::Result;
use crate::mapper::PixelAudioMapper;
use crate::validate::{check_coord, check_rect, check_run, check_source};

/// Rectangle in raster coordinates: origin (x, y), size w x h.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    pub const fn area(&self) -> usize {
        self.w * self.h
    }
}

/// Opaque gray for a sample.
#[inline]
fn gray_for(sample: f32) -> u32 {
    let v = sample_to_byte(sample);
    compose_rgb(v, v, v)
}

impl PixelAudioMapper {
    /// Start of a traversal run. (x, y) must be a cell; the run must end inside the traversal.
    fn run_start(&self, x: usize, y: usize, len: usize) -> Result<usize> {
        check_coord(x, y, self.width, self.height)?;
        let pos = x + y * self.width;
        check_run(pos, len, self.len)?;
        Ok(pos)
    }

    fn check_rect(&self, r: Rect) -> Result<()> {
        check_rect(r.x, r.y, r.w, r.h, self.width, self.height)
    }

    /// Raster indices of `r`, row by row.
    fn rect_indices(&self, r: Rect) -> impl Iterator<Item = usize> + '_ {
        (r.y..r.y + r.h).flat_map(move |row| {
            let base = row * self.width;
            (r.x..r.x + r.w).map(move |col| base + col)
        })
    }

    // ---- pluck ----

    /// `len` pixels along the traversal from pos = x + y*width.
    pub fn pluck_pixels(&self, img: &[u32], x: usize, y: usize, len: usize) -> Result<Vec<u32>> {
        self.check_image(img)?;
        let pos = self.run_start(x, y, len)?;
        Ok(self.signal_to_image[pos..pos + len]
            .iter()
            .map(|&p| img[p])
            .collect())
    }

    /// Like `pluck_pixels`, transcoding `channel` of each pixel to a sample.
    pub fn pluck_pixels_as_audio(
        &self,
        img: &[u32],
        x: usize,
        y: usize,
        len: usize,
        channel: Channel,
    ) -> Result<Vec<f32>> {
        self.check_image(img)?;
        let pos = self.run_start(x, y, len)?;
        Ok(self.signal_to_image[pos..pos + len]
            .iter()
            .map(|&p| channel.extract(img[p]))
            .collect())
    }

    /// `len` samples from pos = x + y*width.
    pub fn pluck_samples(&self, sig: &[f32], x: usize, y: usize, len: usize) -> Result<Vec<f32>> {
        self.check_signal(sig)?;
        let pos = self.run_start(x, y, len)?;
        Ok(sig[pos..pos + len].to_vec())
    }

    /// Like `pluck_samples`, as opaque gray pixels.
    pub fn pluck_samples_as_rgb(
        &self,
        sig: &[f32],
        x: usize,
        y: usize,
        len: usize,
    ) -> Result<Vec<u32>> {
        self.check_signal(sig)?;
        let pos = self.run_start(x, y, len)?;
        Ok(sig[pos..pos + len].iter().map(|&s| gray_for(s)).collect())
    }

    // ---- plant ----

    /// Writes `sprout` along the traversal from pos = x + y*width.
    pub fn plant_pixels(&self, sprout: &[u32], img: &mut [u32], x: usize, y: usize) -> Result<()> {
        self.check_image(img)?;
        let pos = self.run_start(x, y, sprout.len())?;
        for (&c, &p) in sprout.iter().zip(&self.signal_to_image[pos..]) {
            img[p] = c;
        }
        Ok(())
    }

    /// Copies only `channel` of each `sprout` color into the image.
    pub fn plant_pixels_channel(
        &self,
        sprout: &[u32],
        img: &mut [u32],
        x: usize,
        y: usize,
        channel: Channel,
    ) -> Result<()> {
        self.check_image(img)?;
        let pos = self.run_start(x, y, sprout.len())?;
        for (&c, &p) in sprout.iter().zip(&self.signal_to_image[pos..]) {
            img[p] = channel.transfer(c, img[p]);
        }
        Ok(())
    }

    /// Writes samples into `channel` of the pixels along the traversal.
    pub fn plant_pixels_from_audio(
        &self,
        sprout: &[f32],
        img: &mut [u32],
        x: usize,
        y: usize,
        channel: Channel,
    ) -> Result<()> {
        self.check_image(img)?;
        let pos = self.run_start(x, y, sprout.len())?;
        for (&s, &p) in sprout.iter().zip(&self.signal_to_image[pos..]) {
            img[p] = channel.apply(s, img[p]);
        }
        Ok(())
    }

    /// Copies `sprout` into the signal from pos = x + y*width.
    pub fn plant_samples(&self, sprout: &[f32], sig: &mut [f32], x: usize, y: usize) -> Result<()> {
        self.check_signal(sig)?;
        let pos = self.run_start(x, y, sprout.len())?;
        sig[pos..pos + sprout.len()].copy_from_slice(sprout);
        Ok(())
    }

    /// Transcodes `channel` of each `sprout` color into the signal.
    pub fn plant_samples_from_rgb(
        &self,
        sprout: &[u32],
        sig: &mut [f32],
        x: usize,
        y: usize,
        channel: Channel,
    ) -> Result<()> {
        self.check_signal(sig)?;
        let pos = self.run_start(x, y, sprout.len())?;
        for (s, &c) in sig[pos..pos + sprout.len()].iter_mut().zip(sprout) {
            *s = channel.extract(c);
        }
        Ok(())
    }

    // ---- peel ----

    /// Pixels of `r`, row by row.
    pub fn peel_pixels(&self, img: &[u32], r: Rect) -> Result<Vec<u32>> {
        self.check_image(img)?;
        self.check_rect(r)?;
        Ok(self.rect_indices(r).map(|p| img[p]).collect())
    }

    pub fn peel_pixels_as_audio(&self, img: &[u32], r: Rect, channel: Channel) -> Result<Vec<f32>> {
        self.check_image(img)?;
        self.check_rect(r)?;
        Ok(self.rect_indices(r).map(|p| channel.extract(img[p])).collect())
    }

    /// Samples whose pixels fall in `r`, in the rectangle's row order.
    pub fn peel_samples(&self, sig: &[f32], r: Rect) -> Result<Vec<f32>> {
        self.check_signal(sig)?;
        self.check_rect(r)?;
        Ok(self
            .rect_indices(r)
            .map(|p| sig[self.image_to_signal[p]])
            .collect())
    }

    pub fn peel_samples_as_rgb(&self, sig: &[f32], r: Rect) -> Result<Vec<u32>> {
        self.check_signal(sig)?;
        self.check_rect(r)?;
        Ok(self
            .rect_indices(r)
            .map(|p| gray_for(sig[self.image_to_signal[p]]))
            .collect())
    }

    // ---- stamp ----

    /// Writes `stamp` (r.w * r.h values, row by row) into `r`.
    pub fn stamp_pixels(&self, stamp: &[u32], img: &mut [u32], r: Rect) -> Result<()> {
        self.check_image(img)?;
        self.check_rect(r)?;
        check_source("stamp", stamp.len(), r.area())?;
        for (p, &c) in self.rect_indices(r).zip(stamp) {
            img[p] = c;
        }
        Ok(())
    }

    pub fn stamp_pixels_channel(
        &self,
        stamp: &[u32],
        img: &mut [u32],
        r: Rect,
        channel: Channel,
    ) -> Result<()> {
        self.check_image(img)?;
        self.check_rect(r)?;
        check_source("stamp", stamp.len(), r.area())?;
        for (p, &c) in self.rect_indices(r).zip(stamp) {
            img[p] = channel.transfer(c, img[p]);
        }
        Ok(())
    }

    pub fn stamp_pixels_from_audio(
        &self,
        stamp: &[f32],
        img: &mut [u32],
        r: Rect,
        channel: Channel,
    ) -> Result<()> {
        self.check_image(img)?;
        self.check_rect(r)?;
        check_source("stamp", stamp.len(), r.area())?;
        for (p, &s) in self.rect_indices(r).zip(stamp) {
            img[p] = channel.apply(s, img[p]);
        }
        Ok(())
    }

    /// Writes `stamp` into the samples whose pixels fall in `r`.
    pub fn stamp_samples(&self, stamp: &[f32], sig: &mut [f32], r: Rect) -> Result<()> {
        self.check_signal(sig)?;
        self.check_rect(r)?;
        check_source("stamp", stamp.len(), r.area())?;
        for (p, &s) in self.rect_indices(r).zip(stamp) {
            sig[self.image_to_signal[p]] = s;
        }
        Ok(())
    }

    pub fn stamp_samples_from_rgb(
        &self,
        stamp: &[u32],
        sig: &mut [f32],
        r: Rect,
        channel: Channel,
    ) -> Result<()> {
        self.check_signal(sig)?;
        self.check_rect(r)?;
        check_source("stamp", stamp.len(), r.area())?;
        for (p, &c) in self.rect_indices(r).zip(stamp) {
            sig[self.image_to_signal[p]] = channel.extract(c);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{compose_color, MID_GRAY};
    use crate::error::MapError;
    use crate::gen::{DiagonalZigzagGen, MooreGen};

    fn moore8() -> PixelAudioMapper {
        PixelAudioMapper::new(&MooreGen::new(3).unwrap())
    }

    fn ramp_image(n: usize) -> Vec<u32> {
        (0..n as u32).map(|i| compose_color(i as u8, (i * 3) as u8, (i * 7) as u8, 255)).collect()
    }

    #[test]
    fn pluck_follows_traversal() {
        let m = moore8();
        let img = ramp_image(64);
        let run = m.pluck_pixels(&img, 2, 1, 5).unwrap();
        // pos = 2 + 1*8 = 10
        for (k, &c) in run.iter().enumerate() {
            assert_eq!(c, img[m.image_index(10 + k).unwrap()]);
        }
    }

    #[test]
    fn pluck_past_end_is_bounds_error() {
        let m = moore8();
        let img = ramp_image(64);
        assert!(matches!(m.pluck_pixels(&img, 0, 7, 9), Err(MapError::Bounds(_))));
        assert!(m.pluck_pixels(&img, 0, 7, 8).is_ok());
        assert!(m.pluck_samples(&[0.0; 64], usize::MAX, usize::MAX, 1).is_err());
    }

    #[test]
    fn run_address_must_be_a_cell() {
        let m = moore8();
        let mut img = ramp_image(64);
        let before = img.clone();
        // x = 9 on an 8-wide raster would alias (1, 1)
        assert!(matches!(m.pluck_pixels(&img, 9, 0, 1), Err(MapError::Bounds(_))));
        assert!(m.pluck_pixels(&img, 0, 8, 0).is_err());
        assert!(m.plant_pixels(&[0; 1], &mut img, 8, 0).is_err());
        assert_eq!(img, before);
        assert!(m.pluck_pixels(&img, 7, 0, 1).is_ok());
    }

    #[test]
    fn plant_channel_touches_one_byte() {
        let m = moore8();
        let mut img = vec![compose_color(1, 2, 3, 4); 64];
        let sprout = vec![compose_color(200, 201, 202, 203); 3];
        m.plant_pixels_channel(&sprout, &mut img, 0, 0, Channel::Red).unwrap();
        for pos in 0..64 {
            let c = img[m.image_index(pos).unwrap()];
            let want = if pos < 3 { compose_color(200, 2, 3, 4) } else { compose_color(1, 2, 3, 4) };
            assert_eq!(c, want, "pos={pos}");
        }
    }

    #[test]
    fn samples_and_audio_runs() {
        let m = moore8();
        let mut sig = vec![0.0f32; 64];
        m.plant_samples(&[0.5, -0.5], &mut sig, 6, 0).unwrap();
        assert_eq!(m.pluck_samples(&sig, 6, 0, 2).unwrap(), [0.5, -0.5]);

        let rgb = m.pluck_samples_as_rgb(&sig, 6, 0, 2).unwrap();
        let mut back = vec![0.0f32; 64];
        m.plant_samples_from_rgb(&rgb, &mut back, 6, 0, Channel::Blue).unwrap();
        assert!((back[6] - 0.5).abs() < 0.01);
        assert!((back[7] + 0.5).abs() < 0.01);

        let mut img = vec![MID_GRAY; 64];
        m.plant_pixels_from_audio(&[1.0], &mut img, 0, 0, Channel::Alpha).unwrap();
        let a = m.pluck_pixels_as_audio(&img, 0, 0, 2, Channel::Alpha).unwrap();
        assert_eq!(a, [1.0, 1.0]);
    }

    #[test]
    fn peel_is_raster_order() {
        let m = PixelAudioMapper::new(&DiagonalZigzagGen::new(5, 4).unwrap());
        let img: Vec<u32> = (0..20).collect();
        let r = Rect::new(1, 2, 3, 2);
        assert_eq!(m.peel_pixels(&img, r).unwrap(), [11, 12, 13, 16, 17, 18]);

        let sig: Vec<f32> = (0..20).map(|i| i as f32).collect();
        let got = m.peel_samples(&sig, r).unwrap();
        let want: Vec<f32> = [11, 12, 13, 16, 17, 18]
            .iter()
            .map(|&p| m.sample_map()[p] as f32)
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn stamp_then_peel() {
        let m = moore8();
        let r = Rect::new(5, 6, 3, 2);
        let mut sig = vec![0.0f32; 64];
        let stamp = [0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6];
        m.stamp_samples(&stamp, &mut sig, r).unwrap();
        assert_eq!(m.peel_samples(&sig, r).unwrap(), stamp);
        assert_eq!(sig.iter().filter(|&&s| s != 0.0).count(), 6);

        let mut img = vec![MID_GRAY; 64];
        m.stamp_pixels_from_audio(&stamp, &mut img, r, Channel::Green).unwrap();
        let audio = m.peel_pixels_as_audio(&img, r, Channel::Green).unwrap();
        for (a, b) in audio.iter().zip(&stamp) {
            assert!((a - b).abs() <= 1.0 / 255.0 + 1e-6);
        }
        let gray = m.peel_samples_as_rgb(&sig, r).unwrap();
        m.stamp_pixels(&gray, &mut img, r).unwrap();
        m.stamp_pixels_channel(&gray, &mut img, Rect::new(0, 0, 3, 2), Channel::Red).unwrap();
        let mut from_rgb = vec![0.0f32; 64];
        m.stamp_samples_from_rgb(&gray, &mut from_rgb, r, Channel::All).unwrap();
        for (a, b) in m.peel_samples(&from_rgb, r).unwrap().iter().zip(&stamp) {
            assert!((a - b).abs() < 0.01);
        }
    }

    #[test]
    fn bad_rect_leaves_arrays_untouched() {
        let m = moore8();
        let mut img = vec![MID_GRAY; 64];
        let r = Rect::new(6, 6, 3, 1);
        let err = m.stamp_pixels(&[0; 3], &mut img, r).unwrap_err();
        assert!(matches!(err, MapError::Bounds(_)));
        assert!(img.iter().all(|&c| c == MID_GRAY));

        // short stamp
        assert!(m.stamp_pixels(&[0; 2], &mut img, Rect::new(0, 0, 3, 1)).is_err());
        assert!(img.iter().all(|&c| c == MID_GRAY));
    }

    #[test]
    fn long_stamp_is_rejected() {
        let m = moore8();
        let r = Rect::new(0, 0, 2, 2);
        let mut img = vec![MID_GRAY; 64];
        let err = m.stamp_pixels(&[0; 10], &mut img, r).unwrap_err();
        assert!(matches!(err, MapError::Bounds(_)));
        assert!(img.iter().all(|&c| c == MID_GRAY));

        let mut sig = vec![0.25f32; 64];
        assert!(m.stamp_samples(&[1.0; 5], &mut sig, r).is_err());
        assert!(m.stamp_pixels_from_audio(&[1.0; 5], &mut img, r, Channel::Red).is_err());
        assert!(sig.iter().all(|&s| s == 0.25));
        assert!(m.stamp_samples(&[1.0; 4], &mut sig, r).is_ok());
    }
}
