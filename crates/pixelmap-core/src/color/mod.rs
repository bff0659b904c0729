// crates/pixelmap-core/src/color/mod.rs
//
// Packed ARGB colors: alpha<<24 | red<<16 | green<<8 | blue.
// Everything here is plain bit arithmetic; HSB lives in `hsb`, channel codecs in `channel`.

pub mod channel;
pub mod hsb;

/// Luminosity weights used for the grayscale ("All") channel.
pub const GRAY_WEIGHTS: [f32; 3] = [0.30, 0.59, 0.11];

/// Opaque middle gray, the fill color for fresh images.
pub const MID_GRAY: u32 = compose_rgb(127, 127, 127);

#[inline]
pub const fn compose_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Opaque color from r, g, b.
#[inline]
pub const fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_color(r, g, b, 255)
}

#[inline]
pub const fn red(argb: u32) -> u8 {
    (argb >> 16) as u8
}

#[inline]
pub const fn green(argb: u32) -> u8 {
    (argb >> 8) as u8
}

#[inline]
pub const fn blue(argb: u32) -> u8 {
    argb as u8
}

#[inline]
pub const fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// [r, g, b, a]
pub const fn rgba_components(argb: u32) -> [u8; 4] {
    [red(argb), green(argb), blue(argb), alpha(argb)]
}

/// Luminance in [0.0, 255.0], unrounded.
#[inline]
pub fn luminance(argb: u32) -> f32 {
    GRAY_WEIGHTS[0] * red(argb) as f32
        + GRAY_WEIGHTS[1] * green(argb) as f32
        + GRAY_WEIGHTS[2] * blue(argb) as f32
}

/// Luminance rounded to a byte.
#[inline]
pub fn grayscale(argb: u32) -> u8 {
    luminance(argb).round().clamp(0.0, 255.0) as u8
}

/// RGB from `rgb`, alpha from `mask`.
#[inline]
pub const fn apply_alpha_from(rgb: u32, mask: u32) -> u32 {
    (mask & 0xFF00_0000) | (rgb & 0x00FF_FFFF)
}

/// "color(r, g, b, a)"
pub fn color_string(argb: u32) -> String {
    let [r, g, b, a] = rgba_components(argb);
    format!("color({r}, {g}, {b}, {a})")
}

/// Processing-style linear remap, no clamping.
#[inline]
pub fn map_range(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

#[inline]
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + f * (b - a)
}

/// Audio sample in [-1, 1] to a byte in [0, 255]. Out-of-range samples are clamped.
#[inline]
pub fn sample_to_byte(sample: f32) -> u8 {
    let s = clamp_sample(sample);
    map_range(s, -1.0, 1.0, 0.0, 255.0).round() as u8
}

/// Byte in [0, 255] to an audio sample in [-1, 1].
#[inline]
pub fn byte_to_sample(v: u8) -> f32 {
    map_range(v as f32, 0.0, 255.0, -1.0, 1.0)
}

/// Keep a sample inside the audio range; NaN becomes silence.
#[inline]
pub fn clamp_sample(sample: f32) -> f32 {
    if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_layout() {
        let c = compose_color(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c, 0x7812_3456);
        assert_eq!((red(c), green(c), blue(c), alpha(c)), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(rgba_components(c), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn grayscale_weights() {
        assert_eq!(grayscale(compose_rgb(255, 255, 255)), 255);
        assert_eq!(grayscale(compose_rgb(0, 0, 0)), 0);
        assert_eq!(grayscale(compose_rgb(100, 0, 0)), 30);
        assert_eq!(grayscale(compose_rgb(0, 100, 0)), 59);
        assert_eq!(grayscale(compose_rgb(0, 0, 100)), 11);
    }

    #[test]
    fn sample_byte_edges() {
        assert_eq!(sample_to_byte(-1.0), 0);
        assert_eq!(sample_to_byte(1.0), 255);
        assert_eq!(sample_to_byte(7.5), 255);
        assert_eq!(sample_to_byte(-3.0), 0);
        assert_eq!(byte_to_sample(0), -1.0);
        assert_eq!(byte_to_sample(255), 1.0);
    }

    #[test]
    fn alpha_mask_and_string() {
        let c = apply_alpha_from(compose_rgb(1, 2, 3), 0x4000_0000);
        assert_eq!(alpha(c), 0x40);
        assert_eq!(color_string(c), "color(1, 2, 3, 64)");
    }
}
