// crates/pixelmap-core/src/color/hsb.rs
//
// RGB <-> HSB (hue, saturation, brightness), all three components in [0, 1].
// Hue wraps: only its fractional part is used when converting back.

use crate::color::{blue, compose_rgb, green, red};

/// [hue, saturation, brightness] of the RGB part of `argb`. Alpha is ignored.
pub fn rgb_to_hsb(argb: u32) -> [f32; 3] {
    let (r, g, b) = (red(argb) as f32, green(argb) as f32, blue(argb) as f32);
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = cmax / 255.0;
    let saturation = if cmax > 0.0 { (cmax - cmin) / cmax } else { 0.0 };

    if saturation == 0.0 {
        return [0.0, 0.0, brightness];
    }

    let span = cmax - cmin;
    let redc = (cmax - r) / span;
    let greenc = (cmax - g) / span;
    let bluec = (cmax - b) / span;

    let mut hue = if r == cmax {
        bluec - greenc
    } else if g == cmax {
        2.0 + redc - bluec
    } else {
        4.0 + greenc - redc
    };
    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    [hue, saturation, brightness]
}

/// Opaque color from HSB. Saturation and brightness are clamped to [0, 1].
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> u32 {
    let s = saturation.clamp(0.0, 1.0);
    let v = brightness.clamp(0.0, 1.0);

    if s == 0.0 {
        let c = to_byte(v);
        return compose_rgb(c, c, c);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    compose_rgb(to_byte(r), to_byte(g), to_byte(b))
}

#[inline]
fn to_byte(unit: f32) -> u8 {
    (unit * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}
