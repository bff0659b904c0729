// crates/pixelmap-core/src/color/channel.rs
//
// Channel selection for transcoding between packed colors and audio samples.
//
// Each channel has one codec entry: read a raw value, know its range, write a raw value back.
// Everything else (audio remap, clamping, channel transfer) is derived from that entry,
// so the mapper never switches on the channel itself.

use std::fmt;
use std::str::FromStr;

use crate::color::hsb::{hsb_to_rgb, rgb_to_hsb};
use crate::color::{alpha, blue, clamp_sample, compose_color, green, luminance, map_range, red};
use crate::error::{MapError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    /// HSB brightness, called "L" (lightness) in channel names since "B" is blue.
    Brightness,
    Alpha,
    /// RGB luminance as grayscale.
    All,
}

impl Channel {
    pub const ALL_CHANNELS: [Channel; 8] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Hue,
        Channel::Saturation,
        Channel::Brightness,
        Channel::Alpha,
        Channel::All,
    ];

    #[inline]
    fn codec(self) -> &'static ChannelCodec {
        &CODECS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.codec().name
    }

    /// Upper bound of the raw channel value: 1.0 for H/S/L, 255.0 otherwise.
    pub fn raw_max(self) -> f32 {
        self.codec().raw_max
    }

    /// Raw channel value of `argb`, in [0, raw_max].
    #[inline]
    pub fn extract_raw(self, argb: u32) -> f32 {
        (self.codec().read)(argb)
    }

    /// Channel value of `argb` remapped to the audio range [-1, 1].
    #[inline]
    pub fn extract(self, argb: u32) -> f32 {
        let c = self.codec();
        map_range((c.read)(argb), 0.0, c.raw_max, -1.0, 1.0)
    }

    /// Writes `sample` (audio range, clamped) into this channel of `argb`.
    /// The other channels keep their values; `All` writes a gray RGB and keeps alpha.
    #[inline]
    pub fn apply(self, sample: f32, argb: u32) -> u32 {
        let c = self.codec();
        let raw = map_range(clamp_sample(sample), -1.0, 1.0, 0.0, c.raw_max);
        (c.write)(argb, raw)
    }

    /// Copies this channel of `from` into `to`. `All` copies the whole color.
    #[inline]
    pub fn transfer(self, from: u32, to: u32) -> u32 {
        match self {
            Channel::All => from,
            _ => (self.codec().write)(to, self.extract_raw(from)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        let ch = match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Channel::Red,
            "g" | "green" => Channel::Green,
            "b" | "blue" => Channel::Blue,
            "h" | "hue" => Channel::Hue,
            "s" | "saturation" => Channel::Saturation,
            "l" | "lightness" | "brightness" => Channel::Brightness,
            "a" | "alpha" => Channel::Alpha,
            "all" | "gray" | "grey" => Channel::All,
            other => {
                return Err(MapError::Validation(format!("unknown channel: {other}")));
            }
        };
        Ok(ch)
    }
}

struct ChannelCodec {
    name: &'static str,
    raw_max: f32,
    read: fn(u32) -> f32,
    /// (color, raw value in [0, raw_max]) -> color
    write: fn(u32, f32) -> u32,
}

// Indexed by `Channel as usize`; order must follow the enum.
static CODECS: [ChannelCodec; 8] = [
    ChannelCodec { name: "R", raw_max: 255.0, read: read_red, write: write_red },
    ChannelCodec { name: "G", raw_max: 255.0, read: read_green, write: write_green },
    ChannelCodec { name: "B", raw_max: 255.0, read: read_blue, write: write_blue },
    ChannelCodec { name: "H", raw_max: 1.0, read: read_hue, write: write_hue },
    ChannelCodec { name: "S", raw_max: 1.0, read: read_saturation, write: write_saturation },
    ChannelCodec { name: "L", raw_max: 1.0, read: read_brightness, write: write_brightness },
    ChannelCodec { name: "A", raw_max: 255.0, read: read_alpha, write: write_alpha },
    ChannelCodec { name: "ALL", raw_max: 255.0, read: luminance, write: write_gray },
];

#[inline]
fn byte(raw: f32) -> u8 {
    raw.round().clamp(0.0, 255.0) as u8
}

fn read_red(c: u32) -> f32 {
    red(c) as f32
}

fn read_green(c: u32) -> f32 {
    green(c) as f32
}

fn read_blue(c: u32) -> f32 {
    blue(c) as f32
}

fn read_alpha(c: u32) -> f32 {
    alpha(c) as f32
}

fn read_hue(c: u32) -> f32 {
    rgb_to_hsb(c)[0]
}

fn read_saturation(c: u32) -> f32 {
    rgb_to_hsb(c)[1]
}

fn read_brightness(c: u32) -> f32 {
    rgb_to_hsb(c)[2]
}

fn write_red(c: u32, raw: f32) -> u32 {
    compose_color(byte(raw), green(c), blue(c), alpha(c))
}

fn write_green(c: u32, raw: f32) -> u32 {
    compose_color(red(c), byte(raw), blue(c), alpha(c))
}

fn write_blue(c: u32, raw: f32) -> u32 {
    compose_color(red(c), green(c), byte(raw), alpha(c))
}

fn write_alpha(c: u32, raw: f32) -> u32 {
    compose_color(red(c), green(c), blue(c), byte(raw))
}

fn write_gray(c: u32, raw: f32) -> u32 {
    let v = byte(raw);
    compose_color(v, v, v, alpha(c))
}

fn write_hsb(c: u32, hsb: [f32; 3]) -> u32 {
    // hsb_to_rgb is opaque; put the original alpha back
    (hsb_to_rgb(hsb[0], hsb[1], hsb[2]) & 0x00FF_FFFF) | (c & 0xFF00_0000)
}

fn write_hue(c: u32, raw: f32) -> u32 {
    let [_, s, b] = rgb_to_hsb(c);
    write_hsb(c, [raw, s, b])
}

fn write_saturation(c: u32, raw: f32) -> u32 {
    let [h, _, b] = rgb_to_hsb(c);
    write_hsb(c, [h, raw, b])
}

fn write_brightness(c: u32, raw: f32) -> u32 {
    let [h, s, _] = rgb_to_hsb(c);
    write_hsb(c, [h, s, raw])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{compose_rgb, MID_GRAY};

    #[test]
    fn codec_table_follows_enum_order() {
        let names: Vec<&str> = Channel::ALL_CHANNELS.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["R", "G", "B", "H", "S", "L", "A", "ALL"]);
    }

    #[test]
    fn byte_channels_touch_only_their_byte() {
        let c = compose_color(10, 20, 30, 40);
        assert_eq!(Channel::Red.apply(1.0, c), compose_color(255, 20, 30, 40));
        assert_eq!(Channel::Green.apply(-1.0, c), compose_color(10, 0, 30, 40));
        assert_eq!(Channel::Blue.apply(1.0, c), compose_color(10, 20, 255, 40));
        assert_eq!(Channel::Alpha.apply(1.0, c), compose_color(10, 20, 30, 255));
    }

    #[test]
    fn extract_endpoints() {
        let white = compose_rgb(255, 255, 255);
        assert_eq!(Channel::Red.extract(white), 1.0);
        assert_eq!(Channel::Brightness.extract(white), 1.0);
        assert_eq!(Channel::Saturation.extract(white), -1.0);
        assert!((Channel::All.extract(white) - 1.0).abs() < 1e-5);
        assert_eq!(Channel::Alpha.extract(compose_color(0, 0, 0, 0)), -1.0);
    }

    #[test]
    fn brightness_roundtrip_on_mid_gray() {
        for k in 0..=20 {
            let v = -1.0 + k as f32 * 0.1;
            let c = Channel::Brightness.apply(v, MID_GRAY);
            let back = Channel::Brightness.extract(c);
            assert!((back - v).abs() <= 1.0 / 255.0 + 1e-6, "v={v} back={back}");
        }
    }

    #[test]
    fn hsb_writes_keep_alpha() {
        let c = compose_color(200, 40, 40, 17);
        assert_eq!(alpha(Channel::Hue.apply(0.0, c)), 17);
        assert_eq!(alpha(Channel::Saturation.apply(0.0, c)), 17);
        assert_eq!(alpha(Channel::All.apply(0.0, c)), 17);
    }

    #[test]
    fn transfer_copies_one_channel() {
        let from = compose_color(1, 2, 3, 4);
        let to = compose_color(100, 110, 120, 130);
        assert_eq!(Channel::Green.transfer(from, to), compose_color(100, 2, 120, 130));
        assert_eq!(Channel::All.transfer(from, to), from);
    }

    #[test]
    fn parses_names() {
        assert_eq!("L".parse::<Channel>().unwrap(), Channel::Brightness);
        assert_eq!("blue".parse::<Channel>().unwrap(), Channel::Blue);
        assert_eq!("ALL".parse::<Channel>().unwrap(), Channel::All);
        assert!("x".parse::<Channel>().is_err());
    }
}
