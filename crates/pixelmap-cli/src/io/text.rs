// crates/pixelmap-cli/src/io/text.rs

use anyhow::Context;
use pixelmap_core::Coord;

/// "pos x y" per line.
pub fn coords_text(coords: &[Coord]) -> String {
    let mut s = String::new();
    for (i, c) in coords.iter().enumerate() {
        s.push_str(&format!("{} {} {}\n", i, c.x, c.y));
    }
    s
}

/// Format: {"pos":N,"x":N,"y":N}
pub fn coords_jsonl(coords: &[Coord]) -> String {
    let mut s = String::new();
    for (i, c) in coords.iter().enumerate() {
        s.push_str(&format!("{{\"pos\":{},\"x\":{},\"y\":{}}}\n", i, c.x, c.y));
    }
    s
}

/// To a file when `path` is set, else stdout.
pub fn write_out(path: Option<&str>, body: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => std::fs::write(p, body).with_context(|| format!("write text: {p}")),
        None => {
            print!("{body}");
            Ok(())
        }
    }
}
