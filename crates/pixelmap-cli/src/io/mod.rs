// crates/pixelmap-cli/src/io/mod.rs

pub mod raw;
pub mod text;
