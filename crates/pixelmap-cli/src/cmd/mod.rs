// crates/pixelmap-cli/src/cmd/mod.rs

pub mod common;

pub mod coords;
pub mod describe;
pub mod inspect;
pub mod shift;
pub mod transcode;
