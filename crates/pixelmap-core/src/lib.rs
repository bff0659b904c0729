pub mod error;
pub mod validate;

pub mod color;
pub mod gen;
pub mod mapper;

pub use crate::color::channel::Channel;
pub use crate::error::{MapError, Result};
pub use crate::gen::{build_gen, Coord, GenKind, PixelMap, PixelMapGen};
pub use crate::mapper::{PixelAudioMapper, Rect};
