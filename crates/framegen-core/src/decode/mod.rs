//! Image decoding for framegen.
//!
//! This module turns an image file (PNG in practice, JPEG is also compiled in)
//! into a [`PixelGrid`]: a read-only grid of 8-bit (R, G, B) triples.
//!
//! All operations are synchronous and single-threaded.

mod reader;
mod types;

pub use reader::{decode_file, decode_image};
pub use types::{DecodeError, PixelGrid};
