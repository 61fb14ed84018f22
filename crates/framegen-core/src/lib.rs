//! framegen core - PNG frame to C array literal
//!
//! This crate decodes an image into a grid of RGB triples and serializes the
//! grid as a `[W][H][3]` array initializer for embedding in C sources, for
//! example LED matrix animation frames on a microcontroller.

pub mod convert;
pub mod decode;
pub mod literal;

pub use convert::{convert_file, ConvertError, ConvertSummary, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use decode::{decode_file, decode_image, DecodeError, PixelGrid};
pub use literal::{render_literal, write_literal, LiteralError, LiteralOptions, OuterBound};
