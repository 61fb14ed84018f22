//! C array literal serialization.
//!
//! A [`PixelGrid`](crate::decode::PixelGrid) of width W and height H is
//! written as a `[W][H][3]` nested initializer: one group per column, one
//! `{r, g, b}` triple per row inside each group.
//!
//! # Examples
//!
//! ```ignore
//! use framegen_core::decode::PixelGrid;
//! use framegen_core::literal::{render_literal, LiteralOptions};
//!
//! let grid = PixelGrid::from_raw(1, 1, vec![10, 20, 30]).unwrap();
//! let text = render_literal(&grid, &LiteralOptions::default()).unwrap();
//! assert_eq!(text, "byte snek[1][1][3] = {{{10, 20, 30}}};");
//! ```

mod options;
mod writer;

use thiserror::Error;

pub use options::{LiteralOptions, OuterBound};
pub use writer::{header, render_literal, write_literal};

/// Errors that can occur while serializing a grid.
#[derive(Debug, Error)]
pub enum LiteralError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    EmptyImage { width: u32, height: u32 },

    /// Array name or element type is not a C identifier
    #[error("Not a valid C identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The underlying writer failed
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered text was not valid UTF-8
    #[error("Rendered literal is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}
