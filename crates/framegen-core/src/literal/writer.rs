//! Streaming serializer for the `[W][H][3]` array literal.

use std::io::Write;

use log::trace;

use super::{LiteralError, LiteralOptions, OuterBound};
use crate::decode::PixelGrid;

/// Build the declaration header, e.g. `byte snek[4][3][3] = {`.
pub fn header(grid: &PixelGrid, options: &LiteralOptions) -> String {
    let outer = match options.outer_bound {
        OuterBound::Explicit => grid.width().to_string(),
        OuterBound::Inferred => String::new(),
    };
    format!(
        "{} {}[{}][{}][3] = {{",
        options.element_type,
        options.name,
        outer,
        grid.height()
    )
}

/// Stream the literal for `grid` into `writer`.
///
/// Columns (x) form the outer dimension and rows (y) the inner one, so the
/// pixel at `(x, y)` appears as the `y`-th triple of the `x`-th group. Groups
/// are separated by `,\n`, triples by `,` and channels by `, `. The output
/// ends with `};` and no newline.
///
/// # Errors
///
/// Returns `LiteralError::EmptyImage` for a grid with no columns or rows,
/// `LiteralError::InvalidIdentifier` for unusable options, and
/// `LiteralError::Io` if the writer fails. Nothing is written in the first two
/// cases.
pub fn write_literal<W: Write>(
    grid: &PixelGrid,
    options: &LiteralOptions,
    writer: &mut W,
) -> Result<(), LiteralError> {
    let (width, height) = grid.dimensions();
    if grid.is_empty() {
        return Err(LiteralError::EmptyImage { width, height });
    }
    options.validate()?;

    writer.write_all(header(grid, options).as_bytes())?;

    let raw = grid.as_raw();
    let stride = width as usize * 3;

    for x in 0..width {
        writer.write_all(b"{")?;
        for y in 0..height {
            let i = y as usize * stride + x as usize * 3;
            write!(writer, "{{{}, {}, {}}}", raw[i], raw[i + 1], raw[i + 2])?;
            if y + 1 < height {
                writer.write_all(b",")?;
            }
        }
        writer.write_all(b"}")?;
        if x + 1 < width {
            writer.write_all(b",\n")?;
        }
        trace!("Wrote column {}/{}", x + 1, width);
    }

    writer.write_all(b"};")?;
    Ok(())
}

/// Render the literal for `grid` into a `String`.
pub fn render_literal(grid: &PixelGrid, options: &LiteralOptions) -> Result<String, LiteralError> {
    // "{255, 255, 255}," is at most 16 bytes per pixel
    let mut buf = Vec::with_capacity(grid.pixel_count() * 16 + 64);
    write_literal(grid, options, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
