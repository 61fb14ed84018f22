//! File-to-file conversion: decode an image, write its array literal.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::decode::{decode_file, DecodeError};
use crate::literal::{write_literal, LiteralError, LiteralOptions};

/// Input image read when no path is given.
pub const DEFAULT_INPUT: &str = "input.png";

/// Output text file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Errors from a whole conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Could not create {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write literal to {path}: {source}")]
    Literal {
        path: PathBuf,
        #[source]
        source: LiteralError,
    },
}

/// What a successful conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub width: u32,
    pub height: u32,
    pub bytes_written: u64,
}

/// Decode `input` and write its literal to `output`.
///
/// An existing `output` is overwritten. The image is decoded and the options
/// checked before the output is created, so those failures leave it
/// untouched. A failure while streaming may leave a truncated file.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &LiteralOptions,
) -> Result<ConvertSummary, ConvertError> {
    let literal_err = |source| ConvertError::Literal {
        path: output.to_path_buf(),
        source,
    };

    let grid = decode_file(input)?;
    let (width, height) = grid.dimensions();
    info!("Decoded {} ({}x{})", input.display(), width, height);

    if grid.is_empty() {
        return Err(literal_err(LiteralError::EmptyImage { width, height }));
    }
    options.validate().map_err(literal_err)?;

    let file = File::create(output).map_err(|source| ConvertError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = CountingWriter::new(BufWriter::new(file));

    write_literal(&grid, options, &mut writer).map_err(literal_err)?;
    writer
        .flush()
        .map_err(|e| literal_err(LiteralError::Io(e)))?;

    let bytes_written = writer.count;
    info!("Wrote {} bytes to {}", bytes_written, output.display());

    Ok(ConvertSummary {
        width,
        height,
        bytes_written,
    })
}

struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
