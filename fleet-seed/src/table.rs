use crate::error::SeedError;
use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// A record that can be written as one row of a flat file.
pub trait Table {
    /// Column names, in output order.
    const HEADER: &'static [&'static str];

    /// Field values in the same order as [`HEADER`](Table::HEADER).
    /// Null fields are empty strings.
    fn fields(&self) -> Vec<String>;
}

/// Quotes a field only if it would otherwise break the row.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_line<W: Write, S: AsRef<str>>(out: &mut W, fields: &[S]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        out.write_all(escape(field.as_ref()).as_bytes())?;
    }
    out.write_all(b"\r\n")
}

/// Writes the header row followed by one row per record.
pub fn write_rows<W: Write, T: Table>(out: &mut W, rows: &[T]) -> io::Result<()> {
    write_line(out, T::HEADER)?;
    for row in rows {
        write_line(out, &row.fields())?;
    }
    Ok(())
}

/// Replaces the file at `path` with `rows`.
///
/// The file is truncated first; a failure part way through leaves it partially
/// written.
pub fn write_table<T: Table>(path: &Path, rows: &[T]) -> Result<(), SeedError> {
    let io_err = |source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_rows(&mut out, rows).map_err(io_err)?;
    out.flush().map_err(io_err)
}
