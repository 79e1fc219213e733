//! Plain text storage of a spline's dots.
//!
//! Every dot is stored on its own line as five space separated numbers:
//!
//! ```text
//! x y tension bias continuity
//! ```
//!
//! Reading stops at the first empty line or at the end of the input.
//! A malformed line aborts the whole read, so callers never see a partially loaded spline.
//!
//! ```
//! use tcbspline::{format, Dot, Spline};
//!
//! let mut spline = Spline::new();
//! spline.add(Dot::with_params(1.5, -2.0, 0.5, 0.0, -0.25));
//! let text = format::to_string(&spline);
//! assert_eq!(text, "1.5 -2 0.5 0 -0.25\n");
//! assert_eq!(format::parse(&text).unwrap(), spline);
//! ```

use log::info;
use smallvec::SmallVec;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::dot::Dot;
use crate::error::{Field, FormatError, Result};
use crate::spline::Spline;

/// File extension conventionally used for spline files
pub const EXTENSION: &str = "spline";

/// Parses a single line into a dot.
///
/// `line` is the 1-based line number used in errors.
pub fn parse_dot(line: usize, text: &str) -> std::result::Result<Dot, FormatError> {
    let fields: SmallVec<[&str; 5]> = text.split(' ').collect();
    if fields.len() != Field::ALL.len() {
        return Err(FormatError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    Ok(Dot::with_params(
        parse_field(line, Field::X, fields[0])?,
        parse_field(line, Field::Y, fields[1])?,
        parse_field(line, Field::Tension, fields[2])?,
        parse_field(line, Field::Bias, fields[3])?,
        parse_field(line, Field::Continuity, fields[4])?,
    ))
}

fn parse_field<T: FromStr>(
    line: usize,
    field: Field,
    value: &str,
) -> std::result::Result<T, FormatError> {
    value.parse().map_err(|_| FormatError::InvalidField {
        line,
        field,
        value: value.to_owned(),
    })
}

/// Parses a whole spline from text.
pub fn parse(text: &str) -> std::result::Result<Spline, FormatError> {
    text.lines()
        .take_while(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| parse_dot(i + 1, line))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Spline::from_dots)
}

/// Reads a spline from `reader`.
///
/// I/O failures are reported as [`Error::Io`](crate::Error::Io), malformed text as
/// [`Error::Format`](crate::Error::Format).
pub fn read<R: BufRead>(reader: R) -> Result<Spline> {
    let mut dots = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        dots.push(parse_dot(i + 1, &line)?);
    }
    Ok(Spline::from_dots(dots))
}

/// Writes a single dot as one line, including the line break.
pub fn write_dot<W: Write>(mut writer: W, dot: &Dot) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {} {} {}",
        dot.x(),
        dot.y(),
        dot.tension,
        dot.bias,
        dot.continuity
    )
}

/// Writes all of `spline`'s dots to `writer`.
pub fn write<W: Write>(mut writer: W, spline: &Spline) -> io::Result<()> {
    for dot in spline.dots() {
        write_dot(&mut writer, dot)?;
    }
    writer.flush()
}

/// Formats all of `spline`'s dots as text.
pub fn to_string(spline: &Spline) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec can't fail
    let _ = write(&mut buffer, spline);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Loads a spline from the file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Spline> {
    let path = path.as_ref();
    let spline = read(BufReader::new(File::open(path)?))?;
    info!("Loaded {} dots from {}", spline.len(), path.display());
    Ok(spline)
}

/// Saves `spline` to the file at `path`, replacing its previous content.
pub fn save(path: impl AsRef<Path>, spline: &Spline) -> Result<()> {
    let path = path.as_ref();
    write(BufWriter::new(File::create(path)?), spline)?;
    info!("Saved {} dots to {}", spline.len(), path.display());
    Ok(())
}
