//! Reading/writing the count-map text format
//!
//! The format is the ASCII interchange file produced by the fractal
//! generator:
//!
//! ```text
//! width height
//! p00 p01 p02 ...
//! p10 p11 p12 ...
//! ...
//! ```
//!
//! One header line with the image dimensions, then `height` lines of
//! `width` whitespace-separated escape counts. Row 0 is the top image row
//! (the generator flips the Y axis when it writes). Trailing whitespace and
//! blank tail lines are tolerated.

use crate::error::{Error, Result};
use crate::grid::CountMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read a count-map text file into a [`CountMap`]
pub fn read_count_map<P: AsRef<Path>>(path: P) -> Result<CountMap> {
    let file = File::open(path.as_ref())?;
    decode_count_map(BufReader::new(file))
}

/// Read a count map from an in-memory buffer
///
/// Same as [`read_count_map`] but operates on a byte slice instead of a
/// file path.
pub fn read_count_map_from_buffer(data: &[u8]) -> Result<CountMap> {
    decode_count_map(Cursor::new(data))
}

/// Internal: decode a count map from any buffered reader
fn decode_count_map<R: BufRead>(reader: R) -> Result<CountMap> {
    let mut lines = reader.lines().enumerate();

    let (width, height) = match lines.next() {
        Some((_, line)) => parse_header(&line?)?,
        None => {
            return Err(Error::Parse {
                line: 1,
                reason: "empty file, expected 'width height' header".to_string(),
            })
        }
    };

    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let mut data = Vec::with_capacity(width * height);
    let mut rows_read = 0usize;

    for (index, line) in lines {
        let line = line?;
        let line_no = index + 1;

        if line.trim().is_empty() {
            // Blank lines are only valid after the last data row.
            if rows_read == height {
                continue;
            }
            return Err(Error::Parse {
                line: line_no,
                reason: "blank line inside data rows".to_string(),
            });
        }

        if rows_read == height {
            return Err(Error::Parse {
                line: line_no,
                reason: format!("expected {} data rows, found more", height),
            });
        }

        parse_row(&line, line_no, width, &mut data)?;
        rows_read += 1;
    }

    if rows_read != height {
        return Err(Error::Parse {
            line: rows_read + 1,
            reason: format!("expected {} data rows, found {}", height, rows_read),
        });
    }

    CountMap::from_vec(data, height, width)
}

/// Parse the 'width height' header line
fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let (width, height) = match (fields.next(), fields.next(), fields.next()) {
        (Some(w), Some(h), None) => (parse_value(w, 1)?, parse_value(h, 1)?),
        _ => {
            return Err(Error::Parse {
                line: 1,
                reason: format!("expected 'width height' header, got '{}'", line.trim()),
            })
        }
    };
    Ok((width as usize, height as usize))
}

/// Parse one data row of exactly `width` counts into `data`
fn parse_row(line: &str, line_no: usize, width: usize, data: &mut Vec<u32>) -> Result<()> {
    let before = data.len();
    for field in line.split_whitespace() {
        data.push(parse_value(field, line_no)?);
    }

    let got = data.len() - before;
    if got != width {
        return Err(Error::Parse {
            line: line_no,
            reason: format!("expected {} values, got {}", width, got),
        });
    }
    Ok(())
}

fn parse_value(field: &str, line_no: usize) -> Result<u32> {
    field.parse::<u32>().map_err(|_| Error::Parse {
        line: line_no,
        reason: format!("invalid count '{}'", field),
    })
}

/// Write a [`CountMap`] as a count-map text file
///
/// Emits the same format the generator emits, so written maps round-trip
/// through [`read_count_map`].
pub fn write_count_map<P: AsRef<Path>>(map: &CountMap, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    encode_count_map(map, BufWriter::new(file))
}

/// Write a [`CountMap`] into an in-memory buffer
pub fn write_count_map_to_buffer(map: &CountMap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_count_map(map, &mut buf)?;
    Ok(buf)
}

/// Internal: encode a count map into any writer
fn encode_count_map<W: Write>(map: &CountMap, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", map.cols(), map.rows())?;

    let mut line = String::new();
    for row in map.data().rows() {
        line.clear();
        for (i, count) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&count.to_string());
        }
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}
