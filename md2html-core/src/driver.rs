//! Reader/writer and file drivers
//!
//! Both drivers stream: each line's fragment is written before the next line
//! is read. [`convert_file`] checks the input before it creates the output,
//! so a missing input never truncates an existing output file.

use crate::convert::Converter;
use crate::error::ConvertError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Counters from one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub lines: usize,
    pub bytes_written: usize,
}

/// Convert everything `reader` yields and write the HTML to `writer`.
///
/// Lines keep their terminators. Input that is not valid UTF-8 fails with
/// [`ConvertError::Io`].
pub fn convert<R, W>(mut reader: R, mut writer: W) -> Result<ConversionStats, ConvertError>
where
    R: BufRead,
    W: Write,
{
    let mut converter = Converter::new();
    let mut stats = ConversionStats::default();
    let mut line = String::new();
    let mut fragment = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        fragment.clear();
        converter.push_line(&line, &mut fragment);
        writer.write_all(fragment.as_bytes())?;
        stats.bytes_written += fragment.len();
    }

    stats.lines = converter.lines();
    fragment.clear();
    converter.finish(&mut fragment);
    writer.write_all(fragment.as_bytes())?;
    stats.bytes_written += fragment.len();
    writer.flush()?;

    Ok(stats)
}

/// Convert the file at `input` into a freshly created `output`.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionStats, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.is_file() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }

    debug!(input = %input.display(), output = %output.display(), "converting");
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let stats = convert(reader, writer)?;
    debug!(
        lines = stats.lines,
        bytes = stats.bytes_written,
        "conversion finished"
    );
    Ok(stats)
}
