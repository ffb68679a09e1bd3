//! CSV export of sound event rows

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::extract::SoundEventRow;

/// Column names of the CSV output
pub const CSV_HEADERS: [&str; 3] = ["Time (sec)", "Frame", "Sound"];

/// Suffix appended to the input file stem for the CSV output
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_sounds";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV writer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Prefix the output with a UTF-8 byte order mark
    pub write_bom: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            write_bom: true,
        }
    }
}

/// Write rows with a header line
///
/// Fields are quoted only when they contain the delimiter, a quote or a line
/// break. Records end with CRLF.
pub fn write_csv<W: Write>(rows: &[SoundEventRow], mut writer: W, options: &CsvOptions) -> Result<()> {
    if options.write_bom {
        writer.write_all(UTF8_BOM)?;
    }

    let mut csv_writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote(b'"')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write rows to a file, replacing it if it exists
pub fn write_csv_file<P: AsRef<Path>>(
    rows: &[SoundEventRow],
    path: P,
    options: &CsvOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(rows, BufWriter::new(file), options)?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Output path for an input export: `<stem><suffix>.csv`
///
/// The file lands beside the input unless `output_dir` is given.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ue_anim_notify::{DEFAULT_OUTPUT_SUFFIX, output_path_for};
///
/// let output = output_path_for(Path::new("anims/AS_Fire.json"), DEFAULT_OUTPUT_SUFFIX, None);
/// assert_eq!(output, Path::new("anims/AS_Fire_sounds.csv"));
/// ```
pub fn output_path_for(input: &Path, suffix: &str, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{suffix}.csv");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
