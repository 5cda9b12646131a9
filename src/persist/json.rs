use crate::domain::ListingRecord;
use crate::persist::PersistError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Pretty JSON array of 7-element arrays. serde_json never escapes non-ASCII,
/// so `m²` and `æøå` land in the file as-is.
pub fn write_records(path: &Path, records: &[ListingRecord]) -> Result<(), PersistError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_records(path: &Path) -> Result<Vec<ListingRecord>, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Same layout as the file, for embedding in reports.
pub fn to_pretty_string(records: &[ListingRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
