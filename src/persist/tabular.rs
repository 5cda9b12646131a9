use crate::domain::{ListingRecord, LISTING_HEADERS};
use crate::persist::PersistError;
use std::path::Path;

pub fn write_records(path: &Path, records: &[ListingRecord]) -> Result<(), PersistError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(LISTING_HEADERS)?;
    for record in records {
        writer.write_record(record.fields())?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads a file written by [`write_records`]; the header row is skipped.
/// A row of the wrong width is reported by its 1-based data row number.
pub fn read_records(path: &Path) -> Result<Vec<ListingRecord>, PersistError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let fields: Vec<String> = row.iter().map(str::to_string).collect();
        let record = ListingRecord::try_from(fields).map_err(|found| PersistError::Columns {
            row: i + 1,
            found,
        })?;
        records.push(record);
    }

    Ok(records)
}
