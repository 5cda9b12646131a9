pub mod json;
pub mod tabular;

use crate::domain::{ListingRecord, OutputFolder};
use crate::spreadsheets::export_listings_xlsx;
use std::path::PathBuf;
use thiserror::Error;

pub const JSON_FILE: &str = "property_data.json";
pub const CSV_FILE: &str = "property_data.csv";
pub const XLSX_FILE: &str = "property_data.xlsx";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Row {row} has {found} columns, expected 7")]
    Columns { row: usize, found: usize },
}

/// Writes the raw listing data. Existing files are overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persister {
    pub xlsx: bool,
}

impl Persister {
    pub fn new(xlsx: bool) -> Self {
        Self { xlsx }
    }

    /// Creates `folder` if needed, then writes JSON, CSV and optionally XLSX.
    /// Returns the written paths in write order.
    pub fn save(
        &self,
        folder: &OutputFolder,
        records: &[ListingRecord],
    ) -> Result<Vec<PathBuf>, PersistError> {
        folder.ensure()?;

        let mut written = Vec::with_capacity(3);

        let path = folder.file(JSON_FILE);
        json::write_records(&path, records)?;
        tracing::info!("Property data saved to {}", path.display());
        written.push(path);

        let path = folder.file(CSV_FILE);
        tabular::write_records(&path, records)?;
        tracing::info!("Property table saved to {}", path.display());
        written.push(path);

        if self.xlsx {
            let path = folder.file(XLSX_FILE);
            export_listings_xlsx(records, &path)?;
            tracing::info!("Spreadsheet saved to {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MISSING_FIELD;
    use url::Url;

    fn sample() -> Vec<ListingRecord> {
        let villa = ListingRecord::from([
            "Villa".to_string(),
            "4".to_string(),
            "120 m²".to_string(),
            "2.500.000".to_string(),
            "Main St 1".to_string(),
            "A".to_string(),
            "2024-01-01".to_string(),
        ]);
        let flat = ListingRecord::from([
            "Ejerlejlighed".to_string(),
            "2".to_string(),
            "68 m²".to_string(),
            MISSING_FIELD.to_string(),
            "Nørrebrogade 12, 2200 København N".to_string(),
            MISSING_FIELD.to_string(),
            "2024-02-15".to_string(),
        ]);
        vec![villa, flat]
    }

    fn folder(root: &std::path::Path) -> OutputFolder {
        let url = Url::parse("https://www.boliga.dk/nye-boliger").unwrap();
        OutputFolder::for_url(root, &url).unwrap()
    }

    #[test]
    fn json_round_trip_keeps_order_and_sentinels() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = folder(tmp.path());
        Persister::default().save(&folder, &sample()).unwrap();

        let back = json::read_records(&folder.file(JSON_FILE)).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn json_keeps_non_ascii_literal() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = folder(tmp.path());
        Persister::default().save(&folder, &sample()).unwrap();

        let raw = std::fs::read_to_string(folder.file(JSON_FILE)).unwrap();
        assert!(raw.contains("120 m²"));
        assert!(raw.contains("Nørrebrogade"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn csv_round_trip_with_header() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = folder(tmp.path());
        Persister::default().save(&folder, &sample()).unwrap();

        let raw = std::fs::read_to_string(folder.file(CSV_FILE)).unwrap();
        assert_eq!(
            raw.lines().next().unwrap(),
            "Property Type,Rooms,Size,Price,Address,Energy Mark,Listing Date"
        );

        let back = tabular::read_records(&folder.file(CSV_FILE)).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn csv_short_row_reports_its_position() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CSV_FILE);
        std::fs::write(
            &path,
            "Property Type,Rooms,Size,Price,Address,Energy Mark,Listing Date\n\
             Villa,4,120 m²,2.500.000,Main St 1,A,2024-01-01\n\
             Villa,4,120 m²\n",
        )
        .unwrap();

        match tabular::read_records(&path) {
            Err(PersistError::Columns { row, found }) => {
                assert_eq!(row, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected Columns error, got {other:?}"),
        }
    }

    #[test]
    fn overwrites_and_skips_xlsx_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = folder(tmp.path());

        Persister::default().save(&folder, &sample()).unwrap();
        let written = Persister::default().save(&folder, &sample()[..1]).unwrap();

        assert_eq!(written.len(), 2);
        assert!(!folder.file(XLSX_FILE).exists());
        assert_eq!(json::read_records(&folder.file(JSON_FILE)).unwrap().len(), 1);
    }

    #[test]
    fn xlsx_when_enabled() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = folder(tmp.path());

        let written = Persister::new(true).save(&folder, &sample()).unwrap();
        assert_eq!(written.last().unwrap(), &folder.file(XLSX_FILE));
        assert!(folder.file(XLSX_FILE).is_file());
    }
}
