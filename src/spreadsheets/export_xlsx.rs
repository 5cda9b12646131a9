use crate::domain::{ListingRecord, LISTING_HEADERS};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

/// Single "Listings" sheet: bold header row, then one row per record, all
/// cells as text so prices like `2.500.000` are not reinterpreted.
pub fn export_listings_xlsx(records: &[ListingRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Listings")?;

    let bold = Format::new().set_bold();

    // Headers
    for (col, header) in LISTING_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    // Rows
    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in record.fields().iter().enumerate() {
            worksheet.write_string(r, col as u16, *value)?;
        }
    }

    worksheet.autofit();
    workbook.save(path)?;

    tracing::debug!(rows = records.len(), "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_workbook_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("listings.xlsx");

        let record = ListingRecord::from([
            "Villa".to_string(),
            "4".to_string(),
            "120 m²".to_string(),
            "2.500.000".to_string(),
            "Main St 1".to_string(),
            "A".to_string(),
            "2024-01-01".to_string(),
        ]);
        export_listings_xlsx(&[record], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }
}
