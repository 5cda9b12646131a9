// src/report/report.rs

use crate::analyst::AnalysisResult;
use crate::domain::{ListingRecord, OutputFolder};
use crate::persist::json::to_pretty_string;
use std::path::PathBuf;
use thiserror::Error;

pub const REPORT_FILE: &str = "property-report.md";
pub const ANALYSIS_FILE: &str = "property_analysis.md";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot build report: {0} missing")]
    MissingSection(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collects both halves of a report. Building with either half absent is an
/// error, and nothing gets written.
#[derive(Debug, Default)]
pub struct ReportBuilder<'a> {
    records: Option<&'a [ListingRecord]>,
    analysis: Option<&'a AnalysisResult>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(mut self, records: &'a [ListingRecord]) -> Self {
        self.records = Some(records);
        self
    }

    pub fn analysis(mut self, analysis: &'a AnalysisResult) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn build(self) -> Result<Report<'a>, ReportError> {
        Ok(Report {
            records: self
                .records
                .ok_or(ReportError::MissingSection("property data"))?,
            analysis: self
                .analysis
                .ok_or(ReportError::MissingSection("property analysis"))?,
        })
    }
}

/// The combined human-readable document: data first, analysis second.
#[derive(Debug)]
pub struct Report<'a> {
    records: &'a [ListingRecord],
    analysis: &'a AnalysisResult,
}

impl Report<'_> {
    pub fn render(&self) -> Result<String, ReportError> {
        let data = to_pretty_string(self.records)?;

        Ok(format!(
            "# Comprehensive Property Report\n\
             \n\
             ## Extracted Property Data\n\
             {data}\n\
             \n\
             ## Property Analysis\n\
             {analysis}\n",
            analysis = self.analysis.as_str()
        ))
    }

    /// Writes the standalone analysis and the combined report, overwriting
    /// both. Returns `[analysis, report]` paths.
    pub fn write_to(&self, folder: &OutputFolder) -> Result<[PathBuf; 2], ReportError> {
        let rendered = self.render()?;
        folder.ensure()?;

        let analysis_path = folder.file(ANALYSIS_FILE);
        std::fs::write(&analysis_path, self.analysis.as_str())?;
        tracing::info!("Property analysis saved to {}", analysis_path.display());

        let report_path = folder.file(REPORT_FILE);
        std::fs::write(&report_path, rendered)?;
        tracing::info!(
            "Comprehensive property report saved to {}",
            report_path.display()
        );

        Ok([analysis_path, report_path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn record() -> ListingRecord {
        ListingRecord::from([
            "Villa".to_string(),
            "4".to_string(),
            "120 m²".to_string(),
            "2.500.000".to_string(),
            "Main St 1".to_string(),
            "A".to_string(),
            "2024-01-01".to_string(),
        ])
    }

    #[test]
    fn renders_two_sections_in_order() {
        let records = vec![record()];
        let analysis = AnalysisResult("Strong buy.".to_string());

        let text = ReportBuilder::new()
            .records(&records)
            .analysis(&analysis)
            .build()
            .unwrap()
            .render()
            .unwrap();

        assert!(text.starts_with(
            "# Comprehensive Property Report\n\n## Extracted Property Data\n[\n  [\n    \"Villa\","
        ));
        let data_at = text.find("## Extracted Property Data").unwrap();
        let analysis_at = text.find("## Property Analysis\nStrong buy.").unwrap();
        assert!(data_at < analysis_at);
        assert!(text.contains("\"120 m²\""));
    }

    #[test]
    fn missing_section_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let records = vec![record()];

        let err = ReportBuilder::new().records(&records).build().unwrap_err();
        assert!(matches!(err, ReportError::MissingSection("property analysis")));

        let analysis = AnalysisResult("x".to_string());
        let err = ReportBuilder::new().analysis(&analysis).build().unwrap_err();
        assert!(matches!(err, ReportError::MissingSection("property data")));

        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_analysis_and_report() {
        let tmp = tempfile::tempdir().unwrap();
        let url = Url::parse("https://www.boliga.dk/").unwrap();
        let folder = OutputFolder::for_url(tmp.path(), &url).unwrap();

        let records = vec![record()];
        let analysis = AnalysisResult("Energy mark A is rare.".to_string());
        let report = ReportBuilder::new()
            .records(&records)
            .analysis(&analysis)
            .build()
            .unwrap();

        let [analysis_path, report_path] = report.write_to(&folder).unwrap();
        assert_eq!(
            std::fs::read_to_string(analysis_path).unwrap(),
            "Energy mark A is rare."
        );
        assert_eq!(
            std::fs::read_to_string(report_path).unwrap(),
            report.render().unwrap()
        );
    }
}
