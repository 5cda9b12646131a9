mod report;

pub use report::{Report, ReportBuilder, ReportError, ANALYSIS_FILE, REPORT_FILE};
