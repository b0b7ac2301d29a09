pub mod run_report;
pub mod writer;

pub use run_report::RunReport;
pub use writer::{ReportWriter, REPORT_HEADER};
