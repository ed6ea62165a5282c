mod trend_report;

pub use trend_report::{ReportFormat, TrendReport};
