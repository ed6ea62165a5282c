//! Reporting sink for the winning window.

use {
    crate::{
        analysis::SearchStrategy,
        config::MaxPctChange,
        domain::Window,
        utils::{cents_to_dollars, format_elapsed, format_pct},
    },
    anyhow::Result,
    serde::Serialize,
    std::time::Duration,
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Table,
}

/// One search outcome, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub strategy: SearchStrategy,
    pub max_pct_change: MaxPctChange,
    pub window: Window,
    pub length: usize,
    pub low_price: f64,
    pub high_price: f64,
    pub pct_change: f64,
    pub elapsed_ms: f64,
    #[serde(skip)]
    elapsed: Duration,
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Start")]
    start: usize,
    #[tabled(rename = "End")]
    end: usize,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl TrendReport {
    pub fn new(
        strategy: SearchStrategy,
        max_pct_change: MaxPctChange,
        window: Window,
        elapsed: Duration,
    ) -> Self {
        Self {
            strategy,
            max_pct_change,
            window,
            length: window.len(),
            low_price: cents_to_dollars(window.low()),
            high_price: cents_to_dollars(window.high()),
            pct_change: window.percent_change(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            elapsed,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Longest lateral trend has length {}\n\
             Price range is {:.2} to {:.2}, a {} change\n\
             Time: {} ({})",
            self.length,
            self.low_price,
            self.high_price,
            format_pct(self.pct_change),
            format_elapsed(self.elapsed),
            self.strategy
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn row(&self) -> ReportRow {
        ReportRow {
            strategy: self.strategy.to_string(),
            start: self.window.start(),
            end: self.window.end(),
            length: self.length,
            low: format!("{:.2}", self.low_price),
            high: format!("{:.2}", self.high_price),
            change: format_pct(self.pct_change),
            time: format_elapsed(self.elapsed),
        }
    }

    /// Several reports as one table, one row per strategy.
    pub fn table(reports: &[TrendReport]) -> String {
        let mut table = Table::new(reports.iter().map(TrendReport::row));
        table.with(Style::rounded());
        table.to_string()
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        Ok(match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json()?,
            ReportFormat::Table => Self::table(std::slice::from_ref(self)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrendReport {
        let prices = [10_000, 10_100, 10_200, 10_000];
        let mut window = Window::singleton(0, &prices).unwrap();
        for i in 1..prices.len() {
            window = Window::merge(&window, &Window::singleton(i, &prices).unwrap());
        }
        TrendReport::new(
            SearchStrategy::DivideAndConquer,
            MaxPctChange::DEFAULT,
            window,
            Duration::from_millis(12),
        )
    }

    #[test]
    fn test_text_report() {
        let text = sample().to_text();
        assert!(text.contains("Longest lateral trend has length 4"), "{text}");
        assert!(text.contains("Price range is 100.00 to 102.00, a 2.0% change"), "{text}");
        assert!(text.contains("Time: 12 ms (divide-and-conquer)"), "{text}");
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value =
            serde_json::from_str(&sample().render(ReportFormat::Json).unwrap()).unwrap();
        assert_eq!(json["length"], 4);
        assert_eq!(json["strategy"], "divide-and-conquer");
        assert_eq!(json["max_pct_change"], 5.0);
        assert_eq!(json["window"]["start"], 0);
        assert_eq!(json["window"]["high"], 10_200);
    }

    #[test]
    fn test_table_report() {
        let table = sample().render(ReportFormat::Table).unwrap();
        assert!(table.contains("Length"));
        assert!(table.contains("102.00"));
    }
}
