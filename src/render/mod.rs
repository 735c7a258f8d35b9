//! Report rendering: chart data plus the HTML page that draws it.

pub mod chart;
pub mod html;

pub use chart::{ChartView, ReportData, Scale, SeriesView, build_report};
pub use html::render_html_report;
