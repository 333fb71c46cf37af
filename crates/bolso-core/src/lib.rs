//! Pure derived-metrics engine for the bolso budgeting application.
//!
//! Every function here is a pure function of a ledger snapshot plus explicit
//! time inputs: period resolution, aggregation, time-series building, insight
//! generation, and report composition. State ownership, persistence, and any
//! remote mirroring live with the callers; the engine holds no caches and
//! recomputes from the full snapshot on every call.

pub mod aggregate;
pub mod error;
pub mod format;
pub mod insight;
pub mod period;
pub mod report;
pub mod series;
pub mod time;

pub use aggregate::{
    category_summary, filter_window, summarize, top_categories, CategoryTotal, Summary,
};
pub use error::CoreError;
pub use insight::{generate_insights, Insight, InsightKind};
pub use period::{resolve_period, PeriodKind, PeriodWindow};
pub use report::{compose_report, ReportDocument, ReportPage};
pub use series::{comparative_series, cumulative_series, ComparativePoint, SeriesPoint};
pub use time::{days_in_month, days_remaining_in_month, shift_month, Clock};
