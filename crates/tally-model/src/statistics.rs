/// Descriptive statistics for one numeric sample.
///
/// Values are stored exactly as computed; rounding only happens when a report
/// renders them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties resolve to the smallest value.
    pub mode: f64,
    /// Population variance (divides by the sample size).
    pub variance: f64,
    pub std_dev: f64,
}
