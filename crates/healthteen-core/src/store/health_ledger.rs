use chrono::NaiveDate;

use crate::error::CoreError;
use crate::models::{HealthRecord, Metric};

/// Owner of the health history and every figure derived from it.
///
/// All consumers (summary cards, detail view, dashboard) read averages, trends
/// and goal progress from here so they always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthLedger {
    record: HealthRecord,
}

impl HealthLedger {
    /// Wrap a record, rejecting one that breaks the equal-length invariant.
    pub fn new(record: HealthRecord) -> Result<Self, CoreError> {
        record.validate()?;
        Ok(Self { record })
    }

    /// The demo week ending on `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            record: crate::seed::health_record(today),
        }
    }

    pub fn record(&self) -> &HealthRecord {
        &self.record
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.record.last_updated
    }

    // ===== Queries =====

    /// Today's value (the last slot).
    pub fn latest(&self, metric: Metric) -> f64 {
        self.history(metric).last().copied().unwrap_or_default()
    }

    /// Oldest-first history of one metric.
    pub fn history(&self, metric: Metric) -> Vec<f64> {
        self.record.series(metric)
    }

    /// Largest value in the window, for chart scaling.
    pub fn peak(&self, metric: Metric) -> f64 {
        self.history(metric).into_iter().fold(0.0, f64::max)
    }

    /// Arithmetic mean over the whole window.
    pub fn average(&self, metric: Metric) -> f64 {
        mean(&self.history(metric)).unwrap_or_default()
    }

    /// Change of the full-window mean against the mean of every day but today,
    /// as a whole percentage.
    ///
    /// Returns `DivisionUndefined` when the prior-period mean is zero (or there
    /// is no prior period), instead of producing a non-finite value.
    pub fn trend_percent(&self, metric: Metric) -> Result<i64, CoreError> {
        let values = self.history(metric);
        let (_, prior_days) = values
            .split_last()
            .ok_or(CoreError::DivisionUndefined { metric })?;
        let prior = mean(prior_days).ok_or(CoreError::DivisionUndefined { metric })?;
        if prior == 0.0 {
            return Err(CoreError::DivisionUndefined { metric });
        }
        let current = mean(&values).unwrap_or_default();
        Ok(((current - prior) / prior * 100.0).round() as i64)
    }

    /// Today's value as a percentage of the daily goal. Not clamped.
    pub fn goal_progress(&self, metric: Metric) -> f64 {
        self.latest(metric) / metric.goal() * 100.0
    }

    // ===== Mutations =====

    /// Overwrite today's slot for `metric` and stamp `today`.
    ///
    /// Rejects negative, non-finite and (for whole-number metrics) out of
    /// range values without touching the record. Only the last slot is ever
    /// written: there is no day rollover.
    pub fn log_metric(&mut self, metric: Metric, value: f64, today: NaiveDate) -> Result<(), CoreError> {
        let value = validate_value(metric, value)?;
        self.record.set_today(metric, value);
        self.record.last_updated = today;
        Ok(())
    }

    /// Parse user-entered text and log it.
    pub fn log_metric_text(&mut self, metric: Metric, text: &str, today: NaiveDate) -> Result<(), CoreError> {
        let value = parse_value(text)?;
        self.log_metric(metric, value, today)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Parse a metric value typed by the user.
pub fn parse_value(text: &str) -> Result<f64, CoreError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CoreError::validation(format!("'{}' is not a number", trimmed)))
}

/// Check a value for `metric`. Accepted values are stored exactly as given.
fn validate_value(metric: Metric, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::validation(format!("{} must be a number", metric.label())));
    }
    if value < 0.0 {
        return Err(CoreError::validation(format!(
            "{} must be zero or greater",
            metric.label()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn ledger() -> HealthLedger {
        HealthLedger::new(seed::health_record(day(1))).unwrap()
    }

    #[test]
    fn test_latest_is_last_slot() {
        let ledger = ledger();
        assert_eq!(ledger.latest(Metric::Steps), 7456.0);
        assert_eq!(ledger.latest(Metric::Sleep), 7.2);
        assert_eq!(ledger.latest(Metric::Calories), 1920.0);
    }

    #[test]
    fn test_log_metric_only_touches_today() {
        for metric in Metric::ALL {
            let mut ledger = ledger();
            let before = ledger.history(metric);
            ledger.log_metric(metric, 42.0, day(9)).unwrap();

            let after = ledger.history(metric);
            assert_eq!(ledger.latest(metric), 42.0);
            assert_eq!(&after[..6], &before[..6]);
            assert_eq!(ledger.last_updated(), day(9));
        }
    }

    #[test]
    fn test_log_metric_leaves_other_metrics_alone() {
        let mut ledger = ledger();
        ledger.log_metric(Metric::Sleep, 9.25, day(2)).unwrap();
        assert_eq!(ledger.history(Metric::Steps), seed::health_record(day(1)).series(Metric::Steps));
        assert_eq!(ledger.latest(Metric::Calories), 1920.0);
    }

    #[test]
    fn test_repeated_logs_edit_same_slot() {
        let mut ledger = ledger();
        ledger.log_metric(Metric::Steps, 100.0, day(2)).unwrap();
        ledger.log_metric(Metric::Steps, 200.0, day(3)).unwrap();
        assert_eq!(ledger.record().steps.len(), 7);
        assert_eq!(ledger.record().steps[5], 9123.0);
        assert_eq!(ledger.latest(Metric::Steps), 200.0);
    }

    #[test]
    fn test_invalid_values_leave_ledger_unchanged() {
        for metric in Metric::ALL {
            let mut ledger = ledger();
            let before = ledger.clone();
            for bad in [-1.0, f64::NAN, f64::INFINITY] {
                let err = ledger.log_metric(metric, bad, day(5)).unwrap_err();
                assert!(matches!(err, CoreError::Validation(_)));
            }
            assert_eq!(ledger, before);
        }
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let mut ledger = ledger();
        let before = ledger.clone();
        assert!(matches!(
            ledger.log_metric_text(Metric::Sleep, "lots", day(5)),
            Err(CoreError::Validation(_))
        ));
        assert!(ledger.log_metric_text(Metric::Sleep, "", day(5)).is_err());
        assert_eq!(ledger, before);

        ledger.log_metric_text(Metric::Sleep, " 6.5 ", day(5)).unwrap();
        assert_eq!(ledger.latest(Metric::Sleep), 6.5);
    }

    #[test]
    fn test_logged_value_is_latest_exactly() {
        for metric in Metric::ALL {
            for value in [0.0, 0.5, 7.25, 1234.5, 5e9, 1e12, f64::MAX] {
                let mut ledger = ledger();
                let before = ledger.history(metric);
                ledger.log_metric(metric, value, day(2)).unwrap();
                assert_eq!(ledger.latest(metric), value);
                assert_eq!(&ledger.history(metric)[..6], &before[..6]);
            }
        }
    }

    #[test]
    fn test_steps_average_scenario() {
        let ledger = ledger();
        let avg = ledger.average(Metric::Steps);
        assert!((avg - 7245.142857).abs() < 1e-5);
        assert_eq!(avg.round(), 7245.0);
    }

    #[test]
    fn test_goal_progress_not_clamped() {
        let mut ledger = ledger();
        assert!((ledger.goal_progress(Metric::Steps) - 74.56).abs() < 1e-9);
        assert!((crate::models::display_progress(ledger.goal_progress(Metric::Steps)) - 74.56).abs() < 1e-9);

        ledger.log_metric(Metric::Steps, 11_000.0, day(2)).unwrap();
        let raw = ledger.goal_progress(Metric::Steps);
        assert!((raw - 110.0).abs() < 1e-9);
        assert_eq!(crate::models::display_progress(raw), 100.0);
    }

    #[test]
    fn test_trend_percent() {
        let ledger = ledger();
        // prior 7.625h, current 7.564h
        assert_eq!(ledger.trend_percent(Metric::Sleep), Ok(-1));
        assert_eq!(ledger.trend_percent(Metric::Steps), Ok(0));
    }

    #[test]
    fn test_trend_rising() {
        let record = HealthRecord {
            steps: vec![100.0, 100.0, 800.0],
            sleep: vec![1.0, 1.0, 1.0],
            calories: vec![0.0, 0.0, 0.0],
            last_updated: day(1),
        };
        let ledger = HealthLedger::new(record).unwrap();
        // prior 100, current 333.33 -> +233%
        assert_eq!(ledger.trend_percent(Metric::Steps), Ok(233));
        assert_eq!(ledger.trend_percent(Metric::Sleep), Ok(0));
    }

    #[test]
    fn test_trend_zero_prior_is_undefined() {
        let record = HealthRecord {
            steps: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 500.0],
            sleep: vec![7.0; 7],
            calories: vec![0.0; 7],
            last_updated: day(1),
        };
        let ledger = HealthLedger::new(record).unwrap();
        assert_eq!(
            ledger.trend_percent(Metric::Steps),
            Err(CoreError::DivisionUndefined { metric: Metric::Steps })
        );
        assert!(ledger.trend_percent(Metric::Calories).is_err());
    }

    #[test]
    fn test_single_day_has_no_trend() {
        let record = HealthRecord {
            steps: vec![10.0],
            sleep: vec![7.0],
            calories: vec![10.0],
            last_updated: day(1),
        };
        let ledger = HealthLedger::new(record).unwrap();
        assert!(ledger.trend_percent(Metric::Steps).is_err());
        assert_eq!(ledger.average(Metric::Steps), 10.0);
    }

    #[test]
    fn test_peak() {
        assert_eq!(ledger().peak(Metric::Sleep), 8.5);
        assert_eq!(ledger().peak(Metric::Calories), 2200.0);
    }
}
