use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::Metric;

/// Rolling per-day history for the three metrics, oldest first.
///
/// The three sequences always have the same non-zero length and the last
/// element of each is "today". There is no day rollover: logging always
/// overwrites the last slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub steps: Vec<f64>,
    pub sleep: Vec<f64>,
    pub calories: Vec<f64>,
    /// Date of the last successful log, serialized as an ISO date.
    #[serde(rename = "date")]
    pub last_updated: NaiveDate,
}

impl HealthRecord {
    /// Check the shape invariant. Restored blobs go through this before use.
    pub fn validate(&self) -> Result<(), CoreError> {
        let len = self.steps.len();
        if len == 0 {
            return Err(CoreError::validation("health history is empty"));
        }
        if self.sleep.len() != len || self.calories.len() != len {
            return Err(CoreError::validation(format!(
                "health history lengths differ (steps {}, sleep {}, calories {})",
                len,
                self.sleep.len(),
                self.calories.len()
            )));
        }
        for metric in Metric::ALL {
            if self.slots(metric).iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(CoreError::validation(format!(
                    "{} history holds an invalid value",
                    metric.key()
                )));
            }
        }
        Ok(())
    }

    /// Number of days held.
    pub fn days(&self) -> usize {
        self.steps.len()
    }

    /// Index of the "today" slot.
    pub fn today_index(&self) -> usize {
        self.days().saturating_sub(1)
    }

    fn slots(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Steps => &self.steps,
            Metric::Sleep => &self.sleep,
            Metric::Calories => &self.calories,
        }
    }

    /// One metric's history, oldest first.
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.slots(metric).to_vec()
    }

    /// Overwrite today's slot. `value` must already be validated.
    pub(crate) fn set_today(&mut self, metric: Metric, value: f64) {
        let idx = self.today_index();
        let slots = match metric {
            Metric::Steps => &mut self.steps,
            Metric::Sleep => &mut self.sleep,
            Metric::Calories => &mut self.calories,
        };
        slots[idx] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_seed_is_valid() {
        let record = seed::health_record(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(record.validate().is_ok());
        assert_eq!(record.days(), 7);
        assert_eq!(record.today_index(), 6);
    }

    #[test]
    fn test_validate_rejects_uneven_lengths() {
        let mut record = seed::health_record(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        record.sleep.pop();
        assert!(matches!(record.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let record = HealthRecord {
            steps: vec![],
            sleep: vec![],
            calories: vec![],
            last_updated: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_steps() {
        let mut record = seed::health_record(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        record.steps[2] = -5.0;
        assert!(matches!(record.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_json_layout() {
        let record = seed::health_record(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["steps"][6], 7456.0);
        assert_eq!(json["sleep"][0], 7.5);
        assert_eq!(json["calories"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_restores_browser_style_blob() {
        let blob = r#"{"steps":[1,2,3],"sleep":[7,8,6.5],"calories":[10,20,30],"date":"2023-12-31"}"#;
        let record: HealthRecord = serde_json::from_str(blob).unwrap();
        assert_eq!(record.sleep, vec![7.0, 8.0, 6.5]);
        assert_eq!(record.series(Metric::Calories), vec![10.0, 20.0, 30.0]);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_restores_fractional_steps_and_calories() {
        let blob = r#"{"steps":[8000.5,8000.0],"sleep":[7,8],"calories":[1999.6,2100],"date":"2024-01-02"}"#;
        let record: HealthRecord = serde_json::from_str(blob).unwrap();
        assert_eq!(record.series(Metric::Steps), vec![8000.5, 8000.0]);
        assert_eq!(record.calories[0], 1999.6);
        assert!(record.validate().is_ok());
    }
}
