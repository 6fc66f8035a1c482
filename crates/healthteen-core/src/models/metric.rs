use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CALORIES_GOAL, SLEEP_GOAL_HOURS, STEPS_GOAL};
use crate::error::{CoreError, LookupKind};

/// A tracked daily health quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Sleep,
    Calories,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Steps, Metric::Sleep, Metric::Calories];

    /// Human label, also used as the metric-detail payload ("Steps").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Sleep => "Sleep",
            Self::Calories => "Calories",
        }
    }

    /// Field name in the persisted health blob ("steps").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Sleep => "sleep",
            Self::Calories => "calories",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Sleep => "hours",
            Self::Calories => "kcal",
        }
    }

    /// Fixed daily goal.
    pub fn goal(&self) -> f64 {
        match self {
            Self::Steps => STEPS_GOAL,
            Self::Sleep => SLEEP_GOAL_HOURS,
            Self::Calories => CALORIES_GOAL,
        }
    }

    /// Whether values are whole numbers (steps, calories) or fractional (sleep hours).
    pub fn is_integral(&self) -> bool {
        !matches!(self, Self::Sleep)
    }

    /// Prompt shown in the log modal.
    pub fn log_prompt(&self) -> &'static str {
        match self {
            Self::Steps => "Steps taken today",
            Self::Sleep => "Hours of sleep",
            Self::Calories => "Calories burned",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    /// Accepts either the label or the key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::not_found(LookupKind::Metric, s))
    }
}

/// Clamp a goal percentage for a progress bar. The raw percentage is kept for
/// numeric display.
pub fn display_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_key() {
        assert_eq!("Sleep".parse::<Metric>().unwrap(), Metric::Sleep);
        assert_eq!("steps".parse::<Metric>().unwrap(), Metric::Steps);
        assert_eq!(" CALORIES ".parse::<Metric>().unwrap(), Metric::Calories);
    }

    #[test]
    fn test_parse_unknown_is_not_found() {
        let err = "Water".parse::<Metric>().unwrap_err();
        assert_eq!(err, CoreError::not_found(LookupKind::Metric, "Water"));
    }

    #[test]
    fn test_goals() {
        assert_eq!(Metric::Steps.goal(), 10_000.0);
        assert_eq!(Metric::Sleep.goal(), 8.0);
        assert_eq!(Metric::Calories.goal(), 2_000.0);
    }

    #[test]
    fn test_display_progress_clamps() {
        assert_eq!(display_progress(74.56), 74.56);
        assert_eq!(display_progress(110.0), 100.0);
        assert_eq!(display_progress(-3.0), 0.0);
        assert_eq!(display_progress(f64::NAN), 0.0);
    }
}
