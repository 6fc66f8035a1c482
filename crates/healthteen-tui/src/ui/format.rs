use healthteen_core::models::Metric;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Group digits in threes: `7456` -> `"7,456"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-number display with separators. Negative and NaN inputs show as 0.
pub fn rounded(value: f64) -> String {
    if value.is_nan() || value <= 0.0 {
        return "0".to_string();
    }
    thousands(value.round() as u64)
}

/// Hours as entered, at most two decimals: `7.5h`, `8h`.
pub fn hours(value: f64) -> String {
    format!("{}h", (value * 100.0).round() / 100.0)
}

/// A value the way metric cards show it.
pub fn metric_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Sleep => hours(value),
        Metric::Steps | Metric::Calories => rounded(value),
    }
}

/// Goal label for a metric ("10,000", "8h").
pub fn metric_goal(metric: Metric) -> String {
    metric_value(metric, metric.goal())
}

/// Signed percentage, `+3%` / `-1%`.
pub fn signed_percent(percent: i64) -> String {
    if percent >= 0 {
        format!("+{percent}%")
    } else {
        format!("{percent}%")
    }
}

/// Truncate to a display width, adding an ellipsis when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}

/// Word-wrap to a display width. Words wider than a row are split across rows.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            result.push(std::mem::take(&mut current));
            current_width = 0;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > max_width && current_width > 0 {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() {
        result.push(current);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(7456), "7,456");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_metric_values() {
        assert_eq!(metric_value(Metric::Steps, 7245.14), "7,245");
        assert_eq!(metric_value(Metric::Sleep, 7.5), "7.5h");
        assert_eq!(metric_value(Metric::Sleep, 8.0), "8h");
        assert_eq!(metric_value(Metric::Sleep, 7.75), "7.75h");
        assert_eq!(metric_goal(Metric::Calories), "2,000");
        assert_eq!(rounded(f64::NAN), "0");
    }

    #[test]
    fn test_fractional_and_large_counts_round_for_display() {
        assert_eq!(metric_value(Metric::Steps, 1234.5), "1,235");
        assert_eq!(metric_value(Metric::Calories, 1999.6), "2,000");
        assert_eq!(metric_value(Metric::Steps, 5e9), "5,000,000,000");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(0), "+0%");
        assert_eq!(signed_percent(12), "+12%");
        assert_eq!(signed_percent(-1), "-1%");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
        assert_eq!(truncate_to_width("hello", 2), "..");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("see you at the track", 10), vec!["see you at", "the track"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("ok", 10), vec!["ok"]);
        assert!(wrap_text("   ", 10).is_empty());
        assert!(wrap_text("hi", 0).is_empty());
    }
}
