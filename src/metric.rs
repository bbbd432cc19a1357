//! Metric display strings for animated counters.
//!
//! A metric such as `"$184.4M"` is split into a prefix (`"$"`), a number
//! (`184.4`) and a suffix (`"M"`). The counter animates the number from zero
//! and renders intermediate values with the same precision, keeping prefix
//! and suffix fixed.
//!
//! | Input        | prefix | number | suffix     |
//! |--------------|--------|--------|------------|
//! | `"78%"`      | `""`   | 78     | `"%"`      |
//! | `"$184.4M"`  | `"$"`  | 184.4  | `"M"`      |
//! | `"<10%"`     | `"<"`  | 10     | `"%"`      |
//! | `"6 months"` | `""`   | 6      | `" months"`|
//! | `"N/A"`      | `""`   | 0      | `"N/A"`    |

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// First run of ASCII digits, with at most one decimal part.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

/// Upper bound on counter steps; larger requests are capped.
pub const MAX_FRAMES: usize = 240;

/// A decomposed metric display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricValue {
    pub prefix: String,
    pub number: f64,
    pub suffix: String,
    /// Fractional digits of the matched literal (`184.4` → 1).
    pub decimals: usize,
    /// False when the input had no numeric run.
    #[serde(skip)]
    pub matched: bool,
}

/// Split a display string into prefix, number and suffix.
///
/// Never fails: without a numeric run the number is 0 and the whole input
/// becomes the suffix, so labels like `"N/A"` still render next to a zero.
pub fn parse(text: &str) -> MetricValue {
    let Some(m) = NUMBER_RE.find(text) else {
        return MetricValue {
            prefix: String::new(),
            number: 0.0,
            suffix: text.to_owned(),
            decimals: 0,
            matched: false,
        };
    };

    let literal = m.as_str();
    let decimals = literal.split_once('.').map_or(0, |(_, frac)| frac.len());

    MetricValue {
        prefix: text[..m.start()].to_owned(),
        number: literal.parse().unwrap_or_default(),
        suffix: text[m.end()..].to_owned(),
        decimals,
        matched: true,
    }
}

/// Cubic ease-out, clamped to `[0, 1]`.
pub fn ease_out(progress: f64) -> f64 {
    let t = if progress.is_nan() { 1.0 } else { progress.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

impl MetricValue {
    /// Render `value` with this metric's prefix, suffix and precision.
    pub fn display(&self, value: f64) -> String {
        format!("{}{:.*}{}", self.prefix, self.decimals, value, self.suffix)
    }

    /// Counter value at `progress` (0 to 1) along the eased curve.
    pub fn value_at(&self, progress: f64) -> f64 {
        self.number * ease_out(progress)
    }

    /// Display strings for a counter running from 0 to the final value.
    ///
    /// Yields `steps + 1` frames, with `steps` capped at [`MAX_FRAMES`]; the
    /// last one always equals `display(number)`. Zero steps yields only the
    /// final frame.
    pub fn frames(&self, steps: usize) -> Vec<String> {
        if steps == 0 {
            return vec![self.display(self.number)];
        }
        let steps = steps.min(MAX_FRAMES);
        (0..=steps)
            .map(|i| self.display(self.value_at(i as f64 / steps as f64)))
            .collect()
    }

    /// Whether the input carried a numeric part at all.
    pub const fn has_number(&self) -> bool {
        self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str) -> (String, f64, String) {
        let m = parse(text);
        (m.prefix, m.number, m.suffix)
    }

    // ========================================================================
    // parse Tests
    // ========================================================================

    #[test]
    fn test_percent() {
        assert_eq!(parts("78%"), ("".into(), 78.0, "%".into()));
    }

    #[test]
    fn test_currency_with_magnitude() {
        assert_eq!(parts("$184.4M"), ("$".into(), 184.4, "M".into()));
        assert_eq!(parse("$184.4M").decimals, 1);
    }

    #[test]
    fn test_less_than() {
        assert_eq!(parts("<10%"), ("<".into(), 10.0, "%".into()));
    }

    #[test]
    fn test_not_applicable() {
        assert_eq!(parts("N/A"), ("".into(), 0.0, "N/A".into()));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parts(""), ("".into(), 0.0, "".into()));
    }

    #[test]
    fn test_words_after_number() {
        assert_eq!(parts("6 months"), ("".into(), 6.0, " months".into()));
        assert_eq!(parts("3x faster"), ("".into(), 3.0, "x faster".into()));
    }

    #[test]
    fn test_only_first_run() {
        assert_eq!(parts("10-20K"), ("".into(), 10.0, "-20K".into()));
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(parts("1.2.3"), ("".into(), 1.2, ".3".into()));
        assert_eq!(parts("5."), ("".into(), 5.0, ".".into()));
        assert_eq!(parts(".5"), (".".into(), 5.0, "".into()));
    }

    #[test]
    fn test_non_ascii_text_around_number() {
        assert_eq!(parts("€2,5 Mio"), ("€".into(), 2.0, ",5 Mio".into()));
        assert_eq!(parts("≈ 40 ms"), ("≈ ".into(), 40.0, " ms".into()));
    }

    #[test]
    fn test_round_trip_digit_free_affixes() {
        let cases = [
            ("$", "184.4", "M"),
            ("", "78", "%"),
            ("<", "10", "%"),
            ("up to ", "3", "x faster"),
            ("~", "0.25", " s"),
            ("", "1000", ""),
        ];
        for (prefix, number, suffix) in cases {
            let text = format!("{prefix}{number}{suffix}");
            let m = parse(&text);
            assert_eq!(m.prefix, prefix, "{text}");
            assert_eq!(m.suffix, suffix, "{text}");
            assert_eq!(m.number, number.parse::<f64>().unwrap(), "{text}");
            assert_eq!(m.display(m.number), text);
        }
    }

    // ========================================================================
    // Counter Tests
    // ========================================================================

    #[test]
    fn test_display_keeps_precision() {
        let m = parse("$184.4M");
        assert_eq!(m.display(0.0), "$0.0M");
        assert_eq!(m.display(92.24), "$92.2M");
        assert_eq!(m.display(m.number), "$184.4M");
    }

    #[test]
    fn test_display_without_number() {
        let m = parse("N/A");
        assert_eq!(m.display(m.number), "0N/A");
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-3.0), 0.0);
        assert_eq!(ease_out(7.0), 1.0);
        assert_eq!(ease_out(f64::NAN), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_frames() {
        let frames = parse("78%").frames(4);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames.first().map(String::as_str), Some("0%"));
        assert_eq!(frames.last().map(String::as_str), Some("78%"));
    }

    #[test]
    fn test_frames_monotonic() {
        let m = parse("1500 users");
        let values: Vec<f64> = (0..=10).map(|i| m.value_at(i as f64 / 10.0)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_frames_capped() {
        let frames = parse("$184.4M").frames(usize::MAX);
        assert_eq!(frames.len(), MAX_FRAMES + 1);
        assert_eq!(frames.last().map(String::as_str), Some("$184.4M"));
    }

    #[test]
    fn test_frames_zero_steps() {
        assert_eq!(parse("<10%").frames(0), vec!["<10%".to_string()]);
    }

    #[test]
    fn test_has_number() {
        assert!(parse("78%").has_number());
        assert!(parse("0%").has_number());
        assert!(parse("$0").has_number());
        assert!(!parse("N/A").has_number());
        assert!(!parse("TBD").has_number());
        assert!(!parse("").has_number());
    }
}
