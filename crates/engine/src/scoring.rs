//! The four sub-score calculators
//!
//! Pure functions, one per scoring axis. Urgency may exceed 100 for overdue
//! tasks; the other three stay within [0, 100].

use chrono::NaiveDate;

/// Urgency from days until the due date, piecewise over day bands.
///
/// Monotonically non-increasing as the due date moves further out, with no
/// upward jump at any band edge:
/// overdue `100 + min(50, 2*|d|)`, due today 95, then linear decay through
/// the first week, the second week and the 15-29 band, bottoming out at 10
/// from roughly five weeks on.
pub fn urgency_score(due_date: NaiveDate, today: NaiveDate) -> f64 {
    let days = due_date.signed_duration_since(today).num_days();

    if days < 0 {
        let overdue_boost = (2 * days.unsigned_abs()).min(50) as f64;
        return 100.0 + overdue_boost;
    }
    match days {
        0 => 95.0,
        1..=7 => 90.0 - 4.0 * days as f64,
        8..=14 => 62.0 - 2.0 * (days - 7) as f64,
        15..=29 => 40.0 - 2.0 * (days - 15) as f64,
        _ => (12.0 - 0.5 * (days - 29) as f64).max(10.0),
    }
}

/// Linear rescale of the 1-10 importance rating onto 10-100.
pub fn importance_score(importance: i32) -> f64 {
    importance as f64 * 10.0
}

/// Logarithmic reward for small estimates: an hour-long task scores about
/// 90, a 20-hour task about 53. Clamped to [0, 100].
pub fn effort_score(estimated_hours: f64) -> f64 {
    (100.0 - (estimated_hours + 1.0).log10() * 35.0).clamp(0.0, 100.0)
}

/// Dependency standing: base 50, +10 per distinct blocked task (bonus capped
/// at +50), -20 once if the task itself declares any dependency. Clamped to
/// [0, 100].
///
/// No completion state exists in this model, so a declared dependency is
/// always treated as not yet finished.
pub fn dependency_score(blocked_count: usize, has_dependencies: bool) -> f64 {
    let bonus = (blocked_count * 10).min(50) as f64;
    let penalty = if has_dependencies { 20.0 } else { 0.0 };
    (50.0 + bonus - penalty).clamp(0.0, 100.0)
}

/// Round to two decimals, matching the precision the scores are reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
