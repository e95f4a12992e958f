//! Range Comparator
//!
//! Core logic for scoring a single environmental value against a species'
//! optimal range defined by min, ideal and max.
//!
//! In-range values lose at most 30 points as they move from the ideal to the
//! furthest bound, so they always score 70 or more. Out-of-range values start
//! at 70 and decay toward 0 with the overshoot measured relative to the size
//! of the bound that was crossed.

use super::profiles::OptimalRange;

/// Maximum points lost by a value that is still inside the range
pub const MAX_IN_RANGE_PENALTY: f64 = 30.0;

/// Score of a value sitting exactly on a bound from the outside
pub const OUT_OF_RANGE_CEILING: f64 = 70.0;

/// Smallest bound magnitude used as a divisor (bounds of 0 would divide by zero)
const MIN_BOUND_MAGNITUDE: f64 = 1.0;

/// Where a value falls relative to an optimal range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// value < min
    BelowRange,

    /// min <= value <= max
    WithinRange,

    /// value > max (NaN also lands here)
    AboveRange,
}

impl RangeFit {
    pub fn display_text(&self) -> &'static str {
        match self {
            RangeFit::BelowRange => "Below optimal range",
            RangeFit::WithinRange => "Within optimal range",
            RangeFit::AboveRange => "Above optimal range",
        }
    }
}

/// Classify a value against a range
pub fn compare_to_range(value: f64, range: &OptimalRange) -> RangeFit {
    if range.contains(value) {
        RangeFit::WithinRange
    } else if value < range.min {
        RangeFit::BelowRange
    } else {
        RangeFit::AboveRange
    }
}

/// Score a value against an optimal range (0-100)
///
/// # Arguments
/// * `value` - The measured value
/// * `range` - The species' min/max/ideal for this factor
///
/// # Returns
/// 100 at the ideal, at least 70 anywhere inside the range, at most 70
/// outside it and non-increasing with distance from the crossed bound.
/// Never panics; NaN scores 0.
pub fn score_factor(value: f64, range: &OptimalRange) -> u8 {
    match compare_to_range(value, range) {
        RangeFit::WithinRange => {
            let half_width = range.half_width();
            if half_width <= 0.0 {
                // Zero-width range: the only in-range value is the ideal
                return 100;
            }
            let distance = (value - range.ideal).abs();
            clamp_score(100.0 - MAX_IN_RANGE_PENALTY * distance / half_width)
        }
        RangeFit::BelowRange => out_of_range_score(range.min - value, range.min),
        RangeFit::AboveRange => out_of_range_score(value - range.max, range.max),
    }
}

fn out_of_range_score(overshoot: f64, bound: f64) -> u8 {
    let penalty = overshoot / bound.abs().max(MIN_BOUND_MAGNITUDE);
    clamp_score(OUT_OF_RANGE_CEILING - OUT_OF_RANGE_CEILING * penalty)
}

/// Round to the nearest integer and clamp into [0, 100]
pub(crate) fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}
