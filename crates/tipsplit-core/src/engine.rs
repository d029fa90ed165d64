//! # Calculator Engine
//!
//! Splits a bill and its tip evenly between a number of people.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_result(bill, tip %, people)                                    │
//! │       │                                                                 │
//! │       ├── people missing or < 1?   → {0, 0}   (no division by zero)    │
//! │       ├── tip % negative?          → {0, 0}                             │
//! │       ├── bill missing / < 0 / NaN → {0, 0}                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total_tip        = bill × tip% / 100                                   │
//! │  total_with_tip   = bill + total_tip                                    │
//! │  tip_per_person   = total_tip / people                                  │
//! │  total_per_person = total_with_tip / people                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  NaN / ±∞ → 0                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no error path: every input maps to a finite, non-negative
//! [`CalculationResult`].

use crate::types::CalculationResult;

/// Computes tip-per-person and total-per-person.
///
/// `None` stands for a field that could not be parsed.
///
/// ## Example
/// ```rust
/// use tipsplit_core::compute_result;
///
/// let result = compute_result(Some(50.0), 0.0, Some(2));
/// assert_eq!(result.tip_per_person(), 0.0);
/// assert_eq!(result.total_per_person(), 25.0);
///
/// // Zero people never divides.
/// assert!(compute_result(Some(75.0), 20.0, Some(0)).is_zero());
/// ```
pub fn compute_result(
    bill_amount: Option<f64>,
    tip_percentage: f64,
    number_of_people: Option<i64>,
) -> CalculationResult {
    let people = match number_of_people {
        Some(count) if count >= 1 => count as f64,
        _ => return CalculationResult::zero(),
    };

    if tip_percentage < 0.0 {
        return CalculationResult::zero();
    }

    // `>=` is false for NaN, so NaN bills fall through to zero as well.
    let bill = match bill_amount {
        Some(amount) if amount >= 0.0 => amount,
        _ => return CalculationResult::zero(),
    };

    let total_tip = bill * (tip_percentage / 100.0);
    let total_with_tip = bill + total_tip;

    CalculationResult::new(total_tip / people, total_with_tip / people)
}
