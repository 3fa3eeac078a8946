//! Cart totals and processing-fee computation.
//!
//! Fees follow the usual card schedule of a percentage plus a fixed charge.
//! Intermediate values stay unrounded; only the reported fee and the final
//! total are rounded to cents.

use serde::{Deserialize, Serialize};

use crate::types::{LineItem, PaymentMethod};

/// Card processing fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Proportional part of the fee (0.029 = 2.9%)
    pub percent: f64,
    /// Fixed part of the fee in major units
    pub fixed: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            percent: 0.029,
            fixed: 0.30,
        }
    }
}

impl FeeSchedule {
    /// Unrounded fee for charging `subtotal` with `method`.
    ///
    /// Zero only for fee-free methods; a card charge always carries the
    /// fixed part, even on an empty subtotal.
    pub fn fee_for(&self, subtotal: f64, method: PaymentMethod) -> f64 {
        if !method.has_fee() {
            return 0.0;
        }
        subtotal * self.percent + self.fixed
    }
}

/// Derived amounts shown at checkout
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line item amounts
    pub subtotal: f64,
    /// Estimated processing fee, rounded to cents
    pub processing_fee: f64,
    /// Amount charged, rounded to cents
    pub total: f64,
}

impl Totals {
    pub fn compute(items: &[LineItem], method: PaymentMethod, cover_fees: bool, fees: &FeeSchedule) -> Self {
        // Float `sum()` starts from -0.0, which would print as "$-0.00"
        let subtotal = items.iter().fold(0.0, |acc, item| acc + item.amount);
        let fee = fees.fee_for(subtotal, method);
        let total = if cover_fees { subtotal + fee } else { subtotal };

        Self {
            subtotal,
            processing_fee: round_cents(fee),
            total: round_cents(total),
        }
    }
}

/// Round to 2 decimal places, half-up at the cents boundary.
///
/// The nudge keeps binary representations of exact half-cents (1.005 is
/// stored as 1.00499999...) rounding upwards. Above roughly $10M the nudge
/// falls below one ULP of the scaled value, so exact half-cents may round
/// down there.
///
/// Zero is always returned as positive zero.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = (scaled + scaled.signum() * 1e-9).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format an amount as dollars for display
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", round_cents(value))
}
