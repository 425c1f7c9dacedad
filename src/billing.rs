//! Bill derivation: subtotal, percentage discount, fixed-rate tax.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::{Bill, CartLine, PaymentMethod};

/// Fixed sales tax rate (8.25%), applied to the post-discount amount.
pub const TAX_RATE: f64 = 0.0825;

/// Derives a bill snapshot from the given cart lines. The lines are copied;
/// the returned bill does not observe later cart mutation.
///
/// Fails with `Validation` when the cart is empty or the customer name or
/// table number is blank. The discount percentage is clamped to 0..=100.
pub fn compute_bill(
    lines: &[CartLine],
    discount_percent: f64,
    payment_method: PaymentMethod,
    customer_name: &str,
    table_number: &str,
) -> Result<Bill> {
    compute_bill_at(
        lines,
        discount_percent,
        payment_method,
        customer_name,
        table_number,
        Utc::now(),
    )
}

/// Deterministic variant of [`compute_bill`] with an explicit timestamp.
/// Identical inputs produce a bit-identical bill.
pub fn compute_bill_at(
    lines: &[CartLine],
    discount_percent: f64,
    payment_method: PaymentMethod,
    customer_name: &str,
    table_number: &str,
    timestamp: DateTime<Utc>,
) -> Result<Bill> {
    if lines.is_empty() {
        return Err(Error::validation("please add items to the bill"));
    }
    if customer_name.trim().is_empty() {
        return Err(Error::validation("please enter customer name"));
    }
    if table_number.trim().is_empty() {
        return Err(Error::validation("please enter table number"));
    }

    let discount_percent = discount_percent.clamp(0.0, 100.0);
    let subtotal: f64 = lines.iter().map(|l| l.price * l.quantity as f64).sum();
    let discount_amount = subtotal * discount_percent / 100.0;
    let tax_amount = (subtotal - discount_amount) * TAX_RATE;
    let total = subtotal - discount_amount + tax_amount;

    Ok(Bill {
        customer_name: customer_name.to_string(),
        table_number: table_number.to_string(),
        order_items: lines.to_vec(),
        subtotal,
        discount_percent,
        discount_amount,
        tax_amount,
        total,
        payment_method,
        timestamp,
    })
}

/// Presentation rounding to two decimals, half-up (ties away from zero) on
/// the f64 value: `round_money(0.125) == 0.13`. Stored bill fields keep full
/// precision; apply this only when displaying an amount.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
