//! Rupiah price formatting (`id-ID` conventions).

/// Shown in product grids when a product has no price
pub const LIST_PRICE_MISSING: &str = "Harga belum tersedia";
/// Shown on the detail page when a product has no price
pub const DETAIL_PRICE_MISSING: &str = "Harga Hubungi Kami";

/// Formats an amount as `Rp 150.000`: `.` groups thousands, `,` separates at most two
/// decimals, and the currency symbol is followed by a no-break space.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_idr(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}Rp\u{a0}{grouped}")
    } else {
        let fraction = format!("{fraction:02}");
        format!("{sign}Rp\u{a0}{grouped},{}", fraction.trim_end_matches('0'))
    }
}

/// Formats an optional price, falling back to `missing` when it is absent or zero.
#[must_use]
pub fn format_price(price: Option<f64>, missing: &str) -> String {
    match price {
        Some(amount) if amount != 0.0 && amount.is_finite() => format_idr(amount),
        _ => missing.to_string(),
    }
}
