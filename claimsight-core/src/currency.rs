//! Currency display for predicted claim amounts.

/// Currency symbol the predictions are denominated in.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as `₹12,345.67`: two decimals, thousands grouping.
///
/// Negative predictions are possible with a linear model and are rendered
/// with a leading minus rather than clamped, so a misbehaving artifact is
/// visible instead of hidden.
pub fn format_amount(amount: f64) -> String {
    let negative = amount.is_sign_negative() && amount != 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{int_grouped}.{frac_part}")
}
