//! Display formatting for quote fields.
//!
//! Every function here is total: missing or unusable input renders as
//! [`NOT_AVAILABLE`] instead of failing. There is deliberately no error
//! type on this layer.

/// Placeholder rendered for any value that cannot be displayed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a currency amount with a magnitude suffix.
///
/// Values of at least 1e12 / 1e9 / 1e6 render as `$X.YZT` / `$X.YZB` /
/// `$X.YZM`; smaller values render in full with comma grouping, e.g.
/// `$1,234.56`. `None`, non-finite values, and exactly zero all render as
/// `N/A`; a reported zero market cap is indistinguishable from an
/// unreported one on the dashboard this feeds.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(amount) = value else {
        return String::from(NOT_AVAILABLE);
    };
    if !amount.is_finite() || amount == 0.0 {
        return String::from(NOT_AVAILABLE);
    }

    if amount >= 1e12 {
        format!("${:.2}T", amount / 1e12)
    } else if amount >= 1e9 {
        format!("${:.2}B", amount / 1e9)
    } else if amount >= 1e6 {
        format!("${:.2}M", amount / 1e6)
    } else {
        // Negative amounts land here too and keep their sign.
        format!("${}", group_decimal(amount))
    }
}

/// Render a ratio with two decimals, e.g. `15.68`.
///
/// `None`, non-finite, zero, and negative values all render as `N/A`.
/// Suppressing negative P/E is a reporting convention: screens show `N/A`
/// for unprofitable companies rather than a negative multiple.
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => format!("{ratio:.2}"),
        _ => String::from(NOT_AVAILABLE),
    }
}

/// Render a share count with comma grouping, e.g. `12,345,678`.
///
/// Unlike the currency and ratio formatters, zero is a real observation
/// here (nothing traded) and renders as `0`.
pub fn format_volume(value: Option<u64>) -> String {
    match value {
        Some(count) => group_digits(&count.to_string()),
        None => String::from(NOT_AVAILABLE),
    }
}

/// Format with two decimals and comma-grouped integer digits.
fn group_decimal(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(sign.len() + integer.len() + integer.len() / 3 + 3);
    grouped.push_str(sign);
    grouped.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
