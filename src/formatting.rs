//! Dutch (`nl-NL`) number formatting for prices and quantities.
//!
//! Prices follow the shop's display convention: euro sign, a no-break space,
//! `.` as grouping separator, `,` as decimal separator, no forced decimals,
//! and a literal `,-` suffix marking a whole-euro asking price.

const CURRENCY_SYMBOL: &str = "€";
const NO_BREAK_SPACE: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const PRICE_SUFFIX: &str = ",-";

/// Fraction digits allowed for euro amounts.
const CURRENCY_MAX_FRACTION: u32 = 2;
/// Fraction digits allowed for plain decimals.
const DECIMAL_MAX_FRACTION: u32 = 3;

/// Format a price for display, e.g. `1234.0` → `"€ 1.234,-"` (no-break space).
pub fn format_price(price: f64) -> String {
    let Some(number) = format_number(price, 0, CURRENCY_MAX_FRACTION) else {
        return format!("{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{price}{PRICE_SUFFIX}");
    };
    format!("{CURRENCY_SYMBOL}{NO_BREAK_SPACE}{number}{PRICE_SUFFIX}")
}

/// Format a plain quantity with Dutch grouping, e.g. `120500.0` → `"120.500"`.
pub fn format_decimal(value: f64) -> String {
    format_number(value, 0, DECIMAL_MAX_FRACTION).unwrap_or_else(|| value.to_string())
}

/// Format a distance in kilometres.
pub fn format_mileage(km: f64) -> String {
    format!("{} km", format_decimal(km))
}

/// Returns `None` for non-finite input and for magnitudes beyond `u128`.
fn format_number(value: f64, min_fraction: u32, max_fraction: u32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let scale = 10u128.pow(max_fraction);
    // f64::round rounds half away from zero.
    let scaled = (value.abs() * scale as f64).round();
    if scaled >= u128::MAX as f64 {
        return None;
    }
    let scaled = scaled as u128;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if value.is_sign_negative() && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));

    let mut digits = format!("{fraction:0width$}", width = max_fraction as usize);
    while digits.len() > min_fraction as usize && digits.ends_with('0') {
        digits.pop();
    }
    if !digits.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(&digits);
    }
    Some(out)
}

fn group_thousands(value: u128) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, ch) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
