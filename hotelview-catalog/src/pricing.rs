use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Currencies whose minor unit is not displayed
const ZERO_DECIMAL_CURRENCIES: &[&str] = &["JPY", "KRW", "VND", "CLP", "ISK"];

fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "CNY" => "CN¥",
        _ => return None,
    };
    Some(symbol)
}

/// Insert `,` every three digits, en-US style
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount as en-US currency with no forced fraction digits.
///
/// A missing or non-finite amount formats as zero. Fractions are rounded to
/// the currency's minor unit and trailing zeros dropped (`$150.5`, `$150`).
pub fn format_currency(amount: Option<f64>, currency: &str) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    let code = currency.trim().to_uppercase();
    let max_digits: i32 = if ZERO_DECIMAL_CURRENCIES.contains(&code.as_str()) { 0 } else { 2 };

    let factor = 10f64.powi(max_digits);
    let scaled = (amount.abs() * factor).round() as u64;
    let unit = factor as u64;
    let whole = scaled / unit;
    let fraction = scaled % unit;

    let mut number = group_thousands(whole);
    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = max_digits as usize);
        number.push('.');
        number.push_str(digits.trim_end_matches('0'));
    }

    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{}\u{a0}{}", sign, code, number),
    }
}

/// Number of nights between two dates, rounded up
pub fn nights_between(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Option<i64> {
    Some((check_out? - check_in?).num_days())
}

/// Short stay date such as `Fri, Dec 20`
pub fn format_stay_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Five-star rendering of an overall rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarRating {
    pub filled: u8,
    pub total: u8,
    pub label: String,
}

impl StarRating {
    pub const MAX_STARS: u8 = 5;

    /// Absent and zero ratings are not rendered
    pub fn from_rating(rating: Option<f64>) -> Option<Self> {
        let rating = rating.filter(|r| r.is_finite() && *r != 0.0)?;
        let filled = rating.floor().clamp(0.0, Self::MAX_STARS as f64) as u8;
        Some(Self {
            filled,
            total: Self::MAX_STARS,
            label: format!("{:.1}", rating),
        })
    }
}
