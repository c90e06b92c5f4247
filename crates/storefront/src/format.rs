//! Display formatting for prices and counts.

use shoegrid_core::Cents;

/// Format an amount of cents as US dollars: `$`, comma thousands separators,
/// always two decimals.
///
/// - `format_price(0)` -> `"$0.00"`
/// - `format_price(1999)` -> `"$19.99"`
/// - `format_price(100000)` -> `"$1,000.00"`
#[must_use]
pub fn format_price(amount: impl Into<Cents>) -> String {
    let amount = amount.into();
    format!("${}.{:02}", group_thousands(amount.major()), amount.minor())
}

/// `"{count} {noun}"`, appending `s` to the noun unless `count == 1`.
///
/// - `pluralize("Color", 0)` -> `"0 Colors"`
/// - `pluralize("Color", 1)` -> `"1 Color"`
#[must_use]
pub fn pluralize(noun: &str, count: u64) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
