//! Display formatting shared by the dashboard and the HTML report.

/// Whole-dollar amount with thousands separators, e.g. `SGD $525,000`
pub fn format_sgd(amount: f64) -> String {
    format!("SGD ${}", format_thousands(amount))
}

/// Rounds to zero decimals and groups digits by thousands: `1234567.5` -> `1,234,568`
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_cpi(cpi: f64) -> String {
    format!("{:.2}", cpi)
}

/// Capitalizes the first letter of every word, lowercasing the rest.
/// A word starts at any letter not preceded by another letter, so
/// "4 room" becomes "4 Room".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_is_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}
