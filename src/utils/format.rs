use wasm_bindgen::JsValue;

/// Format a dollar amount as `$1,234.50`: two decimals, en-US thousands
/// separators, minus sign ahead of the dollar sign for negatives.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Locale-aware display of an ISO-8601 timestamp. Unparseable or empty
/// input falls back to the raw string / "N/A".
pub fn format_timestamp(iso: &str) -> String {
    if iso.trim().is_empty() {
        return "N/A".to_string();
    }
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}

/// Detail-view placeholder: empty values render as a literal "N/A" rather
/// than being omitted.
pub fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals_and_separators() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(75.0), "$75.00");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn empty_values_become_na() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("   "), "N/A");
        assert_eq!(or_na("Dock 4"), "Dock 4");
    }
}
