/// Currency code invoices are denominated in.
const CURRENCY: &str = "KES";

/// Format an invoice amount for display: `KES 125,000.50`.
pub fn format_amount(total: f64) -> String {
    let cents = (total.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    // Insert thousands separators into the whole part
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if total < 0.0 { "-" } else { "" };
    format!("{} {}{}.{:02}", CURRENCY, sign, grouped, frac)
}

/// Format a date string to a more readable format
pub fn format_date(date: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y").to_string()
    } else if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        d.format("%b %d, %Y").to_string()
    } else {
        date.to_string()
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(125000.5), "KES 125,000.50");
        assert_eq!(format_amount(80000.0), "KES 80,000.00");
        assert_eq!(format_amount(999.99), "KES 999.99");
        assert_eq!(format_amount(0.0), "KES 0.00");
        assert_eq!(format_amount(1234567.0), "KES 1,234,567.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-500.25), "KES -500.25");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-05"), "Jan 05, 2026");
        assert_eq!(format_date("2026-03-14T10:30:00+03:00"), "Mar 14, 2026");
        // Unparseable input passes through untouched
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
        assert_eq!(truncate("abc", 2), "ab");
    }
}
