use chrono::{DateTime, Utc};

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Point balances: grouped integer part, at most two decimals, no trailing zeros.
pub fn format_pad(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let frac = frac_part.trim_end_matches('0');
    let mut out = String::new();
    if negative && fixed != "0.00" {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn format_usd(amount: f64) -> String {
    format!("${:.5}", amount)
}

pub fn format_crypto(amount: f64, currency: &str) -> String {
    let text = format!("{:.4}", amount);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, currency)
}

pub fn format_time(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// `2024-03-01 14:05` in UTC, or a dash for missing and unparseable stamps.
pub fn format_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Seconds from `now` until `timestamp`, or `None` once it has passed.
pub fn seconds_until(timestamp: Option<&str>, now: DateTime<Utc>) -> Option<i64> {
    let target = DateTime::parse_from_rfc3339(timestamp?).ok()?.with_timezone(&Utc);
    let left = (target - now).num_seconds();
    (left > 0).then_some(left)
}

/// Shortens long wallet addresses for tables: `UQBvW8…ggGG`.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_formatting() {
        assert_eq!(format_pad(0.0), "0");
        assert_eq!(format_pad(250.0), "250");
        assert_eq!(format_pad(1234567.0), "1,234,567");
        assert_eq!(format_pad(1500.5), "1,500.5");
        assert_eq!(format_pad(-42.25), "-42.25");
        assert_eq!(format_pad(0.001), "0");
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_usd(0.00024), "$0.00024");
        assert_eq!(format_crypto(2.5, "TON"), "2.5 TON");
        assert_eq!(format_crypto(3.0, "TRX"), "3 TRX");
    }

    #[test]
    fn time_and_addresses() {
        assert_eq!(format_time(3725), "1h 2m 5s");
        assert_eq!(format_time(65), "1m 5s");
        assert_eq!(format_time(-3), "0s");
        assert_eq!(
            short_address("UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG"),
            "UQBvW8…ggGG"
        );
        assert_eq!(short_address("@alice"), "@alice");
    }

    #[test]
    fn dates_and_countdowns() {
        assert_eq!(format_date(Some("2024-03-01T14:05:59+02:00")), "2024-03-01 12:05");
        assert_eq!(format_date(Some("soon")), "-");
        assert_eq!(format_date(None), "-");

        let now = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(seconds_until(Some("2024-03-01T13:00:00Z"), now), Some(3600));
        assert_eq!(seconds_until(Some("2024-03-01T11:00:00Z"), now), None);
        assert_eq!(seconds_until(None, now), None);
    }
}
