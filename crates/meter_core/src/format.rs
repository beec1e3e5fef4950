/// Formats an amount as US dollars, e.g. `$1,234.56`.
///
/// At most two fraction digits are shown; trailing zeros are trimmed down to
/// `min_fraction_digits`. Non-finite amounts format as zero.
pub fn format_currency(amount: f64, min_fraction_digits: usize) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;

    let mut fraction = format!("{:02}", cents % 100);
    let keep = min_fraction_digits.min(2);
    while fraction.len() > keep && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = String::with_capacity(16);
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&format_with_commas(cents / 100));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Parses a formatted currency string back into a plain number.
///
/// Everything except digits, `.` and `-` is stripped first, so `$80,000`
/// parses as `80000`. Returns `None` when nothing numeric remains.
pub fn parse_currency(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats elapsed seconds as `MM:SS`. Minutes keep counting past 99.
pub fn format_clock(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Human-readable duration label: `45 min`, `1h`, `1h 15m`.
pub fn format_duration_label(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}m")
    }
}

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
