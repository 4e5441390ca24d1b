//! Display formatting for the overview metrics.

/// Fixed-point rendering with `,` between groups of three integer digits.
pub fn thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // "-0.00" is shown as "0.00"
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `$17,500.00 B`, or "No data" for an undefined mean.
pub fn gdp_billions(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${} B", thousands(v, 2)),
        None => "No data".to_string(),
    }
}

/// `886.00 M`, or "No data" for an undefined mean.
pub fn population_millions(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} M", thousands(v, 2)),
        None => "No data".to_string(),
    }
}

/// Table cell for an optional numeric column; missing values render empty.
pub fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v}")).unwrap_or_default()
}
