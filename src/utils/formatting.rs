//! Formatting utilities used for CLI, report and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours with two decimals, e.g. `8.00`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Hours rendered as `HHh MMm`, keeping the sign.
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let abs_m = total_minutes.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
