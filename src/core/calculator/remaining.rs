/// Hours still to work this week. Negative once the target is exceeded.
pub fn calculate_remaining(weekly_total: f64, target_hours: f64) -> f64 {
    target_hours - weekly_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_clamped() {
        assert_eq!(calculate_remaining(8.0, 40.0), 32.0);
        assert_eq!(calculate_remaining(42.5, 40.0), -2.5);
    }
}
