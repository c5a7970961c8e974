//! Water intake tally against the daily goal

use super::constants::{DAILY_GOAL_ML, DEFAULT_CUSTOM_AMOUNT_ML};

/// Cumulative intake, clamped to `0..=DAILY_GOAL_ML`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intake {
    consumed_ml: u64,
    custom_amount_ml: i64,
}

impl Intake {
    pub fn new() -> Self {
        Self {
            consumed_ml: 0,
            custom_amount_ml: DEFAULT_CUSTOM_AMOUNT_ML,
        }
    }

    pub fn consumed_ml(&self) -> u64 {
        self.consumed_ml
    }

    pub fn daily_goal_ml(&self) -> u64 {
        DAILY_GOAL_ML
    }

    pub fn custom_amount_ml(&self) -> i64 {
        self.custom_amount_ml
    }

    /// Add `amount_ml` to the tally, stopping at the daily goal.
    ///
    /// Zero and negative amounts leave the tally unchanged, the tally only
    /// ever grows.
    pub fn add_water(&mut self, amount_ml: i64) -> u64 {
        let amount = u64::try_from(amount_ml).unwrap_or(0);
        self.consumed_ml = self.consumed_ml.saturating_add(amount).min(DAILY_GOAL_ML);
        self.consumed_ml
    }

    /// Add the current custom amount
    pub fn add_custom(&mut self) -> u64 {
        self.add_water(self.custom_amount_ml)
    }

    /// Store the amount used by the next add-water action. No bounds are
    /// enforced here; `add_water` guards the tally.
    pub fn set_custom_amount(&mut self, amount_ml: i64) {
        self.custom_amount_ml = amount_ml;
    }

    pub fn remaining_ml(&self) -> u64 {
        DAILY_GOAL_ML - self.consumed_ml
    }

    pub fn goal_reached(&self) -> bool {
        self.consumed_ml >= DAILY_GOAL_ML
    }

    /// Share of the goal reached, 0.0 ..= 100.0
    pub fn progress_pct(&self) -> f64 {
        self.consumed_ml as f64 / DAILY_GOAL_ML as f64 * 100.0
    }
}

impl Default for Intake {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw amount typed into the custom amount field.
///
/// Fractions are truncated toward zero; anything unparsable counts as 0.
pub fn parse_amount(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(amount) = raw.parse::<i64>() {
        return amount;
    }

    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_default_custom_amount() {
        let intake = Intake::new();
        assert_eq!(intake.consumed_ml(), 0);
        assert_eq!(intake.custom_amount_ml(), 250);
        assert_eq!(intake.daily_goal_ml(), 2000);
        assert!(!intake.goal_reached());
    }

    #[test]
    fn add_water_clamps_at_goal() {
        let mut intake = Intake::new();
        intake.add_water(1900);
        assert_eq!(intake.add_water(300), 2000);
        assert!(intake.goal_reached());
        assert_eq!(intake.remaining_ml(), 0);
        assert_eq!(intake.add_water(500), 2000);
    }

    #[test]
    fn zero_amounts_leave_tally_unchanged() {
        let mut intake = Intake::new();
        intake.add_water(400);
        for _ in 0..10 {
            assert_eq!(intake.add_water(0), 400);
        }
    }

    #[test]
    fn negative_amounts_never_decrease_tally() {
        let mut intake = Intake::new();
        intake.add_water(400);
        assert_eq!(intake.add_water(-1000), 400);
        assert_eq!(intake.add_water(i64::MIN), 400);
    }

    #[test]
    fn add_custom_uses_stored_amount() {
        let mut intake = Intake::new();
        assert_eq!(intake.add_custom(), 250);
        intake.set_custom_amount(500);
        assert_eq!(intake.add_custom(), 750);
        intake.set_custom_amount(-20);
        assert_eq!(intake.add_custom(), 750);
    }

    #[test]
    fn progress_is_share_of_goal() {
        let mut intake = Intake::new();
        intake.add_water(500);
        assert_eq!(intake.progress_pct(), 25.0);
        assert_eq!(intake.remaining_ml(), 1500);
    }

    #[test]
    fn parse_amount_handles_field_input() {
        assert_eq!(parse_amount("300"), 300);
        assert_eq!(parse_amount("  125 "), 125);
        assert_eq!(parse_amount("-40"), -40);
        assert_eq!(parse_amount("187.9"), 187);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("NaN"), 0);
        assert_eq!(parse_amount("inf"), 0);
    }
}
