//! API request bodies

use serde::{Deserialize, Serialize};

use crate::state::parse_amount;

/// Body of `PUT /interval`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetIntervalRequest {
    pub minutes: i64,
}

/// Body of `POST /water`; without an amount the custom amount is used
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddWaterRequest {
    #[serde(default)]
    pub amount: Option<i64>,
}

/// Raw value of the custom amount field, as typed or as a number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Milliliters this input stands for; unparsable input counts as 0
    pub fn to_ml(&self) -> i64 {
        match self {
            RawAmount::Number(n) if n.is_finite() => n.trunc() as i64,
            RawAmount::Number(_) => 0,
            RawAmount::Text(text) => parse_amount(text),
        }
    }
}

/// Body of `PUT /water/custom`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomAmountRequest {
    pub amount: RawAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_amount_accepts_numbers_and_text() {
        let number: CustomAmountRequest = serde_json::from_str(r#"{"amount": 330}"#).unwrap();
        assert_eq!(number.amount.to_ml(), 330);

        let text: CustomAmountRequest = serde_json::from_str(r#"{"amount": "275"}"#).unwrap();
        assert_eq!(text.amount.to_ml(), 275);

        let junk: CustomAmountRequest = serde_json::from_str(r#"{"amount": "lots"}"#).unwrap();
        assert_eq!(junk.amount.to_ml(), 0);
    }

    #[test]
    fn add_water_amount_is_optional() {
        let empty: AddWaterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.amount, None);

        let given: AddWaterRequest = serde_json::from_str(r#"{"amount": 300}"#).unwrap();
        assert_eq!(given.amount, Some(300));
    }
}
