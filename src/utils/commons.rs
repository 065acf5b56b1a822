use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes money as an exact JSON number (no trip through `f64`) while
/// still accepting numbers or numeric strings on the way in.
pub mod decimal_number {
    use super::*;

    pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bigdecimal::serde::json_num::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        BigDecimal::deserialize(deserializer)
    }
}

/// Same as [`decimal_number`] for optional fields of partial updates.
pub mod optional_decimal_number {
    use super::*;

    pub fn serialize<S>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bigdecimal::serde::json_num_option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<BigDecimal>::deserialize(deserializer)
    }
}

pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::str::FromStr;

    #[derive(Serialize, Deserialize)]
    struct Money {
        #[serde(with = "decimal_number")]
        amount: BigDecimal,
    }

    #[test]
    fn test_amount_serializes_as_number() {
        let money = Money { amount: BigDecimal::from(250) };
        let value = serde_json::to_value(&money).unwrap();
        assert!(value["amount"].is_number());
        assert_eq!(value["amount"].as_f64(), Some(250.0));
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let from_number: Money = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        let from_string: Money = serde_json::from_str(r#"{"amount": "12.5"}"#).unwrap();
        assert_eq!(from_number.amount, BigDecimal::from_str("12.5").unwrap());
        assert_eq!(from_string.amount, BigDecimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_amount_keeps_every_digit() {
        for text in ["12345678901234567.89", "0.000000000000000000001", "1e400"] {
            let original = BigDecimal::from_str(text).unwrap();
            let value = serde_json::to_value(&Money { amount: original.clone() }).unwrap();
            assert!(value["amount"].is_number(), "{} rendered as {}", text, value["amount"]);

            let back: Money = serde_json::from_value(value).unwrap();
            assert_eq!(back.amount, original);
        }
    }

    #[test]
    fn test_amount_rejects_wrong_type() {
        assert!(serde_json::from_str::<Money>(r#"{"amount": true}"#).is_err());
        assert!(serde_json::from_str::<Money>(r#"{"amount": "lots"}"#).is_err());
    }
}
