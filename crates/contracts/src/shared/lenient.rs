//! Tolerant deserializers for template-rendered payloads.
//!
//! The server dumps database rows straight into the page, so text columns may
//! arrive as `null` or as numbers and numeric columns as `null`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Текстовое поле: `null` -> "", число -> его десятичная запись
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Числовое поле: `null` -> 0, строка с числом -> число
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => n as f64,
        Some(Scalar::Float(n)) => n,
        Some(Scalar::Text(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Scalar::Bool(_)) | None => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string")]
        text: String,
        #[serde(default, deserialize_with = "number")]
        value: f64,
    }

    fn parse(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_accepts_null_and_numbers() {
        assert_eq!(parse(r#"{"text": null}"#).text, "");
        assert_eq!(parse(r#"{"text": 1042}"#).text, "1042");
        assert_eq!(parse(r#"{"text": "R-7"}"#).text, "R-7");
        assert_eq!(parse(r#"{}"#).text, "");
    }

    #[test]
    fn test_number_accepts_null_and_strings() {
        assert_eq!(parse(r#"{"value": null}"#).value, 0.0);
        assert_eq!(parse(r#"{"value": "12.5"}"#).value, 12.5);
        assert_eq!(parse(r#"{"value": 3}"#).value, 3.0);
        assert_eq!(parse(r#"{"value": "n/a"}"#).value, 0.0);
    }
}
