//! Serde helpers for publisher-shaped JSON.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Deserialize a seconds value that may arrive as a JSON number or as a
/// numeric string (`92`, `92.5`, `"92"`). Unparsable strings read as 0,
/// matching the lenient policy for publisher break lists.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientF64;

    impl Visitor<'_> for LenientF64 {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            #[allow(clippy::cast_precision_loss)]
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            #[allow(clippy::cast_precision_loss)]
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(v.trim().parse().unwrap_or(0.0))
        }
    }

    deserializer.deserialize_any(LenientF64)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::lenient_f64")]
        duration: f64,
    }

    fn parse(json: &str) -> f64 {
        serde_json::from_str::<Probe>(json).unwrap().duration
    }

    #[test]
    fn accepts_numbers() {
        assert!((parse(r#"{"duration": 92}"#) - 92.0).abs() < f64::EPSILON);
        assert!((parse(r#"{"duration": 92.5}"#) - 92.5).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_numeric_strings() {
        assert!((parse(r#"{"duration": "92"}"#) - 92.0).abs() < f64::EPSILON);
        assert!((parse(r#"{"duration": " 30.25 "}"#) - 30.25).abs() < f64::EPSILON);
    }

    #[test]
    fn unparsable_strings_read_as_zero() {
        assert!(parse(r#"{"duration": "ninety"}"#).abs() < f64::EPSILON);
        assert!(parse(r#"{"duration": ""}"#).abs() < f64::EPSILON);
    }
}
