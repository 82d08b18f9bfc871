//! Serde adapter for the occupancy wire format
//!
//! Occupancy travels as the literal strings `"Yes"`/`"No"` on the wire while
//! the domain types carry a bool. Use with `#[serde(with = "yes_no")]`.

use serde::{Deserialize, Deserializer, Serializer, de::Error};

pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(D::Error::custom(format!(
            "expected \"Yes\" or \"No\", got \"{}\"",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        occupancy: bool,
    }

    #[test]
    fn test_serializes_bool_as_yes_no() {
        let json = serde_json::to_string(&Wrapper { occupancy: true }).unwrap();
        assert_eq!(json, r#"{"occupancy":"Yes"}"#);

        let json = serde_json::to_string(&Wrapper { occupancy: false }).unwrap();
        assert_eq!(json, r#"{"occupancy":"No"}"#);
    }

    #[test]
    fn test_deserializes_yes_no_strings() {
        let parsed: Wrapper = serde_json::from_str(r#"{"occupancy":"Yes"}"#).unwrap();
        assert!(parsed.occupancy);

        let parsed: Wrapper = serde_json::from_str(r#"{"occupancy":"No"}"#).unwrap();
        assert!(!parsed.occupancy);
    }

    #[test]
    fn test_rejects_other_strings() {
        let result = serde_json::from_str::<Wrapper>(r#"{"occupancy":"maybe"}"#);
        assert!(result.is_err());
    }
}
