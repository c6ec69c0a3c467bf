//! Person domain type, its identifier and the field validation rules.

use crate::constants::MIN_NUMBER_DIGITS;
use crate::errors::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2,3}-[0-9]+$").expect("phone number pattern compiles"));

/// Store-assigned identifier of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generates a fresh identifier for a document about to be inserted
    pub fn new() -> Self {
        PersonId(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PersonId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(PersonId).map_err(|_| Error::Cast {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Serialized form of a stored person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

/// Request payload for create and update, as sent by the client.
///
/// Fields stay untyped until validation so that a wrongly typed value is
/// reported as a field failure rather than as an unreadable body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
}

/// Fields that passed validation and may be written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub number: String,
}

impl PersonInput {
    /// Checks every field and reports all failures at once.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming each offending field
    pub fn validate(self) -> Result<PersonFields, Error> {
        let mut failures = Vec::new();

        let name = match cast_to_string(self.name) {
            Ok(Some(name)) if !name.trim().is_empty() => Some(name),
            Ok(Some(_)) => {
                failures.push("name: name must not be empty".to_string());
                None
            }
            Ok(None) => {
                failures.push("name: name is required".to_string());
                None
            }
            Err(value) => {
                failures.push(format!("name: Cast to string failed for value `{}`", value));
                None
            }
        };

        let number = match cast_to_string(self.number) {
            Ok(Some(number)) if is_valid_number(&number) => Some(number),
            Ok(Some(number)) => {
                failures.push(format!("number: `{}` is not a valid phone number", number));
                None
            }
            Ok(None) => {
                failures.push("number: number is required".to_string());
                None
            }
            Err(value) => {
                failures.push(format!("number: Cast to string failed for value `{}`", value));
                None
            }
        };

        match (name, number) {
            (Some(name), Some(number)) => Ok(PersonFields { name, number }),
            _ => Err(Error::Validation(format!(
                "Person validation failed: {}",
                failures.join(", ")
            ))),
        }
    }
}

/// Scalars become their string form and `null` counts as absent. Arrays and
/// objects are handed back as uncastable.
fn cast_to_string(value: Option<Value>) -> Result<Option<String>, Value> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(other),
    }
}

/// Two or three leading digits, a hyphen, then digits; eight digits at least.
pub fn is_valid_number(number: &str) -> bool {
    PHONE_NUMBER.is_match(number)
        && number.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_NUMBER_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn input(name: Option<&str>, number: Option<&str>) -> PersonInput {
        PersonInput {
            name: name.map(Value::from),
            number: number.map(Value::from),
        }
    }

    #[test]
    fn accepts_well_formed_numbers() {
        for number in ["09-1234556", "040-22334455", "12-345678"] {
            assert!(is_valid_number(number), "{number} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        for number in [
            "12345",
            "abc-1234",
            "1-23456789",
            "1234-5678901",
            "09-12345",
            "040-",
            "040-1234 567",
            "040-12345\u{0660}",
            "\u{0660}\u{0664}-12345678",
            "040-1234567\u{0969}",
            "",
        ] {
            assert!(!is_valid_number(number), "{number} should be rejected");
        }
    }

    #[test]
    fn valid_input_keeps_values_untouched() {
        let fields = input(Some(" Arto Hellas "), Some("040-123456"))
            .validate()
            .unwrap();
        assert_eq!(fields.name, " Arto Hellas ");
        assert_eq!(fields.number, "040-123456");
    }

    #[test]
    fn blank_name_is_a_validation_error() {
        let err = input(Some("   "), Some("040-123456")).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "Person validation failed: name: name must not be empty"
        );
    }

    #[test]
    fn every_failing_field_is_reported() {
        let err = input(None, Some("12345")).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Person validation failed: name: name is required, number: `12345` is not a valid phone number"
        );

        let err = PersonInput::default().validate().unwrap_err();
        assert!(err.to_string().contains("number: number is required"));
    }

    #[test]
    fn scalar_values_are_cast_to_strings() {
        let payload: PersonInput =
            serde_json::from_str(r#"{"name": 42, "number": 12345}"#).unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "Person validation failed: number: `12345` is not a valid phone number"
        );
    }

    #[test]
    fn structured_values_fail_validation() {
        let payload: PersonInput =
            serde_json::from_str(r#"{"name": ["Arto"], "number": null}"#).unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "Person validation failed: name: Cast to string failed for value `[\"Arto\"]`, number: number is required"
        );
    }

    #[test]
    fn person_id_parses_canonical_uuids() {
        let id = PersonId::new();
        let parsed: PersonId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_person_id_is_a_cast_error() {
        let err = "5c41c90e84d891c15dfa3431".parse::<PersonId>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cast);
    }

    #[test]
    fn person_serializes_with_id_key() {
        let id = PersonId::new();
        let person = Person {
            id,
            name: "Ada Lovelace".to_string(),
            number: "39-44-5323523".to_string(),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": id.to_string(),
                "name": "Ada Lovelace",
                "number": "39-44-5323523",
            })
        );
    }
}
