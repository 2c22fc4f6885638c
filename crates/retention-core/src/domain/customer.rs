//! Customer record as decoded from the customer store.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{Result, RetentionError};

/// Customer key (the account phone number).
///
/// Accepts digits, `-`, spaces, parentheses and an optional leading `+`.
/// Only surrounding whitespace is trimmed; the formatting is not normalized,
/// so `(408) 555-0101` and `408-555-0101` are different keys. Lookups must
/// use the same form the record was stored with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 32;

    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let value = raw.as_ref().trim();
        let len = value.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(RetentionError::InvalidInput(format!(
                "phone must be {}..={} characters, got {len}",
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }

        let body = value.strip_prefix('+').unwrap_or(value);
        let valid = body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '(' | ')'));
        if !valid || !body.chars().any(|c| c.is_ascii_digit()) {
            return Err(RetentionError::InvalidInput(format!(
                "phone contains unsupported characters: {value:?}"
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = RetentionError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of customer account data.
///
/// Plan columns are categorical (`yes` / `no`) in storage and arrive here
/// already decoded to booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub phone: Phone,
    pub state: String,
    pub account_length: u32,
    pub area_code: u32,
    pub international_plan: bool,
    pub voicemail_plan: bool,
    pub voicemail_messages: u32,
    pub day_mins: f64,
    pub day_calls: u32,
    pub eve_mins: f64,
    pub eve_calls: u32,
    pub night_mins: f64,
    pub night_calls: u32,
    pub intl_mins: f64,
    pub intl_calls: u32,
    pub customer_service_calls: u32,
}

impl CustomerRecord {
    #[cfg(test)]
    pub(crate) fn sample(phone: &str) -> Self {
        Self {
            phone: Phone::new(phone).unwrap(),
            state: "KS".to_string(),
            account_length: 128,
            area_code: 415,
            international_plan: false,
            voicemail_plan: true,
            voicemail_messages: 25,
            day_mins: 265.1,
            day_calls: 110,
            eve_mins: 197.4,
            eve_calls: 99,
            night_mins: 244.7,
            night_calls: 91,
            intl_mins: 10.0,
            intl_calls: 3,
            customer_service_calls: 1,
        }
    }
}

/// Decode a categorical yes/no column into its one-hot boolean.
pub fn decode_yes_no(column: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        other => Err(RetentionError::Store(format!(
            "column {column}: expected yes/no, got {other:?}"
        ))),
    }
}

pub fn encode_yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
